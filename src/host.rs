use crate::constants::{MOUSEMOVE_EVENT, PASSIVE_LISTENERS, SCROLL_EVENT};
use crate::dom;
use motion_core::error::Result;
use motion_core::{ListenerHost, MotionConfig, MotionError, MotionOrchestrator};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Browser host: passive `scroll` / `mousemove` listeners on `window` and a
/// reusable `requestAnimationFrame` callback that flushes the stores.
pub struct WindowHost {
    window: Option<web::Window>,
    scroll: Option<Closure<dyn FnMut()>>,
    pointer: Option<Closure<dyn FnMut(web::MouseEvent)>>,
    frame: RefCell<Option<FrameClosure>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl WindowHost {
    pub fn new() -> Self {
        Self {
            window: web::window(),
            scroll: None,
            pointer: None,
            frame: RefCell::new(None),
            frame_id: Rc::new(Cell::new(None)),
        }
    }

    fn wire_scroll(
        &mut self,
        window: &web::Window,
        target: Weak<MotionOrchestrator>,
        opts: &web::AddEventListenerOptions,
    ) -> Result<()> {
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(hub) = target.upgrade() {
                hub.update_scroll(dom::scroll_offset(&win));
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                SCROLL_EVENT,
                closure.as_ref().unchecked_ref(),
                opts,
            )
            .map_err(|e| dom::host_error("scroll listener", e))?;
        self.scroll = Some(closure);
        Ok(())
    }

    fn wire_pointer(
        &mut self,
        window: &web::Window,
        target: Weak<MotionOrchestrator>,
        opts: &web::AddEventListenerOptions,
    ) -> Result<()> {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if let Some(hub) = target.upgrade() {
                hub.update_mouse(ev.client_x() as f64, ev.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                MOUSEMOVE_EVENT,
                closure.as_ref().unchecked_ref(),
                opts,
            )
            .map_err(|e| dom::host_error("mousemove listener", e))?;
        self.pointer = Some(closure);
        Ok(())
    }
}

impl Default for WindowHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerHost for WindowHost {
    fn is_available(&self) -> bool {
        self.window.is_some() && dom::has_dom()
    }

    fn attach(&mut self, target: Weak<MotionOrchestrator>, config: &MotionConfig) -> Result<()> {
        let window = self
            .window
            .clone()
            .ok_or_else(|| MotionError::host("no window"))?;
        let opts = dom::listener_options(PASSIVE_LISTENERS);
        if config.listen_scroll {
            self.wire_scroll(&window, target.clone(), &opts)?;
        }
        if config.listen_pointer {
            self.wire_pointer(&window, target, &opts)?;
        }
        log::debug!(
            "[host] listening scroll={} pointer={}",
            self.scroll.is_some(),
            self.pointer.is_some()
        );
        Ok(())
    }

    fn detach(&mut self) {
        let scroll = self.scroll.take();
        let pointer = self.pointer.take();
        let Some(window) = &self.window else {
            return;
        };
        if let Some(c) = scroll {
            _ = window.remove_event_listener_with_callback(SCROLL_EVENT, c.as_ref().unchecked_ref());
        }
        if let Some(c) = pointer {
            _ = window
                .remove_event_listener_with_callback(MOUSEMOVE_EVENT, c.as_ref().unchecked_ref());
        }
        if let Some(id) = self.frame_id.take() {
            _ = window.cancel_animation_frame(id);
        }
    }

    fn request_frame(&self, target: Weak<MotionOrchestrator>) -> bool {
        let Some(window) = &self.window else {
            return false;
        };
        let mut slot = self.frame.borrow_mut();
        let frame_id = self.frame_id.clone();
        let callback = slot.get_or_insert_with(|| {
            Closure::wrap(Box::new(move |_ts: f64| {
                frame_id.set(None);
                if let Some(hub) = target.upgrade() {
                    hub.flush_frame();
                }
            }) as Box<dyn FnMut(f64)>)
        });
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.frame_id.set(Some(id));
                true
            }
            Err(e) => {
                log::warn!("[host] requestAnimationFrame failed: {:?}", e);
                false
            }
        }
    }
}

impl Drop for WindowHost {
    fn drop(&mut self) {
        // also cancels the frame: its closure is about to be freed
        self.detach();
    }
}
