//! The motion hub: owns both stores, the subscriber registry and the cached
//! audio / blessing-wave scalars, and broadcasts named events to subscribers.
//!
//! Everything runs on one thread. State sits behind `Cell`/`RefCell` so the
//! hub can be shared as `Rc<MotionOrchestrator>` and re-entered from inside a
//! subscriber callback (register, unregister, setters, nested dispatch).

use crate::clock::{Clock, InstantClock};
use crate::config::MotionConfig;
use crate::constants::*;
use crate::host::{HeadlessHost, ListenerHost};
use crate::mouse::{MouseState, MouseStore};
use crate::registry::Registry;
use crate::scroll::{ScrollState, ScrollStore};
use crate::state::{AudioReactive, EventData, MotionEvent, MotionSnapshot, MotionUniforms};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Outcome of a single dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: usize,
    pub failed: SmallVec<[String; 2]>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct MotionOrchestrator {
    this: Weak<MotionOrchestrator>,
    config: MotionConfig,
    clock: Box<dyn Clock>,
    host: RefCell<Box<dyn ListenerHost>>,
    scroll: RefCell<ScrollStore>,
    mouse: RefCell<MouseStore>,
    registry: RefCell<Registry>,
    audio: Cell<AudioReactive>,
    blessing_wave: Cell<f64>,
    hydrated: Cell<bool>,
    frame_requested: Cell<bool>,
}

impl MotionOrchestrator {
    pub fn new(host: impl ListenerHost + 'static) -> Rc<Self> {
        Self::with_parts(MotionConfig::default(), InstantClock::new(), host)
    }

    /// Hub with no DOM: `init` is a no-op and updates commit immediately.
    pub fn headless() -> Rc<Self> {
        Self::new(HeadlessHost)
    }

    pub fn with_parts(
        config: MotionConfig,
        clock: impl Clock + 'static,
        host: impl ListenerHost + 'static,
    ) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            config,
            clock: Box::new(clock),
            host: RefCell::new(Box::new(host)),
            scroll: RefCell::new(ScrollStore::new()),
            mouse: RefCell::new(MouseStore::new()),
            registry: RefCell::new(Registry::new()),
            audio: Cell::new(AudioReactive::default()),
            blessing_wave: Cell::new(0.0),
            hydrated: Cell::new(false),
            frame_requested: Cell::new(false),
        })
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    // ---------------- Lifecycle ----------------

    /// Attach window listeners. Does nothing when already hydrated or when
    /// the host has no DOM. Returns whether the hub is hydrated afterwards.
    pub fn init(&self) -> bool {
        if self.hydrated.get() {
            return true;
        }
        let mut host = self.host.borrow_mut();
        if !host.is_available() {
            log::debug!("[motion] no DOM available; init skipped");
            return false;
        }
        match host.attach(self.this.clone(), &self.config) {
            Ok(()) => {
                self.hydrated.set(true);
                log::info!("[motion] listeners attached");
                true
            }
            Err(e) => {
                log::error!("[motion] init failed: {e}");
                host.detach();
                false
            }
        }
    }

    /// Detach listeners, drop every subscriber and return to the
    /// uninitialized state. Safe to call repeatedly.
    pub fn cleanup(&self) {
        self.host.borrow_mut().detach();
        self.registry.borrow_mut().clear();
        // the host dropped any outstanding frame; commit its input silently
        self.flush_frame();
        if self.hydrated.replace(false) {
            log::info!("[motion] cleaned up");
        }
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated.get()
    }

    // ---------------- Subscribers ----------------

    /// Register (or replace) the callback for `id`.
    pub fn register<F>(&self, id: &str, callback: F)
    where
        F: Fn(&MotionEvent<'_>) -> anyhow::Result<()> + 'static,
    {
        if self.registry.borrow_mut().insert(id, Rc::new(callback)) {
            log::debug!("[motion] replaced subscriber '{id}'");
        }
    }

    pub fn unregister(&self, id: &str) -> bool {
        self.registry.borrow_mut().remove(id)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registry.borrow().contains(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn subscriber_ids(&self) -> Vec<String> {
        self.registry.borrow().ids().map(str::to_owned).collect()
    }

    /// Invoke every subscriber with `{trigger, data, snapshot}` in
    /// registration order. Failures are logged and reported, never returned.
    pub fn dispatch(&self, trigger: &str, data: EventData) -> DispatchReport {
        let snapshot = self.snapshot();
        let subscribers = self.registry.borrow().subscribers();
        let event = MotionEvent {
            trigger,
            data: &data,
            snapshot: &snapshot,
        };
        let mut report = DispatchReport::default();
        for sub in &subscribers {
            // removed or replaced by an earlier subscriber in this dispatch
            if !self.registry.borrow().is_live(sub) {
                continue;
            }
            match sub.call(&event) {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    log::warn!("[dispatch] {err}");
                    report.failed.push(sub.id.to_string());
                }
            }
        }
        report
    }

    // ---------------- Input ----------------

    pub fn update_scroll(&self, raw_scroll_y: f64) {
        let needs_flush = self.scroll.borrow_mut().update_scroll(raw_scroll_y);
        if needs_flush {
            self.schedule_flush();
        }
    }

    pub fn update_mouse(&self, x: f64, y: f64) {
        let needs_flush = self.mouse.borrow_mut().update_mouse(x, y);
        if needs_flush {
            self.schedule_flush();
        }
    }

    fn schedule_flush(&self) {
        if self.frame_requested.replace(true) {
            return;
        }
        let scheduled = self.host.borrow().request_frame(self.this.clone());
        if !scheduled {
            self.flush_frame();
        }
    }

    /// The per-frame tick: commit pending input, then broadcast whatever
    /// changed.
    pub fn flush_frame(&self) {
        self.frame_requested.set(false);
        let now = self.clock.now_ms();
        let scrolled = self.scroll.borrow_mut().flush(now, &self.config);
        let moved = self.mouse.borrow_mut().flush(now, &self.config);

        if scrolled {
            let data = {
                let scroll = self.scroll.borrow();
                let s = scroll.state();
                EventData::Scroll {
                    scroll_y: s.scroll_y,
                    velocity: s.scroll_velocity,
                    direction: s.direction,
                }
            };
            self.dispatch(ON_SCROLL, data);
        }
        if moved {
            let m = *self.mouse.borrow().state();
            self.dispatch(
                ON_MOUSE_MOVE,
                EventData::Mouse {
                    position: m.position,
                    velocity: m.velocity,
                    direction: m.direction,
                },
            );
        }
    }

    pub fn set_section_progress(&self, id: &str, progress: f64) {
        self.scroll.borrow_mut().set_section_progress(id, progress);
    }

    pub fn set_section_active(&self, id: Option<&str>) {
        self.scroll.borrow_mut().set_section_active(id);
    }

    /// Zero both stores (hot navigation, tests).
    pub fn reset_motion(&self) {
        self.scroll.borrow_mut().reset();
        self.mouse.borrow_mut().reset();
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.borrow().state().clone()
    }

    pub fn mouse_state(&self) -> MouseState {
        *self.mouse.borrow().state()
    }

    pub fn snapshot(&self) -> MotionSnapshot {
        MotionSnapshot {
            scroll: self.scroll_state(),
            mouse: self.mouse_state(),
            audio: self.audio.get(),
            blessing_wave: self.blessing_wave.get(),
        }
    }

    pub fn uniforms(&self, time_sec: f32) -> MotionUniforms {
        self.snapshot().uniforms(time_sec)
    }

    // ---------------- Cached scalars ----------------

    pub fn set_audio_reactive(&self, audio: AudioReactive) -> DispatchReport {
        self.audio.set(audio);
        self.dispatch(ON_AUDIO_REACTIVE, EventData::Audio(audio))
    }

    pub fn audio_reactive(&self) -> AudioReactive {
        self.audio.get()
    }

    pub fn set_blessing_wave_progress(&self, progress: f64) -> DispatchReport {
        self.blessing_wave.set(progress);
        self.dispatch(ON_BLESSING_WAVE_UPDATE, EventData::BlessingWave { progress })
    }

    pub fn blessing_wave_progress(&self) -> f64 {
        self.blessing_wave.get()
    }

    // ---------------- Named triggers ----------------

    pub fn on_section_enter(&self, id: &str) -> DispatchReport {
        let progress = {
            let mut scroll = self.scroll.borrow_mut();
            scroll.set_section_active(Some(id));
            scroll.state().section_progress.get(id).copied()
        };
        self.dispatch(ON_SECTION_ENTER, Self::section(id, progress))
    }

    /// Clears the active section only if `id` is the one currently active.
    pub fn on_section_exit(&self, id: &str) -> DispatchReport {
        let progress = {
            let mut scroll = self.scroll.borrow_mut();
            if scroll.state().section_active.as_deref() == Some(id) {
                scroll.set_section_active(None);
            }
            scroll.state().section_progress.get(id).copied()
        };
        self.dispatch(ON_SECTION_EXIT, Self::section(id, progress))
    }

    pub fn on_section_progress(&self, id: &str, progress: f64) -> DispatchReport {
        self.scroll.borrow_mut().set_section_progress(id, progress);
        self.dispatch(ON_SECTION_PROGRESS, Self::section(id, Some(progress)))
    }

    pub fn scroll_parallax(&self, target: &str, speed: f64) -> DispatchReport {
        self.dispatch(
            SCROLL_PARALLAX,
            EventData::Parallax {
                target: target.to_owned(),
                speed,
            },
        )
    }

    pub fn card_tilt(&self, target: &str, x: f64, y: f64) -> DispatchReport {
        self.dispatch(
            CARD_TILT,
            EventData::Tilt {
                target: target.to_owned(),
                x,
                y,
            },
        )
    }

    pub fn hero_reveal(&self, target: &str) -> DispatchReport {
        self.dispatch(
            HERO_REVEAL,
            EventData::Reveal {
                target: target.to_owned(),
            },
        )
    }

    /// Start signal for the externally tweened wave; progress updates follow
    /// through [`Self::set_blessing_wave_progress`].
    pub fn trigger_blessing_wave(&self) -> DispatchReport {
        let progress = self.blessing_wave.get();
        self.dispatch(ON_BLESSING_WAVE, EventData::BlessingWave { progress })
    }

    pub fn page_transition_in(&self, route: &str) -> DispatchReport {
        self.dispatch(PAGE_TRANSITION_IN, Self::route(route))
    }

    pub fn page_transition_out(&self, route: &str) -> DispatchReport {
        self.dispatch(PAGE_TRANSITION_OUT, Self::route(route))
    }

    fn section(id: &str, progress: Option<f64>) -> EventData {
        EventData::Section {
            id: id.to_owned(),
            progress,
        }
    }

    fn route(route: &str) -> EventData {
        EventData::Route {
            route: route.to_owned(),
        }
    }
}

impl std::fmt::Debug for MotionOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionOrchestrator")
            .field("config", &self.config)
            .field("hydrated", &self.hydrated.get())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}
