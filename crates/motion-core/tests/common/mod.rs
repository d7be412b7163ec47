// Shared fakes for host-side orchestrator tests.
#![allow(dead_code)]

use motion_core::error::Result;
use motion_core::{ListenerHost, MotionConfig, MotionError, MotionOrchestrator};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
pub struct HostLog {
    pub unavailable: bool,
    pub fail_attach: bool,
    pub target: Option<Weak<MotionOrchestrator>>,
    pub attaches: usize,
    pub detaches: usize,
    pub frames: Vec<Weak<MotionOrchestrator>>,
}

/// In-memory stand-in for the browser window. Clones share one log, so a
/// test keeps a handle after moving the host into the orchestrator.
#[derive(Clone, Default)]
pub struct FakeHost(pub Rc<RefCell<HostLog>>);

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        let host = Self::default();
        host.0.borrow_mut().unavailable = true;
        host
    }

    pub fn failing() -> Self {
        let host = Self::default();
        host.0.borrow_mut().fail_attach = true;
        host
    }

    fn listener_target(&self) -> Option<Rc<MotionOrchestrator>> {
        let target = self.0.borrow().target.clone();
        target.and_then(|w| w.upgrade())
    }

    /// Fire a window `scroll` event; ignored when no listener is attached.
    pub fn emit_scroll(&self, y: f64) -> bool {
        match self.listener_target() {
            Some(hub) => {
                hub.update_scroll(y);
                true
            }
            None => false,
        }
    }

    pub fn emit_mousemove(&self, x: f64, y: f64) -> bool {
        match self.listener_target() {
            Some(hub) => {
                hub.update_mouse(x, y);
                true
            }
            None => false,
        }
    }

    pub fn pending_frames(&self) -> usize {
        self.0.borrow().frames.len()
    }

    /// Run every queued animation-frame callback; returns how many ran.
    pub fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut self.0.borrow_mut().frames);
        for frame in &frames {
            if let Some(hub) = frame.upgrade() {
                hub.flush_frame();
            }
        }
        frames.len()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().target.is_some()
    }
}

impl ListenerHost for FakeHost {
    fn is_available(&self) -> bool {
        !self.0.borrow().unavailable
    }

    fn attach(&mut self, target: Weak<MotionOrchestrator>, config: &MotionConfig) -> Result<()> {
        let mut log = self.0.borrow_mut();
        if log.fail_attach {
            return Err(MotionError::host("addEventListener rejected"));
        }
        if config.listen_scroll || config.listen_pointer {
            log.target = Some(target);
        }
        log.attaches += 1;
        Ok(())
    }

    fn detach(&mut self) {
        let mut log = self.0.borrow_mut();
        log.frames.clear();
        if log.target.take().is_some() {
            log.detaches += 1;
        }
    }

    fn request_frame(&self, target: Weak<MotionOrchestrator>) -> bool {
        self.0.borrow_mut().frames.push(target);
        true
    }
}
