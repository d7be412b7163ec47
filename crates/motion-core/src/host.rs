use crate::config::MotionConfig;
use crate::orchestrator::MotionOrchestrator;
use std::rc::Weak;

/// Platform seam between the orchestrator and whatever produces input.
///
/// A browser host attaches window listeners that forward into
/// [`MotionOrchestrator::update_scroll`] / [`MotionOrchestrator::update_mouse`]
/// and schedules [`MotionOrchestrator::flush_frame`] on the next animation
/// frame. Hosts hold the orchestrator weakly so dropping the hub tears
/// everything down.
pub trait ListenerHost {
    /// `false` when there is no DOM to listen to (server-side, headless).
    fn is_available(&self) -> bool;

    fn attach(
        &mut self,
        target: Weak<MotionOrchestrator>,
        config: &MotionConfig,
    ) -> crate::error::Result<()>;

    /// Remove every listener added by `attach` and cancel any frame still
    /// requested. Must be idempotent.
    fn detach(&mut self);

    /// Arrange for `flush_frame` to run on the next frame. Returning `false`
    /// makes the orchestrator flush synchronously instead.
    fn request_frame(&self, target: Weak<MotionOrchestrator>) -> bool;
}

/// Host for contexts without a DOM: never attaches, never schedules.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessHost;

impl ListenerHost for HeadlessHost {
    fn is_available(&self) -> bool {
        false
    }

    fn attach(
        &mut self,
        _: Weak<MotionOrchestrator>,
        _: &MotionConfig,
    ) -> crate::error::Result<()> {
        Ok(())
    }

    fn detach(&mut self) {}

    fn request_frame(&self, _: Weak<MotionOrchestrator>) -> bool {
        false
    }
}
