//! Last-write-wins coalescing of per-frame updates.
//!
//! A store pushes every raw input into a [`FrameSlot`]; only the first push
//! after a flush asks the caller to schedule one. When the frame fires the
//! caller takes whatever value was pushed last.

#[derive(Clone, Debug)]
pub struct FrameSlot<T> {
    pending: Option<T>,
    scheduled: bool,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self {
            pending: None,
            scheduled: false,
        }
    }
}

impl<T> FrameSlot<T> {
    /// Overwrite the pending value. Returns `true` when no flush is
    /// outstanding yet and the caller must schedule one.
    #[must_use]
    pub fn push(&mut self, value: T) -> bool {
        self.pending = Some(value);
        !std::mem::replace(&mut self.scheduled, true)
    }

    /// Take the latest value and re-arm the schedule guard.
    pub fn take(&mut self) -> Option<T> {
        self.scheduled = false;
        self.pending.take()
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.scheduled = false;
    }
}
