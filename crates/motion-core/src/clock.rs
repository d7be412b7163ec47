use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// Millisecond time source used to compute delta-time on commit.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic clock measured from its own creation.
#[derive(Clone, Debug)]
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * crate::constants::MS_PER_SEC
    }
}

/// Hand-stepped clock. Clones share the same time, so a host can keep one
/// handle and give the other to the orchestrator.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::new(5.0);
        let b = a.clone();
        a.advance(11.0);
        assert_eq!(b.now_ms(), 16.0);
        b.set(0.0);
        assert_eq!(a.now_ms(), 0.0);
    }

    #[test]
    fn instant_clock_is_monotonic() {
        let c = InstantClock::new();
        let t0 = c.now_ms();
        let t1 = c.now_ms();
        assert!(t0 >= 0.0);
        assert!(t1 >= t0);
    }
}
