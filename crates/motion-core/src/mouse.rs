//! Pointer store: same coalescing contract as the scroll store, in 2-D.

use crate::config::MotionConfig;
use crate::frame::FrameSlot;
use crate::state::Direction;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseState {
    pub position: DVec2,
    pub delta: DVec2,
    /// Smoothed pointer speed in px/s; never negative.
    pub velocity: f64,
    pub direction: Direction,
    pub last_update: f64,
}

impl MouseState {
    #[inline]
    pub fn mouse_x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn mouse_y(&self) -> f64 {
        self.position.y
    }
}

#[derive(Debug, Default)]
pub struct MouseStore {
    state: MouseState,
    pending: FrameSlot<DVec2>,
}

impl MouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &MouseState {
        &self.state
    }

    /// Record the latest pointer position. Returns `true` when a flush must
    /// be scheduled for the next frame.
    #[must_use]
    pub fn update_mouse(&mut self, x: f64, y: f64) -> bool {
        self.pending.push(DVec2::new(x, y))
    }

    pub fn flush(&mut self, now_ms: f64, config: &MotionConfig) -> bool {
        match self.pending.take() {
            Some(pos) => {
                self.commit(pos, now_ms, config);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, pos: DVec2, now_ms: f64, config: &MotionConfig) {
        let delta = pos - self.state.position;
        let dt = config.delta_seconds(self.state.last_update, now_ms);
        let velocity = config.smooth_velocity(self.state.velocity, delta.length() / dt);

        self.state = MouseState {
            position: pos,
            delta,
            velocity,
            direction: Direction::from_pointer_delta(delta),
            last_update: now_ms,
        };
    }

    pub fn reset(&mut self) {
        self.state = MouseState::default();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coalesces_to_last_position() {
        let cfg = MotionConfig::default();
        let mut store = MouseStore::new();
        assert!(store.update_mouse(10.0, 10.0));
        assert!(!store.update_mouse(30.0, 40.0));
        assert!(store.flush(100.0, &cfg));
        let s = store.state();
        assert_eq!(s.position, DVec2::new(30.0, 40.0));
        assert_eq!(s.delta, DVec2::new(30.0, 40.0));
        // |(30,40)| = 50px over 100ms = 500px/s, blended: 0.3 * 500 = 150
        assert!((s.velocity - 150.0).abs() < 1e-9);
        assert_eq!(s.direction, Direction::Down);
    }

    #[test]
    fn horizontal_moves_report_left_and_right() {
        let cfg = MotionConfig::default();
        let mut store = MouseStore::new();
        let _ = store.update_mouse(50.0, 5.0);
        store.flush(10.0, &cfg);
        assert_eq!(store.state().direction, Direction::Right);
        let _ = store.update_mouse(0.0, 0.0);
        store.flush(20.0, &cfg);
        assert_eq!(store.state().direction, Direction::Left);
        assert!(store.state().velocity >= 0.0);
    }

    #[test]
    fn stationary_pointer_has_no_direction() {
        let cfg = MotionConfig::default();
        let mut store = MouseStore::new();
        let _ = store.update_mouse(0.0, 0.0);
        store.flush(10.0, &cfg);
        assert_eq!(store.state().direction, Direction::None);
        assert_eq!(store.state().velocity, 0.0);
    }

    #[test]
    fn reset_zeroes_state() {
        let cfg = MotionConfig::default();
        let mut store = MouseStore::new();
        let _ = store.update_mouse(3.0, 4.0);
        store.flush(10.0, &cfg);
        store.reset();
        assert_eq!(store.state(), &MouseState::default());
    }
}
