//! Scroll store: raw offsets in, smoothed velocity and direction out.
//!
//! Raw offsets are coalesced per animation frame; only the last value pushed
//! before [`ScrollStore::flush`] is committed. Section progress and the
//! active section are plain overwrites set by scroll-linked components.

use crate::config::MotionConfig;
use crate::frame::FrameSlot;
use crate::state::Direction;
use fnv::FnvHashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    /// Exponential moving average of |delta| per second; never negative.
    pub scroll_velocity: f64,
    pub direction: Direction,
    pub section_progress: FnvHashMap<String, f64>,
    pub section_active: Option<String>,
    pub last_update: f64,
}

#[derive(Debug, Default)]
pub struct ScrollStore {
    state: ScrollState,
    pending: FrameSlot<f64>,
}

impl ScrollStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Record the latest raw offset. Returns `true` when a flush must be
    /// scheduled for the next frame.
    #[must_use]
    pub fn update_scroll(&mut self, raw_scroll_y: f64) -> bool {
        self.pending.push(raw_scroll_y)
    }

    /// Commit the pending offset, if any. Returns whether anything changed.
    pub fn flush(&mut self, now_ms: f64, config: &MotionConfig) -> bool {
        match self.pending.take() {
            Some(raw) => {
                self.commit(raw, now_ms, config);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, raw: f64, now_ms: f64, config: &MotionConfig) {
        let delta_y = raw - self.state.scroll_y;
        let dt = config.delta_seconds(self.state.last_update, now_ms);
        let velocity = config.smooth_velocity(self.state.scroll_velocity, delta_y.abs() / dt);

        self.state.scroll_y = raw;
        self.state.scroll_velocity = velocity;
        self.state.direction = Direction::from_scroll_delta(delta_y);
        self.state.last_update = now_ms;
    }

    /// Upsert one section's progress. Values are stored as given.
    pub fn set_section_progress(&mut self, id: &str, progress: f64) {
        match self.state.section_progress.get_mut(id) {
            Some(p) => *p = progress,
            None => {
                self.state.section_progress.insert(id.to_owned(), progress);
            }
        }
    }

    pub fn set_section_active(&mut self, id: Option<&str>) {
        self.state.section_active = id.map(str::to_owned);
    }

    /// Back to zeroed defaults; a pending uncommitted offset is dropped.
    pub fn reset(&mut self) {
        self.state = ScrollState::default();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> MotionConfig {
        MotionConfig::default()
    }

    #[test]
    fn same_frame_updates_commit_last_value_once() {
        let mut store = ScrollStore::new();
        assert!(store.update_scroll(100.0));
        assert!(!store.update_scroll(150.0));
        assert!(!store.update_scroll(120.0));
        assert!(store.flush(16.0, &cfg()));
        assert_eq!(store.state().scroll_y, 120.0);
        assert!(!store.flush(32.0, &cfg()));
        assert_eq!(store.state().last_update, 16.0);
    }

    #[test]
    fn velocity_follows_the_moving_average() {
        let mut store = ScrollStore::new();
        let _ = store.update_scroll(100.0);
        store.flush(100.0, &cfg());
        // 100px over 100ms = 1000px/s, blended with 0
        assert!((store.state().scroll_velocity - 300.0).abs() < 1e-9);
        assert_eq!(store.state().direction, Direction::Down);

        let _ = store.update_scroll(50.0);
        store.flush(150.0, &cfg());
        // 50px over 50ms = 1000px/s; 0.7*300 + 0.3*1000
        assert!((store.state().scroll_velocity - 510.0).abs() < 1e-9);
        assert_eq!(store.state().direction, Direction::Up);
    }

    #[test]
    fn zero_delta_means_no_direction() {
        let mut store = ScrollStore::new();
        let _ = store.update_scroll(40.0);
        store.flush(10.0, &cfg());
        let _ = store.update_scroll(40.0);
        store.flush(20.0, &cfg());
        assert_eq!(store.state().direction, Direction::None);
        assert!(store.state().scroll_velocity >= 0.0);
    }

    #[test]
    fn identical_timestamps_use_the_delta_floor() {
        let mut store = ScrollStore::new();
        let _ = store.update_scroll(1.0);
        store.flush(0.0, &cfg());
        // 1px over the 1ms floor = 1000px/s
        assert!((store.state().scroll_velocity - 300.0).abs() < 1e-9);
    }

    #[test]
    fn negative_offsets_are_left_unclamped() {
        let mut store = ScrollStore::new();
        let _ = store.update_scroll(-25.0);
        store.flush(5.0, &cfg());
        assert_eq!(store.state().scroll_y, -25.0);
        assert_eq!(store.state().direction, Direction::Up);
        assert!(store.state().scroll_velocity > 0.0);
    }

    #[test]
    fn sections_upsert_and_overwrite() {
        let mut store = ScrollStore::new();
        store.set_section_progress("hero", 0.2);
        store.set_section_progress("hero", 1.4);
        store.set_section_progress("about", -0.1);
        assert_eq!(store.state().section_progress.len(), 2);
        assert_eq!(store.state().section_progress["hero"], 1.4);
        assert_eq!(store.state().section_progress["about"], -0.1);

        store.set_section_active(Some("hero"));
        store.set_section_active(Some("about"));
        assert_eq!(store.state().section_active.as_deref(), Some("about"));
        store.set_section_active(None);
        assert!(store.state().section_active.is_none());
    }

    #[test]
    fn reset_restores_defaults_and_drops_pending() {
        let mut store = ScrollStore::new();
        let _ = store.update_scroll(300.0);
        store.flush(16.0, &cfg());
        store.set_section_progress("hero", 0.5);
        let _ = store.update_scroll(900.0);
        store.reset();
        assert_eq!(store.state(), &ScrollState::default());
        assert!(!store.flush(32.0, &cfg()));
        assert!(store.update_scroll(1.0));
    }
}
