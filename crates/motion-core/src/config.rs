use crate::constants::{MIN_FRAME_DELTA_MS, VELOCITY_SMOOTHING_OLD};

/// Runtime knobs for the motion hub.
///
/// Defaults reproduce the stock behavior: 0.7/0.3 velocity smoothing, a
/// 1ms delta-time floor, and both window listeners enabled.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    /// Weight given to the previous velocity in the moving average (0..1).
    pub velocity_smoothing: f64,
    /// Floor applied to the time between two commits, in milliseconds.
    pub min_frame_delta_ms: f64,
    pub listen_scroll: bool,
    pub listen_pointer: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            velocity_smoothing: VELOCITY_SMOOTHING_OLD,
            min_frame_delta_ms: MIN_FRAME_DELTA_MS,
            listen_scroll: true,
            listen_pointer: true,
        }
    }
}

impl MotionConfig {
    /// Blend a previous smoothed velocity with a fresh instantaneous one.
    #[inline]
    pub fn smooth_velocity(&self, previous: f64, instantaneous: f64) -> f64 {
        let k = self.velocity_smoothing;
        k * previous + (1.0 - k) * instantaneous
    }

    /// Elapsed seconds between two millisecond timestamps, floored.
    #[inline]
    pub fn delta_seconds(&self, last_ms: f64, now_ms: f64) -> f64 {
        (now_ms - last_ms).max(self.min_frame_delta_ms) / crate::constants::MS_PER_SEC
    }
}
