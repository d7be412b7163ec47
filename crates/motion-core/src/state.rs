//! Value types handed to subscribers on every dispatch.
//!
//! These types avoid platform APIs so both the web front-end and host-side
//! tests can build and inspect them. Consumers copy the scalars they need
//! into their own shader uniforms.

use crate::mouse::MouseState;
use crate::scroll::ScrollState;
use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// Direction of the last committed motion delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Scroll is one-dimensional: a positive delta moves further down the page.
    #[inline]
    pub fn from_scroll_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            Direction::Down
        } else if delta_y < 0.0 {
            Direction::Up
        } else {
            Direction::None
        }
    }

    /// Pointer motion picks the axis with the larger magnitude; vertical wins ties.
    #[inline]
    pub fn from_pointer_delta(delta: DVec2) -> Self {
        if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else {
            Direction::from_scroll_delta(delta.y)
        }
    }

    /// Signed vertical component, suitable for a shader uniform.
    #[inline]
    pub fn vertical_sign(self) -> f32 {
        match self {
            Direction::Down => 1.0,
            Direction::Up => -1.0,
            _ => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::None => "none",
        }
    }
}

/// Last pushed audio band intensities. Conventionally 0..1, never clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioReactive {
    pub bass: f64,
    pub mid: f64,
    pub high: f64,
}

impl AudioReactive {
    pub fn new(bass: f64, mid: f64, high: f64) -> Self {
        Self { bass, mid, high }
    }
}

/// Event-specific payload accompanying a dispatch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventData {
    #[default]
    Empty,
    Scroll {
        scroll_y: f64,
        velocity: f64,
        direction: Direction,
    },
    Mouse {
        position: DVec2,
        velocity: f64,
        direction: Direction,
    },
    Section {
        id: String,
        progress: Option<f64>,
    },
    Audio(AudioReactive),
    BlessingWave {
        progress: f64,
    },
    Parallax {
        target: String,
        speed: f64,
    },
    Tilt {
        target: String,
        x: f64,
        y: f64,
    },
    Reveal {
        target: String,
    },
    Route {
        route: String,
    },
    Value(f64),
    /// Free-form payload, typically forwarded untouched from JS.
    Json(serde_json::Value),
}

/// Aggregate of every motion signal at dispatch time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionSnapshot {
    pub scroll: ScrollState,
    pub mouse: MouseState,
    pub audio: AudioReactive,
    pub blessing_wave: f64,
}

impl MotionSnapshot {
    /// Pack the scalars into a uniform block; `time_sec` is supplied by the
    /// consumer's own render clock.
    pub fn uniforms(&self, time_sec: f32) -> MotionUniforms {
        MotionUniforms {
            scroll_y: self.scroll.scroll_y as f32,
            scroll_velocity: self.scroll.scroll_velocity as f32,
            scroll_direction: self.scroll.direction.vertical_sign(),
            time: time_sec,
            mouse: self.mouse.position.as_vec2().to_array(),
            mouse_velocity: self.mouse.velocity as f32,
            blessing_wave: self.blessing_wave as f32,
            bass: self.audio.bass as f32,
            mid: self.audio.mid as f32,
            high: self.audio.high as f32,
            _pad: 0.0,
        }
    }
}

/// What a subscriber receives: the trigger name, its payload, and the
/// snapshot taken when the dispatch started.
#[derive(Clone, Copy, Debug)]
pub struct MotionEvent<'a> {
    pub trigger: &'a str,
    pub data: &'a EventData,
    pub snapshot: &'a MotionSnapshot,
}

/// std140-friendly uniform block (48 bytes).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MotionUniforms {
    pub scroll_y: f32,
    pub scroll_velocity: f32,
    pub scroll_direction: f32,
    pub time: f32,
    pub mouse: [f32; 2],
    pub mouse_velocity: f32,
    pub blessing_wave: f32,
    pub bass: f32,
    pub mid: f32,
    pub high: f32,
    pub _pad: f32,
}

impl MotionUniforms {
    pub const FLOATS: usize = std::mem::size_of::<MotionUniforms>() / std::mem::size_of::<f32>();

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}
