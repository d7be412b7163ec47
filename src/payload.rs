// Flattening of motion values into the named fields handed to JS subscribers.
// Kept free of JS types so it can be tested on the host.

use motion_core::{EventData, MotionSnapshot};
use serde_json::{json, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Number(f64),
    Text(String),
    Null,
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Number(v)
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self {
        Field::Text(v.to_owned())
    }
}

/// Scalar view of a snapshot, using the camelCase names the page expects.
pub fn snapshot_fields(s: &MotionSnapshot) -> Vec<(&'static str, Field)> {
    vec![
        ("scrollY", s.scroll.scroll_y.into()),
        ("scrollVelocity", s.scroll.scroll_velocity.into()),
        ("scrollDirection", s.scroll.direction.as_str().into()),
        (
            "sectionActive",
            s.scroll
                .section_active
                .as_deref()
                .map_or(Field::Null, Field::from),
        ),
        ("mouseX", s.mouse.position.x.into()),
        ("mouseY", s.mouse.position.y.into()),
        ("deltaX", s.mouse.delta.x.into()),
        ("deltaY", s.mouse.delta.y.into()),
        ("mouseVelocity", s.mouse.velocity.into()),
        ("mouseDirection", s.mouse.direction.as_str().into()),
        ("bass", s.audio.bass.into()),
        ("mid", s.audio.mid.into()),
        ("high", s.audio.high.into()),
        ("blessingWaveProgress", s.blessing_wave.into()),
    ]
}

/// JSON view of an event payload. `Empty` is an empty object; a `Json`
/// payload passes through unchanged so JS subscribers see what was sent.
pub fn data_value(data: &EventData) -> Value {
    match data {
        EventData::Empty => json!({}),
        EventData::Scroll {
            scroll_y,
            velocity,
            direction,
        } => json!({
            "scrollY": scroll_y,
            "velocity": velocity,
            "direction": direction.as_str(),
        }),
        EventData::Mouse {
            position,
            velocity,
            direction,
        } => json!({
            "x": position.x,
            "y": position.y,
            "velocity": velocity,
            "direction": direction.as_str(),
        }),
        EventData::Section { id, progress } => json!({ "id": id, "progress": progress }),
        EventData::Audio(a) => json!({ "bass": a.bass, "mid": a.mid, "high": a.high }),
        EventData::BlessingWave { progress } => json!({ "progress": progress }),
        EventData::Parallax { target, speed } => json!({ "target": target, "speed": speed }),
        EventData::Tilt { target, x, y } => json!({ "target": target, "x": x, "y": y }),
        EventData::Reveal { target } => json!({ "target": target }),
        EventData::Route { route } => json!({ "route": route }),
        EventData::Value(v) => json!(v),
        EventData::Json(v) => v.clone(),
    }
}
