// Host-side tests for the JS payload mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod payload {
    include!("../src/payload.rs");
}

use glam::DVec2;
use motion_core::{AudioReactive, Direction, EventData, MotionSnapshot};
use payload::*;
use serde_json::{json, Value};

#[test]
fn snapshot_fields_cover_every_signal() {
    let mut snap = MotionSnapshot::default();
    snap.scroll.scroll_y = 420.0;
    snap.scroll.direction = Direction::Down;
    snap.scroll.section_active = Some("hero".to_owned());
    snap.mouse.position = DVec2::new(12.0, 34.0);
    snap.mouse.direction = Direction::Left;
    snap.audio = AudioReactive::new(0.8, 0.3, 0.1);
    snap.blessing_wave = 0.75;

    let fields = snapshot_fields(&snap);
    let get = |k: &str| fields.iter().find(|(n, _)| *n == k).map(|(_, v)| v.clone());

    assert_eq!(get("scrollY"), Some(Field::Number(420.0)));
    assert_eq!(get("scrollDirection"), Some(Field::Text("down".into())));
    assert_eq!(get("sectionActive"), Some(Field::Text("hero".into())));
    assert_eq!(get("mouseX"), Some(Field::Number(12.0)));
    assert_eq!(get("mouseDirection"), Some(Field::Text("left".into())));
    assert_eq!(get("bass"), Some(Field::Number(0.8)));
    assert_eq!(get("blessingWaveProgress"), Some(Field::Number(0.75)));
}

#[test]
fn missing_active_section_is_null() {
    let fields = snapshot_fields(&MotionSnapshot::default());
    let active = fields.iter().find(|(n, _)| *n == "sectionActive");
    assert_eq!(active.map(|(_, v)| v), Some(&Field::Null));
}

#[test]
fn event_data_maps_to_named_fields() {
    assert_eq!(data_value(&EventData::Empty), json!({}));

    let tilt = data_value(&EventData::Tilt {
        target: ".card".into(),
        x: 0.2,
        y: -0.4,
    });
    assert_eq!(tilt, json!({ "target": ".card", "x": 0.2, "y": -0.4 }));

    let section = data_value(&EventData::Section {
        id: "about".into(),
        progress: None,
    });
    assert_eq!(section["progress"], Value::Null);

    let audio = data_value(&EventData::Audio(AudioReactive::new(1.0, 0.5, 0.0)));
    assert_eq!(audio, json!({ "bass": 1.0, "mid": 0.5, "high": 0.0 }));
}

#[test]
fn js_payload_with_text_fields_reaches_subscribers_unchanged() {
    let sent = json!({
        "target": ".card",
        "section": "hero",
        "visible": true,
        "offset": [0, 12.5],
        "meta": { "route": "/reading" },
    });
    assert_eq!(data_value(&EventData::Json(sent.clone())), sent);
}

#[test]
fn scalar_payload_is_not_wrapped() {
    assert_eq!(data_value(&EventData::Value(0.5)), json!(0.5));
    assert_eq!(data_value(&EventData::Json(json!(0.5))), json!(0.5));
    assert_eq!(data_value(&EventData::Json(json!("sparkle"))), json!("sparkle"));
}
