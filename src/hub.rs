use crate::constants::{FIELD_DATA, FIELD_SECTION_PROGRESS, FIELD_SNAPSHOT, FIELD_TRIGGER};
use crate::host::WindowHost;
use crate::payload::{self, Field};
use motion_core::{
    AudioReactive, DispatchReport, EventData, InstantClock, MotionConfig, MotionEvent,
    MotionOrchestrator, MotionSnapshot,
};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// The motion hub as seen from JS. The page constructs one and hands it to
/// every decorative layer; there is no global instance.
#[wasm_bindgen]
pub struct MotionHub {
    inner: Rc<MotionOrchestrator>,
}

#[wasm_bindgen]
impl MotionHub {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MotionHub {
        Self::from_config(MotionConfig::default())
    }

    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(
        velocity_smoothing: f64,
        listen_scroll: bool,
        listen_pointer: bool,
    ) -> MotionHub {
        Self::from_config(MotionConfig {
            velocity_smoothing: velocity_smoothing.clamp(0.0, 1.0),
            listen_scroll,
            listen_pointer,
            ..MotionConfig::default()
        })
    }

    pub fn init(&self) -> bool {
        self.inner.init()
    }

    pub fn cleanup(&self) {
        self.inner.cleanup();
    }

    #[wasm_bindgen(getter, js_name = isHydrated)]
    pub fn is_hydrated(&self) -> bool {
        self.inner.is_hydrated()
    }

    /// `callback` receives `{ trigger, data, snapshot }`. A throw is logged
    /// and does not reach other subscribers.
    pub fn register(&self, id: &str, callback: js_sys::Function) {
        self.inner.register(id, move |ev| {
            let arg = event_object(ev).map_err(|e| anyhow::anyhow!("{:?}", e))?;
            callback
                .call1(&JsValue::NULL, &arg)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            Ok(())
        });
    }

    pub fn unregister(&self, id: &str) -> bool {
        self.inner.unregister(id)
    }

    #[wasm_bindgen(getter, js_name = subscriberCount)]
    pub fn subscriber_count(&self) -> u32 {
        self.inner.subscriber_count() as u32
    }

    /// Broadcast `trigger`; `data` reaches subscribers as passed. Returns how
    /// many subscribers ran cleanly.
    pub fn dispatch(&self, trigger: &str, data: JsValue) -> u32 {
        delivered(self.inner.dispatch(trigger, data_from_js(&data)))
    }

    #[wasm_bindgen(js_name = onSectionEnter)]
    pub fn on_section_enter(&self, id: &str) -> u32 {
        delivered(self.inner.on_section_enter(id))
    }

    #[wasm_bindgen(js_name = onSectionExit)]
    pub fn on_section_exit(&self, id: &str) -> u32 {
        delivered(self.inner.on_section_exit(id))
    }

    #[wasm_bindgen(js_name = onSectionProgress)]
    pub fn on_section_progress(&self, id: &str, progress: f64) -> u32 {
        delivered(self.inner.on_section_progress(id, progress))
    }

    #[wasm_bindgen(js_name = scrollParallax)]
    pub fn scroll_parallax(&self, target: &str, speed: f64) -> u32 {
        delivered(self.inner.scroll_parallax(target, speed))
    }

    #[wasm_bindgen(js_name = cardTilt)]
    pub fn card_tilt(&self, target: &str, x: f64, y: f64) -> u32 {
        delivered(self.inner.card_tilt(target, x, y))
    }

    #[wasm_bindgen(js_name = heroReveal)]
    pub fn hero_reveal(&self, target: &str) -> u32 {
        delivered(self.inner.hero_reveal(target))
    }

    #[wasm_bindgen(js_name = triggerBlessingWave)]
    pub fn trigger_blessing_wave(&self) -> u32 {
        delivered(self.inner.trigger_blessing_wave())
    }

    #[wasm_bindgen(js_name = pageTransitionIn)]
    pub fn page_transition_in(&self, route: &str) -> u32 {
        delivered(self.inner.page_transition_in(route))
    }

    #[wasm_bindgen(js_name = pageTransitionOut)]
    pub fn page_transition_out(&self, route: &str) -> u32 {
        delivered(self.inner.page_transition_out(route))
    }

    #[wasm_bindgen(js_name = setAudioReactive)]
    pub fn set_audio_reactive(&self, bass: f64, mid: f64, high: f64) -> u32 {
        delivered(
            self.inner
                .set_audio_reactive(AudioReactive::new(bass, mid, high)),
        )
    }

    /// `[bass, mid, high]`
    #[wasm_bindgen(js_name = getAudioReactive)]
    pub fn audio_reactive(&self) -> Vec<f64> {
        let a = self.inner.audio_reactive();
        vec![a.bass, a.mid, a.high]
    }

    #[wasm_bindgen(js_name = setBlessingWaveProgress)]
    pub fn set_blessing_wave_progress(&self, progress: f64) -> u32 {
        delivered(self.inner.set_blessing_wave_progress(progress))
    }

    #[wasm_bindgen(js_name = getBlessingWaveProgress)]
    pub fn blessing_wave_progress(&self) -> f64 {
        self.inner.blessing_wave_progress()
    }

    #[wasm_bindgen(js_name = setSectionActive)]
    pub fn set_section_active(&self, id: Option<String>) {
        self.inner.set_section_active(id.as_deref());
    }

    #[wasm_bindgen(js_name = resetMotion)]
    pub fn reset_motion(&self) {
        self.inner.reset_motion();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        snapshot_object(&self.inner.snapshot()).map(JsValue::from)
    }

    /// Packed uniform block, ready for `gl.uniform1fv` or a UBO upload.
    pub fn uniforms(&self, time_sec: f32) -> Vec<f32> {
        self.inner.uniforms(time_sec).as_floats().to_vec()
    }
}

impl MotionHub {
    fn from_config(config: MotionConfig) -> MotionHub {
        MotionHub {
            inner: MotionOrchestrator::with_parts(config, InstantClock::new(), WindowHost::new()),
        }
    }
}

impl Default for MotionHub {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn delivered(report: DispatchReport) -> u32 {
    report.delivered as u32
}

fn field_value(field: Field) -> JsValue {
    match field {
        Field::Number(v) => JsValue::from_f64(v),
        Field::Text(s) => JsValue::from_str(&s),
        Field::Null => JsValue::NULL,
    }
}

fn set(obj: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(obj, &JsValue::from_str(key), value).map(|_| ())
}

fn snapshot_object(s: &MotionSnapshot) -> Result<js_sys::Object, JsValue> {
    let obj = js_sys::Object::new();
    for (key, field) in payload::snapshot_fields(s) {
        set(&obj, key, &field_value(field))?;
    }
    let sections = js_sys::Object::new();
    for (id, progress) in &s.scroll.section_progress {
        set(&sections, id, &JsValue::from_f64(*progress))?;
    }
    set(&obj, FIELD_SECTION_PROGRESS, &sections)?;
    Ok(obj)
}

fn event_object(ev: &MotionEvent<'_>) -> Result<js_sys::Object, JsValue> {
    // plain objects and arrays rather than ES `Map`s
    let data = payload::data_value(ev.data).serialize(&Serializer::json_compatible())?;
    let obj = js_sys::Object::new();
    set(&obj, FIELD_TRIGGER, &JsValue::from_str(ev.trigger))?;
    set(&obj, FIELD_DATA, &data)?;
    set(&obj, FIELD_SNAPSHOT, &snapshot_object(ev.snapshot)?)?;
    Ok(obj)
}

fn data_from_js(data: &JsValue) -> EventData {
    match serde_wasm_bindgen::from_value(data.clone()) {
        Ok(value) => EventData::Json(value),
        Err(e) => {
            log::debug!("[motion] dispatch data not representable: {e}");
            EventData::Empty
        }
    }
}
