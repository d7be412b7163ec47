use motion_core::MotionError;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn has_dom() -> bool {
    window_document().is_some()
}

/// Current vertical scroll offset; 0 when the browser refuses to say.
#[inline]
pub fn scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn listener_options(passive: bool) -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    opts
}

pub fn host_error(context: &str, e: JsValue) -> MotionError {
    MotionError::host(format!("{context}: {e:?}"))
}
