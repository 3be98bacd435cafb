//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use filepeek_core::track_ratio;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, Element, Event, HtmlMediaElement, MouseEvent, Url, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Blob URLs
// =============================================================================

/// Create a `blob:` URL for uploaded bytes.
pub fn create_object_url(blob: &Blob) -> Option<String> {
    Url::create_object_url_with_blob(blob).ok()
}

/// Release a URL created by [`create_object_url`].
///
/// Static paths are left alone.
pub fn revoke_object_url(url: &str) {
    if url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}

// =============================================================================
// Events
// =============================================================================

/// The media element an event was dispatched on.
pub fn media_target(ev: &Event) -> Option<HtmlMediaElement> {
    ev.target()?.dyn_into().ok()
}

/// Horizontal pointer position as a fraction of an element's width.
pub fn pointer_ratio(ev: &MouseEvent, track: &Element) -> Option<f64> {
    let rect = track.get_bounding_client_rect();
    track_ratio(f64::from(ev.client_x()), rect.left(), rect.width())
}

/// Best-effort message for a rejected promise or thrown JS value.
pub fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}
