//! WASM bindings for browser-based rendering.
//!
//! This module exposes rendering and truncation to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::text::Locale;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render an XML document to plain text.
///
/// `locale` is a two-letter language code selecting the quotation marks.
#[wasm_bindgen]
pub fn render_xml(xml: &str, locale: &str) -> Result<String, JsValue> {
    crate::plain::render_xml(xml, Locale::from_code(locale))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render an XML document and shorten it to a teaser.
#[wasm_bindgen]
pub fn shorten_xml(xml: &str, max_length: usize, locale: &str) -> Result<String, JsValue> {
    crate::plain::shorten_xml(xml, max_length, Locale::from_code(locale))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
