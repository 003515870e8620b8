//! WASM bindings for primitives-core.
//!
//! Exposes base conversion, literal rendering and classification as
//! `#[wasm_bindgen]` functions. Values cross the boundary as JSON text.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p primitives-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/primitives_wasm.wasm
//! ```

use primitives_core::{
    classify as classify_value, classify_precise as classify_value_precise, Value,
};
use wasm_bindgen::prelude::*;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Render an integer in base 2, 8, 10 or 16.
///
/// Throws if `value` is not an integer in the `i64` range or `radix` is unsupported.
#[wasm_bindgen]
pub fn format(value: f64, radix: u32) -> Result<String, JsValue> {
    let n = to_integer(value)
        .ok_or_else(|| JsValue::from_str(&format!("Not an integer: {}", value)))?;
    primitives_core::format(n, radix).map_err(to_js_error)
}

/// Exact `i64` for an integral `value` in `[-2^63, 2^63)`.
/// `i64::MAX as f64` rounds up to 2^63, so the upper bound must be exclusive.
fn to_integer(value: f64) -> Option<i64> {
    const BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63
    (value.fract() == 0.0 && (-BOUND..BOUND).contains(&value)).then_some(value as i64)
}

/// Parse the leading digits of `text` in base 2, 8, 10 or 16.
#[wasm_bindgen]
pub fn parse(text: &str, radix: u32) -> Result<f64, JsValue> {
    primitives_core::parse(text, radix)
        .map(|n| n as f64)
        .map_err(to_js_error)
}

/// Console-style rendering of a number.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64) -> String {
    primitives_core::format_number(value)
}

/// `typeof` tag for a JSON value; the text `undefined` is accepted as well.
#[wasm_bindgen]
pub fn classify(json: &str) -> Result<String, JsValue> {
    read_value(json).map(|v| classify_value(&v).to_string())
}

/// Like [`classify`], but null and arrays get `null` / `array`.
#[wasm_bindgen(js_name = classifyPrecise)]
pub fn classify_precise(json: &str) -> Result<String, JsValue> {
    read_value(json).map(|v| classify_value_precise(&v).to_string())
}

fn read_value(json: &str) -> Result<Value, JsValue> {
    if json.trim() == "undefined" {
        return Ok(Value::Undefined);
    }
    Value::from_json_str(json).map_err(to_js_error)
}
