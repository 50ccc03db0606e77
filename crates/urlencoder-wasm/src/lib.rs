//! WASM bindings for urlencoder.
//!
//! Exposes `encode` and `decode` as `#[wasm_bindgen]` functions that can be
//! called from JavaScript/TypeScript.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p urlencoder-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/urlencoder_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Percent-encode a string. Characters in `safe` (if given) are left unescaped.
#[wasm_bindgen]
pub fn encode(input: &str, safe: Option<String>) -> String {
    match safe {
        Some(safe) => urlencoder::encode_with(input, safe).into_owned(),
        None => urlencoder::encode(input).into_owned(),
    }
}

/// Decode a percent-encoded string.
///
/// Throws a JS error if the input holds a malformed escape sequence.
#[wasm_bindgen]
pub fn decode(input: &str) -> std::result::Result<String, JsValue> {
    decode_message(input).map_err(|e| JsValue::from_str(&e))
}

/// Decode with the error already rendered, so it can be checked off-wasm.
fn decode_message(input: &str) -> std::result::Result<String, String> {
    urlencoder::decode(input)
        .map(|s| s.into_owned())
        .map_err(|e| e.to_string())
}
