//! Tauri Command Wrappers
//!
//! Frontend bindings to the backend's opportunity commands.

mod opportunity;

use wasm_bindgen::prelude::*;

use opportunity_core::RemoteErrorPayload;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Decode a rejected invoke. Backends reject with either a plain string or
/// an error object.
fn remote_error(err: JsValue) -> RemoteErrorPayload {
    if let Some(message) = err.as_string() {
        return RemoteErrorPayload {
            body: None,
            message: Some(message),
        };
    }
    serde_wasm_bindgen::from_value(err).unwrap_or_default()
}

pub use opportunity::*;
