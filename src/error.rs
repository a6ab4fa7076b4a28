//! Errors surfaced at the browser binding boundary.
//!
//! The controller itself never fails: a missing control is a silent no-op and
//! storage access is treated as infallible. These variants cover the
//! environment the controller is installed into.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("event listener registration failed: {0}")]
    Listener(String),
}

#[cfg(feature = "browser")]
impl From<ThemeError> for wasm_bindgen::JsValue {
    fn from(err: ThemeError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
