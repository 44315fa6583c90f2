//! Structured error types for slidezoom.

/// All errors that can occur while building or driving the zoom overlay.
#[derive(Debug, thiserror::Error)]
pub enum ZoomError {
    /// A computed CSS length with a unit the scaling pass cannot interpret
    /// (`auto`, `vw`, `calc()`, ...).
    #[error("Unsupported CSS length: {0}")]
    UnsupportedLength(String),

    /// Grid cell width that would produce a zero, negative or infinite scale.
    #[error("Degenerate grid cell width: {0}")]
    DegenerateWidth(String),

    /// Invalid plugin configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// DOM operation rejected by the document.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ZoomError>;

#[cfg(target_arch = "wasm32")]
impl From<ZoomError> for wasm_bindgen::JsValue {
    fn from(e: ZoomError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ZoomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
