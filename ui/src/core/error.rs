//! Error type shared by the parsing helpers and the platform glue.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),

    #[error("unknown project category `{0}`")]
    UnknownCategory(String),

    /// A DOM call failed (wasm only).
    #[error("DOM call failed: {0}")]
    Dom(String),

    /// The `document::eval` channel returned an error or a malformed payload.
    #[error("script bridge failed: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Dom(format!("{value:?}"))
    }
}

impl From<dioxus::prelude::document::EvalError> for SiteError {
    fn from(value: dioxus::prelude::document::EvalError) -> Self {
        SiteError::Script(format!("{value:?}"))
    }
}
