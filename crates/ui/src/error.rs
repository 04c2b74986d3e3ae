use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("JS exception: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        Self::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
