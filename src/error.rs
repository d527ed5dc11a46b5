use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures raised while wiring the page.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("element {selector} is not a {expected}")]
    UnexpectedType {
        selector: String,
        expected: &'static str,
    },

    #[error("invalid {attribute} value {value:?}")]
    InvalidAttribute { attribute: &'static str, value: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        SiteError::Js(message)
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
