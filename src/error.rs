use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("element {0} is not a {1}")]
    WrongElement(String, &'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Best-effort text for a thrown JS value (Error objects, strings, anything else).
pub fn describe_js(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_selector() {
        assert_eq!(
            SiteError::missing(".horizontal-track").to_string(),
            "element not found: .horizontal-track"
        );
        assert_eq!(
            SiteError::WrongElement("#hero-video".into(), "HtmlVideoElement").to_string(),
            "element #hero-video is not a HtmlVideoElement"
        );
    }
}
