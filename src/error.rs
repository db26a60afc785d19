use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no {0} element")]
    MissingElement(&'static str),
    #[error("2d canvas context not supported")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for OverlayError {
    fn from(value: JsValue) -> Self {
        OverlayError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<OverlayError> for JsValue {
    fn from(err: OverlayError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(OverlayError::NoWindow.to_string(), "no window");
        assert_eq!(
            OverlayError::MissingElement("head").to_string(),
            "document has no head element"
        );
    }
}
