use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

#[derive(Debug, Error)]
pub enum Error {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("no element with id \"{0}\"")]
    MissingElement(String),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("portfolio catalog is invalid: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_names_the_catalog() {
        let err: Error = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, Error::Catalog(_)));
        assert!(err.to_string().starts_with("portfolio catalog is invalid"));
    }
}
