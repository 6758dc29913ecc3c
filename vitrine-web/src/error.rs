use thiserror::Error;

/// Why a carousel or the menu declined to initialize
#[derive(Error, Debug)]
pub enum AttachError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("No element matches `{0}`")]
    MissingElement(String),
    #[error("Element matching `{0}` is not an HTML element")]
    NotHtmlElement(String),
    #[error("Invalid selector `{0}`")]
    InvalidSelector(String),
    #[error("No items match `{0}`")]
    NoItems(String),
}
