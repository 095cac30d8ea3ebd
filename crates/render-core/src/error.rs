use folio_resource::ResourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
    #[error("Invalid box: {0}")]
    InvalidBox(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
