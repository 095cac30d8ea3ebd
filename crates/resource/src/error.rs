use folio_traits::ContainerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Malformed resource list '{path}': {message}")]
    Malformed { path: String, message: String },

    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    #[error("Failed to encode resource descriptor: {0}")]
    Encoding(#[from] serde_json::Error),
}
