// src/error.rs
use folio_layout::LayoutError;
use folio_render_core::RenderError;
use folio_resource::ResourceError;
use folio_traits::ContainerError;
use thiserror::Error;

/// A comprehensive error type for the entire document pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Resource registration failed: {0}")]
    Resource(#[from] ResourceError),

    #[error("Page assembly failed: {0}")]
    Render(#[from] RenderError),

    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    #[error("Configuration error: {0}")]
    Config(String),
}
