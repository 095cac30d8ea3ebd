//! Flow layout, pagination and resource deduplication for fixed-layout documents.
//!
//! Content boxes are packed into rows, rows are distributed over pages, and every page is
//! assembled into a serializable page model while shared resources (fonts, draw parameters,
//! images, vector shapes) are registered once per distinct content.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{Document, DocumentBuilder, DocumentConfig, RenderedDocument};

// Re-export the authoring surface so callers only need this crate
pub use folio_layout::{
    BoxKind, BoxKindTag, CanvasContent, ClearMode, ContentBox, Edges, FloatMode, LayerType,
    LayoutError, PageLayout, ParagraphContent, PositionMode, TextAlign, VirtualPage,
};
pub use folio_render_core::{
    AssemblyContext, BlockObject, BoxProcessor, PageObject, ProcessorRegistry, RenderError,
    SerializablePage,
};
pub use folio_resource::{
    ContainerStore, FilesystemContainer, Font, InMemoryContainer, ResourceError,
    ResourceManager, ResourceSlot,
};
pub use folio_types::{Color, FontDescriptor, ObjectId, PathCommand, Rect, ResourceList};
