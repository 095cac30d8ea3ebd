use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Box {index} is {width:.3} wide and does not fit an empty row of {available:.3}.")]
    OversizedBox {
        index: usize,
        width: f64,
        available: f64,
    },
    #[error("Invalid absolute box: {0}")]
    InvalidAbsoluteBox(String),
    #[error("Invalid page number {0}: page numbers start at 1.")]
    InvalidPageNumber(usize),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod algorithms;
pub mod element;
pub mod node_kind;
pub mod page;
pub mod page_layout;
pub mod pagination;
pub mod segment;
pub mod segmentation;

pub use self::element::{
    BoxKind, CanvasContent, ClearMode, ContentBox, Edges, FloatMode, LayerType,
    ParagraphContent, PositionMode, TextAlign,
};
pub use self::node_kind::BoxKindTag;
pub use self::page::{TemplateRef, VirtualPage};
pub use self::page_layout::PageLayout;
pub use self::pagination::PaginationAnalyzer;
pub use self::segment::{Placement, Segment};
pub use self::segmentation::{SegmentationEngine, split_absolute};

// Re-export geometry types so callers do not need a direct folio-types dependency
pub use folio_types::{EPSILON, Rect, Size};

#[cfg(test)]
mod test_utils;
