use crate::LayoutError;
use crate::element::{ClearMode, ContentBox, FloatMode};
use crate::page::VirtualPage;
use crate::page_layout::PageLayout;
use crate::pagination::PaginationAnalyzer;
use crate::segmentation::SegmentationEngine;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A plain box that shares rows with its neighbours.
pub fn inline_box(width: f64, height: f64, float: FloatMode) -> ContentBox {
    ContentBox::div(width, height).with_float(float, ClearMode::None)
}

/// Runs segmentation and pagination over `boxes` the way the document pipeline does.
pub fn paginate_test_boxes(
    layout: PageLayout,
    boxes: &[ContentBox],
) -> Result<Vec<VirtualPage>, LayoutError> {
    let segments = SegmentationEngine::for_layout(&layout).segment(boxes)?;
    Ok(PaginationAnalyzer::new(layout).paginate(segments))
}
