mod area_holder;
mod canvas;
mod div;
mod image;
mod paragraph;

pub use area_holder::AreaHolderProcessor;
pub use canvas::CanvasProcessor;
pub use div::DivProcessor;
pub use image::ImageProcessor;
pub use paragraph::ParagraphProcessor;

use crate::error::RenderError;
use crate::traits::{AssemblyContext, BoxProcessor};
use folio_layout::ContentBox;

/// For flow-control boxes (line breaks, page fillers) that leave nothing on the page.
pub struct NoOutputProcessor;

impl BoxProcessor for NoOutputProcessor {
    fn process(&self, _: &ContentBox, _: &mut AssemblyContext<'_>) -> Result<(), RenderError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "no-output"
    }
}
