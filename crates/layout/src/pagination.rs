//! Stacks segments vertically and breaks them into pages.

use crate::algorithms::pagination::check_segment_fit;
use crate::element::PositionMode;
use crate::page::VirtualPage;
use crate::page_layout::PageLayout;
use crate::segment::Segment;
use folio_types::EPSILON;

pub struct PaginationAnalyzer {
    layout: PageLayout,
}

impl PaginationAnalyzer {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Places every box of every segment at an absolute position and groups them into pages.
    ///
    /// Always returns at least one page. A segment taller than the content area is placed
    /// on its own page and overflows it.
    pub fn paginate(&self, segments: Vec<Segment>) -> Vec<VirtualPage> {
        let start_x = self.layout.start_x();
        let start_y = self.layout.start_y();
        let content_width = self.layout.content_width();
        let content_height = self.layout.content_height();

        let mut pages = Vec::new();
        let mut page = VirtualPage::new(self.layout);
        let mut cursor_y = start_y;

        for segment in segments {
            if segment.is_empty() {
                continue;
            }

            let segment_height = if segment.is_remainder_filler() {
                (content_height - (cursor_y - start_y)).max(0.0)
            } else {
                segment.height()
            };

            let fit = check_segment_fit(
                cursor_y - start_y,
                segment_height,
                content_height,
                page.is_empty(),
            );
            if fit.should_break {
                log::debug!(
                    "Page {} full ({:.3} left, {:.3} needed)",
                    pages.len() + 1,
                    fit.remaining_height,
                    segment_height
                );
                pages.push(std::mem::replace(&mut page, VirtualPage::new(self.layout)));
                cursor_y = start_y;
            }

            if segment_height > content_height + EPSILON {
                log::warn!(
                    "Segment of height {:.3} exceeds page content height {:.3}; it will overflow",
                    segment_height,
                    content_height
                );
            }

            let offsets = segment.offsets();
            for (placement, offset) in segment.into_placements().into_iter().zip(offsets) {
                let mut content = placement.content;
                content.x = Some(start_x + offset);
                content.y = Some(cursor_y);
                content.width.get_or_insert(content_width);
                content.position = PositionMode::Absolute;
                page.push_placed(content);
            }

            cursor_y += segment_height;
        }

        pages.push(page);
        log::debug!("Paginated into {} pages", pages.len());
        pages
    }
}
