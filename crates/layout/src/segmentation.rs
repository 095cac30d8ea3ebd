//! Splits a flow of content boxes into packed rows.

use crate::LayoutError;
use crate::element::ContentBox;
use crate::page_layout::PageLayout;
use crate::segment::Segment;

/// Packs boxes into [`Segment`]s of a fixed row width, preserving source order.
#[derive(Debug, Clone, Copy)]
pub struct SegmentationEngine {
    row_width: f64,
}

impl SegmentationEngine {
    pub fn new(row_width: f64) -> Self {
        Self { row_width }
    }

    /// An engine whose rows span the content area of `layout`.
    pub fn for_layout(layout: &PageLayout) -> Self {
        Self::new(layout.content_width())
    }

    pub fn row_width(&self) -> f64 {
        self.row_width
    }

    /// Packs `boxes` into rows.
    ///
    /// Absolute boxes are skipped. A line break closes the current row if it holds anything.
    /// A box that does not fit even an empty row is reported as
    /// [`LayoutError::OversizedBox`].
    pub fn segment<'a, I>(&self, boxes: I) -> Result<Vec<Segment>, LayoutError>
    where
        I: IntoIterator<Item = &'a ContentBox>,
    {
        let mut segments = Vec::new();
        let mut current = Segment::new(self.row_width);

        for (index, content) in boxes.into_iter().enumerate() {
            if content.is_absolute() {
                log::debug!("Skipping absolute {} box at index {}", content.tag(), index);
                continue;
            }

            if content.is_line_break() {
                if !current.is_empty() {
                    segments.push(std::mem::replace(&mut current, Segment::new(self.row_width)));
                }
                continue;
            }

            if current.try_add(content) {
                continue;
            }

            if !current.is_empty() {
                segments.push(std::mem::replace(&mut current, Segment::new(self.row_width)));
                if current.try_add(content) {
                    continue;
                }
            }

            let mut prepared = content.clone();
            let width = prepared.prepare(self.row_width).width;
            return Err(LayoutError::OversizedBox {
                index,
                width,
                available: self.row_width,
            });
        }

        if !current.is_empty() {
            segments.push(current);
        }

        log::debug!("Segmented flow into {} rows", segments.len());
        Ok(segments)
    }
}

/// Separates absolutely positioned boxes from flow boxes, keeping the order of each.
pub fn split_absolute(boxes: Vec<ContentBox>) -> (Vec<ContentBox>, Vec<ContentBox>) {
    boxes.into_iter().partition(|b| !b.is_absolute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ClearMode, FloatMode};

    fn left(width: f64) -> ContentBox {
        ContentBox::div(width, 10.0).with_float(FloatMode::Left, ClearMode::None)
    }

    #[test]
    fn test_empty_input_yields_no_segments() {
        let engine = SegmentationEngine::new(190.0);
        let boxes: Vec<ContentBox> = Vec::new();
        let segments = engine.segment(&boxes).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_overflow_starts_new_row() {
        let engine = SegmentationEngine::new(190.0);
        let boxes = vec![left(100.0), left(100.0)];
        let segments = engine.segment(&boxes).unwrap();
        assert_eq!(segments.len(), 2);
        for s in &segments {
            assert_eq!(s.len(), 1);
            assert!((s.remaining_width() - 90.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_line_breaks_never_produce_empty_rows() {
        let engine = SegmentationEngine::new(190.0);
        let boxes = vec![
            ContentBox::line_break(),
            left(10.0),
            ContentBox::line_break(),
            ContentBox::line_break(),
            left(10.0),
            ContentBox::line_break(),
        ];
        let segments = engine.segment(&boxes).unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_absolute_boxes_are_skipped() {
        let engine = SegmentationEngine::new(190.0);
        let boxes = vec![left(10.0), ContentBox::div(5.0, 5.0).at(0.0, 0.0), left(10.0)];
        let segments = engine.segment(&boxes).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 2);
    }

    #[test]
    fn test_oversized_box_is_an_error() {
        let engine = SegmentationEngine::new(100.0);
        let boxes = vec![left(10.0), left(150.0)];
        match engine.segment(&boxes) {
            Err(LayoutError::OversizedBox {
                index,
                width,
                available,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(width, 150.0);
                assert_eq!(available, 100.0);
            }
            other => panic!("expected OversizedBox, got {:?}", other),
        }
    }

    #[test]
    fn test_block_boxes_each_take_a_row() {
        let engine = SegmentationEngine::new(100.0);
        let boxes = vec![ContentBox::div(10.0, 5.0), ContentBox::div(10.0, 5.0), left(10.0)];
        let segments = engine.segment(&boxes).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].remaining_width(), 0.0);
    }

    #[test]
    fn test_split_absolute_keeps_order() {
        let boxes = vec![
            left(1.0),
            ContentBox::div(2.0, 2.0).at(0.0, 0.0),
            left(3.0),
            ContentBox::div(4.0, 4.0).at(1.0, 1.0),
        ];
        let (flow, absolute) = split_absolute(boxes);
        assert_eq!(flow.iter().map(|b| b.width).collect::<Vec<_>>(), vec![Some(1.0), Some(3.0)]);
        assert_eq!(
            absolute.iter().map(|b| b.width).collect::<Vec<_>>(),
            vec![Some(2.0), Some(4.0)]
        );
    }
}
