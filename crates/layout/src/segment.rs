//! A segment is one packed row of content boxes.

use crate::element::{ClearMode, ContentBox, FloatMode};
use folio_types::{EPSILON, Size};

/// A box accepted into a segment, together with its prepared outer size.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub content: ContentBox,
    pub size: Size,
    /// Row width the box consumed. Equals `size.width` except for block-exclusive boxes,
    /// which consume the whole row.
    pub consumed_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    width: f64,
    remaining_width: f64,
    height: f64,
    placements: Vec<Placement>,
    blockable: bool,
    remainder_filler: bool,
}

impl Segment {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            remaining_width: width,
            height: 0.0,
            placements: Vec::with_capacity(5),
            blockable: false,
            remainder_filler: false,
        }
    }

    /// Tries to place `content` at the end of the row.
    ///
    /// On success the box is prepared against the row width and stored; on failure the
    /// segment is left untouched.
    pub fn try_add(&mut self, content: &ContentBox) -> bool {
        if self.remaining_width.abs() < EPSILON {
            return false;
        }

        let mut content = content.clone();
        let size = content.prepare(self.width);
        if size.width > self.remaining_width + EPSILON {
            log::trace!(
                "{} box of width {:.3} does not fit remaining {:.3}",
                content.tag(),
                size.width,
                self.remaining_width
            );
            return false;
        }

        if content.is_block_exclusive() {
            if !self.is_empty() {
                return false;
            }
            let consumed = self.remaining_width;
            self.remaining_width = 0.0;
            self.push(content, size, consumed);
            return true;
        }

        if !self.is_empty() && !self.accepts_float(&content) {
            return false;
        }

        self.remaining_width -= size.width;
        self.push(content, size, size.width);
        true
    }

    /// The float/clear exclusivity matrix for a non-empty segment.
    fn accepts_float(&self, content: &ContentBox) -> bool {
        if self.is_center_float() {
            if content.float != FloatMode::Center || content.clear == ClearMode::Left {
                return false;
            }
            let last_clears_right = self
                .placements
                .last()
                .is_some_and(|p| p.content.clear == ClearMode::Right);
            return !last_clears_right;
        }

        match (content.float, content.clear) {
            (FloatMode::Left, ClearMode::Left) => !self.contains_float(FloatMode::Left),
            (FloatMode::Right, ClearMode::Right) => !self.contains_float(FloatMode::Right),
            (FloatMode::Center, _) => false,
            _ => true,
        }
    }

    fn push(&mut self, content: ContentBox, size: Size, consumed_width: f64) {
        self.height = self.height.max(size.height);
        if content.is_splittable() {
            // One splittable box is enough for the row to be breakable.
            self.blockable = true;
        }
        if content.is_page_filler() {
            self.remainder_filler = true;
        }
        self.placements.push(Placement {
            content,
            size,
            consumed_width,
        });
    }

    fn contains_float(&self, float: FloatMode) -> bool {
        self.placements.iter().any(|p| p.content.float == float)
    }

    /// True when every box in the row is center-floated (vacuously true when empty).
    fn is_center_float(&self) -> bool {
        self.placements
            .iter()
            .all(|p| p.content.float == FloatMode::Center)
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn remaining_width(&self) -> f64 {
        self.remaining_width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// True if the row may be broken across pages.
    pub fn is_blockable(&self) -> bool {
        self.blockable
    }

    /// True if the row exists to pad out the remaining page height.
    pub fn is_remainder_filler(&self) -> bool {
        self.remainder_filler
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }

    /// Sum of consumed widths; together with the remaining width this equals the row width.
    pub fn used_width(&self) -> f64 {
        self.placements.iter().map(|p| p.consumed_width).sum()
    }

    /// Horizontal offset of each placement relative to the row origin.
    ///
    /// Left and unfloated boxes pack from the left edge in order, right floats pack from
    /// the right edge in order, and a row of center floats is centered as a group.
    pub fn offsets(&self) -> Vec<f64> {
        if !self.is_empty() && self.is_center_float() {
            let total: f64 = self.placements.iter().map(|p| p.size.width).sum();
            let mut x = ((self.width - total) / 2.0).max(0.0);
            return self
                .placements
                .iter()
                .map(|p| {
                    let at = x;
                    x += p.size.width;
                    at
                })
                .collect();
        }

        let mut left = 0.0;
        let mut right = self.width;
        self.placements
            .iter()
            .map(|p| match p.content.float {
                FloatMode::Right => {
                    right -= p.size.width;
                    right
                }
                FloatMode::Center => ((self.width - p.size.width) / 2.0).max(0.0),
                FloatMode::Left | FloatMode::None => {
                    let at = left;
                    left += p.size.width;
                    at
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_segment_is_empty() {
        let s = Segment::new(100.0);
        assert!(s.is_empty());
        assert_eq!(s.remaining_width(), 100.0);
        assert_eq!(s.height(), 0.0);
        assert!(!s.is_blockable());
        assert!(!s.is_remainder_filler());
    }

    #[test]
    fn test_height_is_max_of_boxes() {
        let mut s = Segment::new(100.0);
        let a = ContentBox::div(30.0, 12.0).with_float(FloatMode::Left, ClearMode::None);
        let b = ContentBox::div(30.0, 40.0).with_float(FloatMode::Left, ClearMode::None);
        let c = ContentBox::div(30.0, 5.0).with_float(FloatMode::Left, ClearMode::None);
        assert!(s.try_add(&a));
        assert!(s.try_add(&b));
        assert!(s.try_add(&c));
        assert_eq!(s.height(), 40.0);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_offsets_mixed_left_and_right() {
        let mut s = Segment::new(100.0);
        let l1 = ContentBox::div(10.0, 1.0).with_float(FloatMode::Left, ClearMode::None);
        let r1 = ContentBox::div(20.0, 1.0).with_float(FloatMode::Right, ClearMode::None);
        let l2 = ContentBox::div(15.0, 1.0).with_float(FloatMode::Left, ClearMode::None);
        let r2 = ContentBox::div(5.0, 1.0).with_float(FloatMode::Right, ClearMode::None);
        for b in [&l1, &r1, &l2, &r2] {
            assert!(s.try_add(b));
        }
        assert_eq!(s.offsets(), vec![0.0, 80.0, 10.0, 75.0]);
    }

    #[test]
    fn test_offsets_center_group() {
        let mut s = Segment::new(100.0);
        let c = |w| ContentBox::div(w, 1.0).with_float(FloatMode::Center, ClearMode::None);
        assert!(s.try_add(&c(20.0)));
        assert!(s.try_add(&c(40.0)));
        assert_eq!(s.offsets(), vec![20.0, 40.0]);
    }

    #[test]
    fn test_offsets_block_box_by_float() {
        let mut s = Segment::new(100.0);
        assert!(s.try_add(&ContentBox::div(40.0, 1.0).with_float(FloatMode::Right, ClearMode::Both)));
        assert_eq!(s.offsets(), vec![60.0]);
    }
}
