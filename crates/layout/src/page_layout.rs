use folio_types::{EPSILON, Rect};

const DEFAULT_MARGIN: [f64; 4] = [25.4, 31.7, 25.4, 31.7];

/// Page style: physical size and margins, in millimetres.
///
/// Read-only once handed to the pipeline. The content area (page minus margins) is the row
/// width used for segmentation and the height budget used for pagination.
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    /// `[top, right, bottom, left]`
    margin: [f64; 4],
}

impl PageLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: DEFAULT_MARGIN,
        }
    }

    pub fn a0() -> Self {
        Self::new(841.0, 1189.0)
    }
    pub fn a1() -> Self {
        Self::new(594.0, 841.0)
    }
    pub fn a2() -> Self {
        Self::new(420.0, 594.0)
    }
    pub fn a3() -> Self {
        Self::new(297.0, 420.0)
    }
    pub fn a4() -> Self {
        Self::new(210.0, 297.0)
    }
    pub fn a5() -> Self {
        Self::new(148.0, 210.0)
    }
    pub fn a6() -> Self {
        Self::new(105.0, 148.0)
    }
    pub fn a7() -> Self {
        Self::new(74.0, 105.0)
    }
    pub fn a8() -> Self {
        Self::new(52.0, 74.0)
    }
    pub fn a9() -> Self {
        Self::new(37.0, 52.0)
    }
    pub fn a10() -> Self {
        Self::new(26.0, 37.0)
    }

    /// Sets margins with CSS shorthand semantics: 1 value = all sides, 2 = vertical /
    /// horizontal, 3 = top / horizontal / bottom, 4 = top / right / bottom / left.
    /// Any other count restores the defaults.
    pub fn with_margin(mut self, margin: &[f64]) -> Self {
        self.margin = match *margin {
            [a] => [a, a, a, a],
            [v, h] => [v, h, v, h],
            [t, h, b] => [t, h, b, h],
            [t, r, b, l] => [t, r, b, l],
            _ => DEFAULT_MARGIN,
        };
        self
    }

    pub fn margin(&self) -> [f64; 4] {
        self.margin
    }

    pub fn margin_top(&self) -> f64 {
        self.margin[0]
    }

    pub fn margin_right(&self) -> f64 {
        self.margin[1]
    }

    pub fn margin_bottom(&self) -> f64 {
        self.margin[2]
    }

    pub fn margin_left(&self) -> f64 {
        self.margin[3]
    }

    pub fn content_width(&self) -> f64 {
        self.width - self.margin_left() - self.margin_right()
    }

    pub fn content_height(&self) -> f64 {
        self.height - self.margin_top() - self.margin_bottom()
    }

    /// X origin of the content area.
    pub fn start_x(&self) -> f64 {
        self.margin_left()
    }

    /// Y origin of the content area.
    pub fn start_y(&self) -> f64 {
        self.margin_top()
    }

    /// The content area of the page.
    pub fn worker_area(&self) -> Rect {
        Rect::new(
            self.start_x(),
            self.start_y(),
            self.content_width(),
            self.content_height(),
        )
    }

    /// The full page box.
    pub fn page_area(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4()
    }
}

impl PartialEq for PageLayout {
    fn eq(&self, other: &Self) -> bool {
        (self.width - other.width).abs() < EPSILON
            && (self.height - other.height).abs() < EPSILON
            && self
                .margin
                .iter()
                .zip(other.margin.iter())
                .all(|(a, b)| (a - b).abs() < EPSILON)
    }
}
