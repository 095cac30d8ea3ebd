//! The content box model: one placeable unit of flow content.

use crate::node_kind::BoxKindTag;
use folio_types::{Color, PathCommand, Size};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Horizontal alignment of a box within its row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatMode {
    None,
    #[default]
    Left,
    Right,
    Center,
}

/// Which neighbouring floats a box refuses to share a row with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearMode {
    None,
    Left,
    Right,
    /// Clearing both sides makes the box occupy a whole row by itself.
    #[default]
    Both,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionMode {
    #[default]
    Static,
    Absolute,
}

/// Page layer a box is drawn into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Foreground,
    #[default]
    Body,
    Background,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn all(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphContent {
    pub text: String,
    pub font_name: String,
    /// Font file to embed when the font is not yet registered in the document.
    pub font_file: Option<PathBuf>,
    pub font_size: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    pub color: Color,
    pub align: TextAlign,
}

impl Default for ParagraphContent {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_name: "SimSun".to_string(),
            font_file: None,
            font_size: 3.0,
            line_height: 1.2,
            color: Color::BLACK,
            align: TextAlign::Left,
        }
    }
}

impl ParagraphContent {
    /// Rough line count for `available_width`, assuming an average glyph advance of
    /// 0.8 × font size.
    pub fn estimate_line_count(&self, available_width: f64) -> usize {
        let chars = self.text.chars().count();
        if chars == 0 || available_width <= 0.0 {
            return 1;
        }
        let per_line = (available_width / (self.font_size * 0.8)).floor() as usize;
        if per_line == 0 {
            return chars;
        }
        chars.div_ceil(per_line).max(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasContent {
    pub commands: Vec<PathCommand>,
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub line_width: f64,
}

impl Default for CanvasContent {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            stroke_color: Some(Color::BLACK),
            fill_color: None,
            line_width: 0.353,
        }
    }
}

/// The concrete payload of a box. Page assembly dispatches on this.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BoxKind {
    /// A plain box: background and borders only.
    #[default]
    Div,
    Paragraph(ParagraphContent),
    Image { path: PathBuf },
    Canvas(CanvasContent),
    /// Reserves an area that is filled later by name.
    AreaHolder { name: String },
    /// Ends the current row.
    LineBreak,
    /// Consumes the rest of the current page.
    PageFiller,
}

impl BoxKind {
    pub fn tag(&self) -> BoxKindTag {
        match self {
            BoxKind::Div => BoxKindTag::Div,
            BoxKind::Paragraph(_) => BoxKindTag::Paragraph,
            BoxKind::Image { .. } => BoxKindTag::Image,
            BoxKind::Canvas(_) => BoxKindTag::Canvas,
            BoxKind::AreaHolder { .. } => BoxKindTag::AreaHolder,
            BoxKind::LineBreak => BoxKindTag::LineBreak,
            BoxKind::PageFiller => BoxKindTag::PageFiller,
        }
    }
}

/// One layout-participating unit.
///
/// `width`/`height` are content sizes; margins, borders and padding are added on top and
/// reported through [`ContentBox::width_plus`] / [`ContentBox::height_plus`]. `x`/`y` are
/// the outer (margin box) origin and are only meaningful for absolute boxes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentBox {
    pub kind: BoxKind,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub margin: Edges,
    pub border: Edges,
    pub padding: Edges,
    pub float: FloatMode,
    pub clear: ClearMode,
    pub position: PositionMode,
    /// `false` keeps the box in one piece across a page break.
    pub splittable: bool,
    pub layer: LayerType,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_dash: Option<Vec<f64>>,
    pub opacity: Option<f64>,
}

impl ContentBox {
    pub fn new(kind: BoxKind) -> Self {
        Self {
            kind,
            splittable: true,
            ..Default::default()
        }
    }

    pub fn div(width: f64, height: f64) -> Self {
        Self::new(BoxKind::Div).with_size(width, height)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BoxKind::Paragraph(ParagraphContent {
            text: text.into(),
            ..Default::default()
        }))
    }

    pub fn image(path: impl Into<PathBuf>, width: f64, height: f64) -> Self {
        Self::new(BoxKind::Image { path: path.into() }).with_size(width, height)
    }

    pub fn canvas(width: f64, height: f64, content: CanvasContent) -> Self {
        Self::new(BoxKind::Canvas(content)).with_size(width, height)
    }

    pub fn area_holder(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self::new(BoxKind::AreaHolder { name: name.into() }).with_size(width, height)
    }

    pub fn line_break() -> Self {
        Self::new(BoxKind::LineBreak)
    }

    pub fn page_filler() -> Self {
        Self::new(BoxKind::PageFiller).with_float(FloatMode::Left, ClearMode::Both)
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_float(mut self, float: FloatMode, clear: ClearMode) -> Self {
        self.float = float;
        self.clear = clear;
        self
    }

    /// Places the box at a fixed position, taking it out of the flow.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.position = PositionMode::Absolute;
        self
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_border(mut self, width: f64, color: Option<Color>) -> Self {
        self.border = Edges::all(width);
        self.border_color = color;
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_layer(mut self, layer: LayerType) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_splittable(mut self, splittable: bool) -> Self {
        self.splittable = splittable;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn tag(&self) -> BoxKindTag {
        self.kind.tag()
    }

    pub fn float_mode(&self) -> FloatMode {
        self.float
    }

    pub fn clear_mode(&self) -> ClearMode {
        self.clear
    }

    pub fn position_mode(&self) -> PositionMode {
        self.position
    }

    pub fn is_absolute(&self) -> bool {
        self.position == PositionMode::Absolute
    }

    /// A block-exclusive box must occupy an entire segment alone.
    pub fn is_block_exclusive(&self) -> bool {
        self.clear == ClearMode::Both
    }

    pub fn is_splittable(&self) -> bool {
        self.splittable
    }

    pub fn is_page_filler(&self) -> bool {
        matches!(self.kind, BoxKind::PageFiller)
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self.kind, BoxKind::LineBreak)
    }

    /// Horizontal space taken by margins, borders and padding.
    pub fn width_plus(&self) -> f64 {
        self.margin.horizontal() + self.border.horizontal() + self.padding.horizontal()
    }

    /// Vertical space taken by margins, borders and padding.
    pub fn height_plus(&self) -> f64 {
        self.margin.vertical() + self.border.vertical() + self.padding.vertical()
    }

    /// Resolves the box size against the available width.
    ///
    /// An unset width fills `width_limit`; an unset paragraph height is derived from the
    /// estimated line count. Returns the outer size including `width_plus`/`height_plus`.
    pub fn prepare(&mut self, width_limit: f64) -> Size {
        let width_plus = self.width_plus();
        let width = *self
            .width
            .get_or_insert_with(|| (width_limit - width_plus).max(0.0));

        if self.height.is_none()
            && let BoxKind::Paragraph(p) = &self.kind
            && !p.text.is_empty()
        {
            let lines = p.estimate_line_count(width);
            self.height = Some(p.font_size * p.line_height * lines as f64);
        }
        let height = *self.height.get_or_insert(0.0);

        Size::new(width + width_plus, height + self.height_plus())
    }

    /// Outer size using whatever width/height is currently set.
    pub fn outer_size(&self) -> Size {
        Size::new(
            self.width.unwrap_or(0.0) + self.width_plus(),
            self.height.unwrap_or(0.0) + self.height_plus(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_box_is_block_exclusive_left_float() {
        let b = ContentBox::div(10.0, 10.0);
        assert_eq!(b.float_mode(), FloatMode::Left);
        assert_eq!(b.clear_mode(), ClearMode::Both);
        assert!(b.is_block_exclusive());
        assert!(b.is_splittable());
        assert!(!b.is_absolute());
    }

    #[test]
    fn test_prepare_fills_unset_width() {
        let mut b = ContentBox::new(BoxKind::Div)
            .with_margin(Edges::all(2.0))
            .with_padding(Edges::all(1.0));
        let size = b.prepare(100.0);
        assert_eq!(b.width, Some(94.0));
        assert_eq!(size.width, 100.0);
        assert_eq!(size.height, 6.0);
    }

    #[test]
    fn test_prepare_keeps_explicit_width() {
        let mut b = ContentBox::div(40.0, 20.0).with_border(1.0, None);
        let size = b.prepare(100.0);
        assert_eq!(size, Size::new(42.0, 22.0));
    }

    #[test]
    fn test_paragraph_height_from_line_estimate() {
        // 0.8 * 5.0 = 4mm per glyph, 40mm width → 10 glyphs per line.
        let mut p = ContentBox::paragraph("abcdefghijklmnopqrstuvwxy").with_width(40.0);
        if let BoxKind::Paragraph(content) = &mut p.kind {
            content.font_size = 5.0;
            content.line_height = 1.0;
        }
        let size = p.prepare(100.0);
        assert_eq!(p.height, Some(15.0));
        assert_eq!(size.height, 15.0);
    }

    #[test]
    fn test_line_estimate_edge_cases() {
        let p = ParagraphContent {
            text: "abc".to_string(),
            font_size: 10.0,
            ..Default::default()
        };
        assert_eq!(p.estimate_line_count(0.0), 1);
        // Narrower than a single glyph: one glyph per line.
        assert_eq!(p.estimate_line_count(5.0), 3);
        let empty = ParagraphContent::default();
        assert_eq!(empty.estimate_line_count(100.0), 1);
    }

    #[test]
    fn test_at_makes_box_absolute() {
        let b = ContentBox::div(5.0, 5.0).at(1.0, 2.0);
        assert!(b.is_absolute());
        assert_eq!((b.x, b.y), (Some(1.0), Some(2.0)));
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ContentBox::line_break().tag(), BoxKindTag::LineBreak);
        assert_eq!(ContentBox::page_filler().tag(), BoxKindTag::PageFiller);
        assert_eq!(ContentBox::image("a.png", 1.0, 1.0).tag(), BoxKindTag::Image);
        assert!(ContentBox::page_filler().is_page_filler());
    }
}
