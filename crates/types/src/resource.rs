//! Resource descriptors shared between the resource manager, page assembly and the
//! container collaborator.
//!
//! Every descriptor is a plain value. The `id` field is assigned by the resource manager;
//! all other fields are intrinsic content and take part in deduplication.

use crate::color::Color;
use crate::ids::{ObjectId, ResourceLoc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub font_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_file: Option<ResourceLoc>,
    #[serde(default)]
    pub serif: bool,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub fixed_width: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpaceKind {
    Gray,
    #[default]
    Rgb,
    Cmyk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSpaceDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub kind: ColorSpaceKind,
    pub bits_per_component: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ResourceLoc>,
}

impl Default for ColorSpaceDescriptor {
    fn default() -> Self {
        Self {
            id: None,
            kind: ColorSpaceKind::Rgb,
            bits_per_component: 8,
            profile: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Stroke/fill parameters shared by graphic objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawParamDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative: Option<ObjectId>,
    pub line_width: f64,
    pub join: LineJoin,
    pub cap: LineCap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dash_pattern: Vec<f64>,
    pub miter_limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
}

impl Default for DrawParamDescriptor {
    fn default() -> Self {
        Self {
            id: None,
            relative: None,
            line_width: 0.353,
            join: LineJoin::Miter,
            cap: LineCap::Butt,
            dash_offset: None,
            dash_pattern: Vec::new(),
            miter_limit: 3.528,
            fill_color: None,
            stroke_color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    #[default]
    Image,
    Audio,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiMediaDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub media_type: MediaType,
    pub format: String,
    pub media_file: ResourceLoc,
}

/// One drawing command of a vector shape, in shape-local millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { x1: f64, y1: f64, x: f64, y: f64 },
    CubicTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    Close,
}

impl PathCommand {
    /// Abbreviated path notation used by the container format.
    pub fn abbreviated(&self) -> String {
        match *self {
            PathCommand::MoveTo { x, y } => format!("M {} {}", x, y),
            PathCommand::LineTo { x, y } => format!("L {} {}", x, y),
            PathCommand::QuadTo { x1, y1, x, y } => format!("Q {} {} {} {}", x1, y1, x, y),
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => format!("B {} {} {} {} {} {}", x1, y1, x2, y2, x, y),
            PathCommand::Close => "C".to_string(),
        }
    }

    pub fn join(commands: &[PathCommand]) -> String {
        commands
            .iter()
            .map(PathCommand::abbreviated)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A composite graphic unit: a reusable vector drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorShapeDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_param: Option<ObjectId>,
    pub content: Vec<PathCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Font,
    ColorSpace,
    DrawParam,
    MultiMedia,
    VectorShape,
}

impl ResourceKind {
    /// Fonts and color spaces live in the public list, everything else in the document list.
    pub fn is_public(self) -> bool {
        matches!(self, ResourceKind::Font | ResourceKind::ColorSpace)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResourceDescriptor {
    Font(FontDescriptor),
    ColorSpace(ColorSpaceDescriptor),
    DrawParam(DrawParamDescriptor),
    MultiMedia(MultiMediaDescriptor),
    VectorShape(VectorShapeDescriptor),
}

impl ResourceDescriptor {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceDescriptor::Font(_) => ResourceKind::Font,
            ResourceDescriptor::ColorSpace(_) => ResourceKind::ColorSpace,
            ResourceDescriptor::DrawParam(_) => ResourceKind::DrawParam,
            ResourceDescriptor::MultiMedia(_) => ResourceKind::MultiMedia,
            ResourceDescriptor::VectorShape(_) => ResourceKind::VectorShape,
        }
    }

    pub fn id(&self) -> Option<ObjectId> {
        match self {
            ResourceDescriptor::Font(d) => d.id,
            ResourceDescriptor::ColorSpace(d) => d.id,
            ResourceDescriptor::DrawParam(d) => d.id,
            ResourceDescriptor::MultiMedia(d) => d.id,
            ResourceDescriptor::VectorShape(d) => d.id,
        }
    }

    pub fn set_id(&mut self, id: Option<ObjectId>) {
        match self {
            ResourceDescriptor::Font(d) => d.id = id,
            ResourceDescriptor::ColorSpace(d) => d.id = id,
            ResourceDescriptor::DrawParam(d) => d.id = id,
            ResourceDescriptor::MultiMedia(d) => d.id = id,
            ResourceDescriptor::VectorShape(d) => d.id = id,
        }
    }

    /// A copy with the identity stripped; the canonical form used for content hashing.
    pub fn without_id(&self) -> ResourceDescriptor {
        let mut copy = self.clone();
        copy.set_id(None);
        copy
    }
}

impl From<FontDescriptor> for ResourceDescriptor {
    fn from(d: FontDescriptor) -> Self {
        ResourceDescriptor::Font(d)
    }
}

impl From<ColorSpaceDescriptor> for ResourceDescriptor {
    fn from(d: ColorSpaceDescriptor) -> Self {
        ResourceDescriptor::ColorSpace(d)
    }
}

impl From<DrawParamDescriptor> for ResourceDescriptor {
    fn from(d: DrawParamDescriptor) -> Self {
        ResourceDescriptor::DrawParam(d)
    }
}

impl From<MultiMediaDescriptor> for ResourceDescriptor {
    fn from(d: MultiMediaDescriptor) -> Self {
        ResourceDescriptor::MultiMedia(d)
    }
}

impl From<VectorShapeDescriptor> for ResourceDescriptor {
    fn from(d: VectorShapeDescriptor) -> Self {
        ResourceDescriptor::VectorShape(d)
    }
}

/// A resource list as stored in one of the container's resource slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceList {
    /// Directory that relative resource files are resolved against.
    pub base_loc: ResourceLoc,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<FontDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color_spaces: Vec<ColorSpaceDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub draw_params: Vec<DrawParamDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multimedia: Vec<MultiMediaDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vector_shapes: Vec<VectorShapeDescriptor>,
}

impl Default for ResourceList {
    fn default() -> Self {
        Self {
            base_loc: ResourceLoc::new("Res"),
            fonts: Vec::new(),
            color_spaces: Vec::new(),
            draw_params: Vec::new(),
            multimedia: Vec::new(),
            vector_shapes: Vec::new(),
        }
    }
}

impl ResourceList {
    pub fn with_base_loc(base_loc: impl Into<ResourceLoc>) -> Self {
        Self {
            base_loc: base_loc.into(),
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
            + self.color_spaces.len()
            + self.draw_params.len()
            + self.multimedia.len()
            + self.vector_shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a descriptor to the matching collection.
    pub fn push(&mut self, descriptor: ResourceDescriptor) {
        match descriptor {
            ResourceDescriptor::Font(d) => self.fonts.push(d),
            ResourceDescriptor::ColorSpace(d) => self.color_spaces.push(d),
            ResourceDescriptor::DrawParam(d) => self.draw_params.push(d),
            ResourceDescriptor::MultiMedia(d) => self.multimedia.push(d),
            ResourceDescriptor::VectorShape(d) => self.vector_shapes.push(d),
        }
    }

    /// Every entry as a tagged descriptor, in collection order.
    pub fn descriptors(&self) -> impl Iterator<Item = ResourceDescriptor> + '_ {
        self.fonts
            .iter()
            .cloned()
            .map(ResourceDescriptor::Font)
            .chain(self.color_spaces.iter().cloned().map(ResourceDescriptor::ColorSpace))
            .chain(self.draw_params.iter().cloned().map(ResourceDescriptor::DrawParam))
            .chain(self.multimedia.iter().cloned().map(ResourceDescriptor::MultiMedia))
            .chain(self.vector_shapes.iter().cloned().map(ResourceDescriptor::VectorShape))
    }
}
