//! The serializable page model produced by assembly.

use folio_layout::{LayerType, TemplateRef, TextAlign};
use folio_types::{Color, ObjectId, Rect};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathObject {
    pub id: ObjectId,
    pub boundary: Rect,
    /// Path data in abbreviated form, relative to the boundary origin.
    pub abbreviated_data: String,
    pub stroke: bool,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    /// Registered line style for stroked paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_param: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextObject {
    pub id: ObjectId,
    pub boundary: Rect,
    pub font: ObjectId,
    pub size: f64,
    pub fill_color: Color,
    pub align: TextAlign,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    pub id: ObjectId,
    pub boundary: Rect,
    pub resource: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<u8>,
}

/// A reference to a registered vector shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeObject {
    pub id: ObjectId,
    pub boundary: Rect,
    pub resource: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<u8>,
}

/// An empty named area, filled in by a later stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockObject {
    pub id: ObjectId,
    pub name: String,
    pub boundary: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum PageObject {
    Path(PathObject),
    Text(TextObject),
    Image(ImageObject),
    Composite(CompositeObject),
    Block(BlockObject),
}

impl PageObject {
    pub fn id(&self) -> ObjectId {
        match self {
            PageObject::Path(o) => o.id,
            PageObject::Text(o) => o.id,
            PageObject::Image(o) => o.id,
            PageObject::Composite(o) => o.id,
            PageObject::Block(o) => o.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayer {
    pub layer_type: LayerType,
    pub objects: Vec<PageObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerializablePage {
    pub page_id: ObjectId,
    pub page_num: usize,
    /// Only set when the page differs from the document's default layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Rect>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<TemplateRef>,
    pub layers: Vec<PageLayer>,
}

impl SerializablePage {
    pub fn objects(&self) -> impl Iterator<Item = &PageObject> {
        self.layers.iter().flat_map(|l| l.objects.iter())
    }

    pub fn layer(&self, layer_type: LayerType) -> Option<&PageLayer> {
        self.layers.iter().find(|l| l.layer_type == layer_type)
    }
}
