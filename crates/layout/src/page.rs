use crate::LayoutError;
use crate::element::{ContentBox, FloatMode, LayerType};
use crate::page_layout::PageLayout;
use folio_types::{ObjectId, Rect};
use serde::Serialize;

/// A reference from a page to a shared page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateRef {
    pub template_id: ObjectId,
    /// Whether the template is drawn behind or in front of the body.
    pub z_order: LayerType,
}

/// A page produced by pagination: absolutely positioned boxes plus page-level settings.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualPage {
    pub style: PageLayout,
    content: Vec<ContentBox>,
    page_num: Option<usize>,
    templates: Vec<TemplateRef>,
}

impl VirtualPage {
    pub fn new(style: PageLayout) -> Self {
        Self {
            style,
            content: Vec::new(),
            page_num: None,
            templates: Vec::new(),
        }
    }

    /// Adds a box that already carries its final position.
    pub fn add_absolute(&mut self, content: ContentBox) -> Result<(), LayoutError> {
        if !content.is_absolute() {
            return Err(LayoutError::InvalidAbsoluteBox(format!(
                "{} box is not absolutely positioned",
                content.tag()
            )));
        }
        if content.x.is_none() || content.y.is_none() {
            return Err(LayoutError::InvalidAbsoluteBox(format!(
                "{} box has no x/y coordinates",
                content.tag()
            )));
        }
        if content.width.is_none() {
            return Err(LayoutError::InvalidAbsoluteBox(format!(
                "{} box has no width",
                content.tag()
            )));
        }
        if !matches!(content.float, FloatMode::None | FloatMode::Left) {
            log::warn!(
                "{:?} float on absolute {} box is ignored",
                content.float,
                content.tag()
            );
        }
        self.content.push(content);
        Ok(())
    }

    pub(crate) fn push_placed(&mut self, content: ContentBox) {
        self.content.push(content);
    }

    pub fn content(&self) -> &[ContentBox] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Boxes grouped by layer in drawing order (background, body, foreground).
    /// Empty layers are omitted.
    pub fn layers(&self) -> Vec<(LayerType, Vec<&ContentBox>)> {
        [LayerType::Background, LayerType::Body, LayerType::Foreground]
            .into_iter()
            .filter_map(|layer| {
                let boxes: Vec<_> = self.content.iter().filter(|b| b.layer == layer).collect();
                (!boxes.is_empty()).then_some((layer, boxes))
            })
            .collect()
    }

    pub fn page_num(&self) -> Option<usize> {
        self.page_num
    }

    /// Pins the page to a 1-based position in the document.
    pub fn set_page_num(&mut self, page_num: usize) -> Result<(), LayoutError> {
        if page_num == 0 {
            return Err(LayoutError::InvalidPageNumber(page_num));
        }
        self.page_num = Some(page_num);
        Ok(())
    }

    pub fn add_template(&mut self, template_id: ObjectId, z_order: LayerType) {
        self.templates.push(TemplateRef {
            template_id,
            z_order,
        });
    }

    pub fn templates(&self) -> &[TemplateRef] {
        &self.templates
    }

    /// Smallest rectangle covering the outer boxes of all placed content.
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content
            .iter()
            .map(|b| {
                let size = b.outer_size();
                Rect::new(
                    b.x.unwrap_or(0.0),
                    b.y.unwrap_or(0.0),
                    size.width,
                    size.height,
                )
            })
            .reduce(|acc, r| {
                let x = acc.x.min(r.x);
                let y = acc.y.min(r.y);
                Rect::new(
                    x,
                    y,
                    acc.right().max(r.right()) - x,
                    acc.bottom().max(r.bottom()) - y,
                )
            })
    }
}

impl Default for VirtualPage {
    fn default() -> Self {
        Self::new(PageLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_absolute_validates_box() {
        let mut page = VirtualPage::default();
        assert!(matches!(
            page.add_absolute(ContentBox::div(10.0, 10.0)),
            Err(LayoutError::InvalidAbsoluteBox(_))
        ));

        let mut no_width = ContentBox::div(10.0, 10.0).at(0.0, 0.0);
        no_width.width = None;
        assert!(page.add_absolute(no_width).is_err());

        let mut no_y = ContentBox::div(10.0, 10.0).at(0.0, 0.0);
        no_y.y = None;
        assert!(page.add_absolute(no_y).is_err());

        page.add_absolute(ContentBox::div(10.0, 10.0).at(5.0, 5.0)).unwrap();
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_page_num_rejects_zero() {
        let mut page = VirtualPage::default();
        assert!(matches!(
            page.set_page_num(0),
            Err(LayoutError::InvalidPageNumber(0))
        ));
        page.set_page_num(3).unwrap();
        assert_eq!(page.page_num(), Some(3));
    }

    #[test]
    fn test_layers_skip_empty() {
        let mut page = VirtualPage::default();
        page.add_absolute(ContentBox::div(1.0, 1.0).at(0.0, 0.0)).unwrap();
        page.add_absolute(
            ContentBox::div(1.0, 1.0)
                .at(0.0, 0.0)
                .with_layer(LayerType::Background),
        )
        .unwrap();
        let layers = page.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].0, LayerType::Background);
        assert_eq!(layers[1].0, LayerType::Body);
    }

    #[test]
    fn test_content_bounds() {
        let mut page = VirtualPage::default();
        assert_eq!(page.content_bounds(), None);
        page.add_absolute(ContentBox::div(10.0, 10.0).at(5.0, 5.0)).unwrap();
        page.add_absolute(ContentBox::div(20.0, 5.0).at(30.0, 40.0)).unwrap();
        assert_eq!(page.content_bounds(), Some(Rect::new(5.0, 5.0, 45.0, 40.0)));
    }
}
