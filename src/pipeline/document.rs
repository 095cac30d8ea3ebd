use super::config::DocumentConfig;
use crate::error::PipelineError;
use folio_layout::{
    ContentBox, PaginationAnalyzer, SegmentationEngine, VirtualPage, split_absolute,
};
use folio_render_core::{PageAssembler, SerializablePage};
use folio_resource::ResourceManager;
use folio_types::ResourceList;
use serde::Serialize;

/// The output of a finished document.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDocument {
    pub pages: Vec<SerializablePage>,
    pub public_resources: ResourceList,
    pub document_resources: ResourceList,
    /// Highest object id handed out while building.
    pub max_id: u32,
}

/// A document under construction.
///
/// Flow content is collected with [`Document::add`] and laid out when the document is
/// finished. Pages added with [`Document::add_page`] are emitted first, in insertion order,
/// followed by the pages the flow content produced.
pub struct Document {
    config: DocumentConfig,
    resources: ResourceManager,
    assembler: PageAssembler,
    flow: Vec<ContentBox>,
    fixed_pages: Vec<VirtualPage>,
}

impl Document {
    pub(crate) fn new(
        config: DocumentConfig,
        resources: ResourceManager,
        assembler: PageAssembler,
    ) -> Self {
        Self {
            config,
            resources,
            assembler,
            flow: Vec::new(),
            fixed_pages: Vec::new(),
        }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    /// Direct access to the resource registry, e.g. to register templates up front.
    pub fn resources_mut(&mut self) -> &mut ResourceManager {
        &mut self.resources
    }

    /// Appends a box to the flow.
    ///
    /// Absolute boxes are placed on the first flow page at their own coordinates.
    pub fn add(&mut self, content: ContentBox) -> &mut Self {
        self.flow.push(content);
        self
    }

    pub fn add_all<I: IntoIterator<Item = ContentBox>>(&mut self, boxes: I) -> &mut Self {
        self.flow.extend(boxes);
        self
    }

    /// Adds a page whose content is already positioned.
    pub fn add_page(&mut self, page: VirtualPage) -> &mut Self {
        self.fixed_pages.push(page);
        self
    }

    /// Boxes waiting for layout.
    pub fn pending(&self) -> usize {
        self.flow.len()
    }

    /// Lays out the flow, assembles every page and flushes the resource lists.
    pub fn finish(mut self) -> Result<RenderedDocument, PipelineError> {
        let mut pages = std::mem::take(&mut self.fixed_pages);
        let flow = std::mem::take(&mut self.flow);

        if !flow.is_empty() || pages.is_empty() {
            pages.extend(self.layout_flow(flow)?);
        }

        log::info!("Assembling {} pages.", pages.len());
        let assembled = self.assembler.assemble_all(pages, &mut self.resources)?;

        self.resources.flush()?;
        log::info!(
            "Finished {} with {} new resources.",
            self.config.doc_name(),
            self.resources.new_resource_ids().len()
        );

        Ok(RenderedDocument {
            pages: assembled,
            public_resources: self.resources.public_resources().clone(),
            document_resources: self.resources.document_resources().clone(),
            max_id: self.resources.ids().current(),
        })
    }

    fn layout_flow(&self, boxes: Vec<ContentBox>) -> Result<Vec<VirtualPage>, PipelineError> {
        let (flow, absolute) = split_absolute(boxes);

        let segments = SegmentationEngine::for_layout(&self.config.layout).segment(&flow)?;
        log::debug!("Segmented {} boxes into {} rows.", flow.len(), segments.len());

        let mut pages = PaginationAnalyzer::new(self.config.layout).paginate(segments);
        if let Some(first) = pages.first_mut() {
            for content in absolute {
                first.add_absolute(content)?;
            }
        }
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use crate::pipeline::DocumentBuilder;
    use folio_layout::{ContentBox, PageLayout, VirtualPage};
    use folio_resource::InMemoryContainer;
    use folio_types::Color;
    use std::sync::Arc;

    fn builder() -> DocumentBuilder {
        DocumentBuilder::new().with_store(Arc::new(InMemoryContainer::default()))
    }

    #[test]
    fn test_empty_document_has_one_blank_page() {
        let rendered = builder().build().unwrap().finish().unwrap();
        assert_eq!(rendered.pages.len(), 1);
        assert_eq!(rendered.pages[0].page_num, 1);
        assert!(rendered.pages[0].layers.is_empty());
    }

    #[test]
    fn test_fixed_pages_come_before_flow() {
        let mut doc = builder().build().unwrap();
        let mut cover = VirtualPage::new(PageLayout::a5());
        cover
            .add_absolute(ContentBox::div(20.0, 20.0).at(10.0, 10.0))
            .unwrap();
        doc.add_page(cover);
        doc.add(ContentBox::div(20.0, 20.0));

        let rendered = doc.finish().unwrap();
        assert_eq!(rendered.pages.len(), 2);
        assert!(rendered.pages[0].area.is_some(), "A5 cover differs from the A4 default");
        assert!(rendered.pages[1].area.is_none());
        assert_eq!(rendered.pages[1].page_num, 2);
    }

    #[test]
    fn test_fixed_pages_only_skip_flow() {
        let mut doc = builder().build().unwrap();
        doc.add_page(VirtualPage::default());
        let rendered = doc.finish().unwrap();
        assert_eq!(rendered.pages.len(), 1);
    }

    #[test]
    fn test_absolute_flow_box_lands_on_first_page() {
        let mut doc = builder().build().unwrap();
        let shaded = || ContentBox::div(10.0, 10.0).with_background(Color::gray(200));
        doc.add(shaded().at(50.0, 60.0));
        doc.add(shaded());
        let rendered = doc.finish().unwrap();
        assert_eq!(rendered.pages.len(), 1);
        assert_eq!(rendered.pages[0].objects().count(), 2);
    }
}
