//! Converts virtual pages into serializable pages.

use crate::error::RenderError;
use crate::registry::ProcessorRegistry;
use crate::traits::AssemblyContext;
use crate::types::{PageLayer, SerializablePage};
use folio_layout::{PageLayout, VirtualPage};
use folio_resource::ResourceManager;

/// Called with each page right before it is assembled.
pub type PageHook = Box<dyn FnMut(&mut VirtualPage) + Send>;

pub struct PageAssembler {
    default_layout: PageLayout,
    registry: ProcessorRegistry,
    before_page: Option<PageHook>,
    assembled: usize,
}

impl PageAssembler {
    pub fn new(default_layout: PageLayout, registry: ProcessorRegistry) -> Self {
        Self {
            default_layout,
            registry,
            before_page: None,
            assembled: 0,
        }
    }

    pub fn with_before_page(mut self, hook: PageHook) -> Self {
        self.before_page = Some(hook);
        self
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    /// Number of pages assembled so far.
    pub fn assembled(&self) -> usize {
        self.assembled
    }

    /// Assembles one page. Pages without an explicit number are numbered by position.
    pub fn assemble(
        &mut self,
        page: &VirtualPage,
        resources: &mut ResourceManager,
    ) -> Result<SerializablePage, RenderError> {
        let page_id = resources.ids().next();
        let page_num = page.page_num().unwrap_or(self.assembled + 1);

        let area = (page.style != self.default_layout).then(|| page.style.page_area());

        let mut layers = Vec::new();
        for (layer_type, boxes) in page.layers() {
            let mut ctx = AssemblyContext::new(resources);
            for content in boxes {
                let processor = self.registry.get(content.tag());
                log::trace!("{} box -> {} processor", content.tag(), processor.name());
                processor.process(content, &mut ctx)?;
            }
            let objects = ctx.into_objects();
            if !objects.is_empty() {
                layers.push(PageLayer {
                    layer_type,
                    objects,
                });
            }
        }

        self.assembled += 1;
        log::debug!(
            "Assembled page {} (id {}, {} layers)",
            page_num,
            page_id,
            layers.len()
        );
        Ok(SerializablePage {
            page_id,
            page_num,
            area,
            templates: page.templates().to_vec(),
            layers,
        })
    }

    /// Runs the before-page hook on every page, then assembles them in order.
    pub fn assemble_all(
        &mut self,
        pages: Vec<VirtualPage>,
        resources: &mut ResourceManager,
    ) -> Result<Vec<SerializablePage>, RenderError> {
        let mut out = Vec::with_capacity(pages.len());
        for mut page in pages {
            if let Some(hook) = self.before_page.as_mut() {
                hook(&mut page);
            }
            out.push(self.assemble(&page, resources)?);
        }
        Ok(out)
    }
}
