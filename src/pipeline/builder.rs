// src/pipeline/builder.rs
use super::config::DocumentConfig;
use super::document::Document;
use crate::error::PipelineError;
use folio_layout::{BoxKindTag, PageLayout};
use folio_render_core::{BoxProcessor, PageAssembler, PageHook, ProcessorRegistry};
use folio_resource::{ContainerStore, FilesystemContainer, IdAllocator, ResourceManager};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a [`Document`].
pub struct DocumentBuilder {
    store: Option<Arc<dyn ContainerStore>>,
    output_dir: Option<PathBuf>,
    config: DocumentConfig,
    registry: ProcessorRegistry,
    before_page: Option<PageHook>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            store: None,
            output_dir: None,
            config: DocumentConfig::default(),
            registry: ProcessorRegistry::with_defaults(),
            before_page: None,
        }
    }
}

impl DocumentBuilder {
    /// Creates a new `DocumentBuilder` with the default A4 layout and the built-in processors.
    pub fn new() -> Self {
        Default::default()
    }

    /// Writes the document through an existing container.
    pub fn with_store(mut self, store: Arc<dyn ContainerStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Writes the document into `<dir>/Doc_<index>` on disk.
    /// Ignored when a store has been set with `with_store`.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_config(mut self, config: DocumentConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the default page style used for flow content.
    pub fn with_page_layout(mut self, layout: PageLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// Replaces the processor registry wholesale.
    pub fn with_registry(mut self, registry: ProcessorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Adds or replaces the processor for one box kind.
    pub fn with_processor(mut self, tag: BoxKindTag, processor: Arc<dyn BoxProcessor>) -> Self {
        if self.registry.register(tag, processor).is_some() {
            log::debug!("Replaced built-in {} processor", tag);
        }
        self
    }

    /// Installs a hook that sees every page right before it is assembled.
    pub fn with_before_page<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut folio_layout::VirtualPage) + Send + 'static,
    {
        self.before_page = Some(Box::new(hook));
        self
    }

    /// Consumes the builder and opens the document's resources.
    pub fn build(self) -> Result<Document, PipelineError> {
        let store: Arc<dyn ContainerStore> = match (self.store, self.output_dir) {
            (Some(store), _) => store,
            (None, Some(dir)) => {
                let container = FilesystemContainer::new(&dir, &self.config.doc_name())?;
                log::info!(
                    "Writing document to '{}'.",
                    container.doc_dir().display()
                );
                Arc::new(container)
            }
            (None, None) => {
                return Err(PipelineError::Config(
                    "No container has been configured. Use `with_store` or `with_output_dir`."
                        .to_string(),
                ));
            }
        };

        let ids = Arc::new(IdAllocator::new(self.config.start_id));
        let resources = ResourceManager::open(store, ids)?;
        log::info!(
            "Opened {} ({} public, {} document resources already present).",
            self.config.doc_name(),
            resources.public_resources().len(),
            resources.document_resources().len()
        );

        let mut assembler = PageAssembler::new(self.config.layout, self.registry);
        if let Some(hook) = self.before_page {
            assembler = assembler.with_before_page(hook);
        }

        Ok(Document::new(self.config, resources, assembler))
    }
}
