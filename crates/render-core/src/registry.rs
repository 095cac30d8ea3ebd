use crate::processors::{
    AreaHolderProcessor, CanvasProcessor, DivProcessor, ImageProcessor, NoOutputProcessor,
    ParagraphProcessor,
};
use crate::traits::BoxProcessor;
use folio_layout::BoxKindTag;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps box kinds to the processor that renders them.
///
/// Kinds without an entry fall back to the default processor, which draws plain box
/// decoration.
#[derive(Clone)]
pub struct ProcessorRegistry {
    processors: HashMap<BoxKindTag, Arc<dyn BoxProcessor>>,
    fallback: Arc<dyn BoxProcessor>,
}

impl ProcessorRegistry {
    /// A registry with no kind-specific processors.
    pub fn new() -> Self {
        Self {
            processors: HashMap::new(),
            fallback: Arc::new(DivProcessor),
        }
    }

    /// A registry with the built-in processor for every box kind.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(BoxKindTag::Paragraph, Arc::new(ParagraphProcessor));
        registry.register(BoxKindTag::Image, Arc::new(ImageProcessor));
        registry.register(BoxKindTag::Canvas, Arc::new(CanvasProcessor));
        registry.register(BoxKindTag::AreaHolder, Arc::new(AreaHolderProcessor));
        registry.register(BoxKindTag::LineBreak, Arc::new(NoOutputProcessor));
        registry.register(BoxKindTag::PageFiller, Arc::new(NoOutputProcessor));
        registry
    }

    /// Registers `processor` for `tag`, returning the one it replaces.
    pub fn register(
        &mut self,
        tag: BoxKindTag,
        processor: Arc<dyn BoxProcessor>,
    ) -> Option<Arc<dyn BoxProcessor>> {
        self.processors.insert(tag, processor)
    }

    pub fn set_fallback(&mut self, processor: Arc<dyn BoxProcessor>) {
        self.fallback = processor;
    }

    pub fn contains(&self, tag: BoxKindTag) -> bool {
        self.processors.contains_key(&tag)
    }

    pub fn get(&self, tag: BoxKindTag) -> &dyn BoxProcessor {
        self.processors
            .get(&tag)
            .map(|p| p.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.processors.keys().map(|k| k.as_str()).collect();
        kinds.sort_unstable();
        f.debug_struct("ProcessorRegistry")
            .field("kinds", &kinds)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}
