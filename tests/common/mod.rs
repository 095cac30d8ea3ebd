#![allow(dead_code)]

pub mod doc_assertions;
pub mod fixtures;

use folio::{
    ContentBox, DocumentBuilder, InMemoryContainer, PageLayout, PipelineError, RenderedDocument,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A4 with 10mm margins: a 190 x 277 content area.
pub fn test_layout() -> PageLayout {
    PageLayout::a4().with_margin(&[10.0])
}

/// A builder writing into a fresh in-memory container with the test layout.
pub fn in_memory_builder() -> (DocumentBuilder, Arc<InMemoryContainer>) {
    let store = Arc::new(InMemoryContainer::default());
    let builder = DocumentBuilder::new()
        .with_store(store.clone())
        .with_page_layout(test_layout());
    (builder, store)
}

/// Lays out and assembles `boxes` in a fresh in-memory document.
pub fn render_boxes(boxes: Vec<ContentBox>) -> Result<RenderedDocument, PipelineError> {
    let (builder, _store) = in_memory_builder();
    let mut doc = builder.build()?;
    doc.add_all(boxes);
    doc.finish()
}
