use folio_layout::PageLayout;

/// Settings shared by every stage of one document build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentConfig {
    /// Index of the document inside its container; the document directory is `Doc_<index>`.
    pub doc_index: usize,
    /// Style used for flow pages and as the baseline that page areas are compared against.
    pub layout: PageLayout,
    /// Highest id already used in the container. Fresh ids start after it.
    pub start_id: u32,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            doc_index: 0,
            layout: PageLayout::default(),
            start_id: 0,
        }
    }
}

impl DocumentConfig {
    /// Name of the document directory, e.g. `Doc_0`.
    pub fn doc_name(&self) -> String {
        format!("Doc_{}", self.doc_index)
    }
}
