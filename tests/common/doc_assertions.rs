use folio::{PageObject, RenderedDocument, SerializablePage};

/// All text runs on a page, in paint order.
pub fn page_texts(page: &SerializablePage) -> Vec<&str> {
    page.objects()
        .filter_map(|o| match o {
            PageObject::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect()
}

/// Top edge of every path object on a page, in paint order.
pub fn path_tops(page: &SerializablePage) -> Vec<f64> {
    page.objects()
        .filter_map(|o| match o {
            PageObject::Path(p) => Some(p.boundary.y),
            _ => None,
        })
        .collect()
}

/// Assert the number of pages in a rendered document
#[macro_export]
macro_rules! assert_page_count {
    ($doc:expr, $count:expr) => {
        assert_eq!(
            $doc.pages.len(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $doc.pages.len()
        );
    };
}

/// Assert that a page carries the given text
#[macro_export]
macro_rules! assert_page_contains_text {
    ($doc:expr, $page:expr, $text:expr) => {
        let texts = $crate::common::doc_assertions::page_texts(&$doc.pages[$page]);
        assert!(
            texts.contains(&$text),
            "Page {} should contain '{}', but its texts were: {:?}",
            $page,
            $text,
            texts
        );
    };
}

/// Page ids must be distinct from each other and from every resource id.
pub fn assert_unique_ids(doc: &RenderedDocument) {
    let mut seen = std::collections::HashSet::new();
    let resource_ids = [&doc.public_resources, &doc.document_resources]
        .into_iter()
        .flat_map(|list| list.descriptors())
        .filter_map(|d| d.id());
    for id in doc.pages.iter().map(|p| p.page_id).chain(resource_ids) {
        assert!(seen.insert(id), "id {} handed out twice", id);
    }
}
