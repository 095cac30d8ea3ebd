/// Represents the specific kind of a content box.
///
/// This enum replaces stringly-typed identifiers for processor lookups and registration,
/// providing compile-time safety and cheap hashing during page assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoxKindTag {
    Div,
    Paragraph,
    Image,
    Canvas,
    AreaHolder,
    LineBreak,
    PageFiller,
}

impl BoxKindTag {
    pub const ALL: [BoxKindTag; 7] = [
        BoxKindTag::Div,
        BoxKindTag::Paragraph,
        BoxKindTag::Image,
        BoxKindTag::Canvas,
        BoxKindTag::AreaHolder,
        BoxKindTag::LineBreak,
        BoxKindTag::PageFiller,
    ];

    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxKindTag::Div => "Div",
            BoxKindTag::Paragraph => "Paragraph",
            BoxKindTag::Image => "Image",
            BoxKindTag::Canvas => "Canvas",
            BoxKindTag::AreaHolder => "AreaHolder",
            BoxKindTag::LineBreak => "LineBreak",
            BoxKindTag::PageFiller => "PageFiller",
        }
    }
}

impl std::fmt::Display for BoxKindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
