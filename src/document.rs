//! Document access used by the variant extractor
//!
//! The extractor never touches a parser's object model directly. Anything that can
//! list nested variant sections, their rows and the text of each row's cells can be
//! fed to [`crate::extract`]. [`crate::HtmlDocument`] adapts the `scraper` crate.

/// A parsed document holding one section per typographic variant.
pub trait MappingDocument {
    type Section<'a>: MappingSection
    where
        Self: 'a;

    /// Every section nested inside another section, in document order.
    fn sections(&self) -> Vec<Self::Section<'_>>;
}

/// One variant section (e.g. `id="bold-mappings"`).
pub trait MappingSection {
    type Row: MappingRow;

    /// The section identifier, or an empty string when the element has none.
    fn identifier(&self) -> String;

    /// Every row-like element inside the section, in document order.
    fn rows(&self) -> Vec<Self::Row>;
}

/// One table row inside a variant section.
pub trait MappingRow {
    /// Text content of each cell-like element, in order.
    fn cells(&self) -> Vec<String>;
}
