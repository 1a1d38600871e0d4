//! `scraper`-backed [`MappingDocument`]
//!
//! Sections, rows and cells are located with CSS selectors. The defaults match the
//! published mapping table: `section section`, `tr`, `td`.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::document::{MappingDocument, MappingRow, MappingSection};
use crate::error::{Error, Result};

/// Selectors describing where the mapping table lives in the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    /// Variant sections (one per typographic style)
    pub section_selector: String,
    /// Rows inside a section
    pub row_selector: String,
    /// Cells inside a row
    pub cell_selector: String,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            section_selector: "section section".to_string(),
            row_selector: "tr".to_string(),
            cell_selector: "td".to_string(),
        }
    }
}

/// Compiled form of a [`TableLayout`]
#[derive(Debug, Clone)]
pub struct TableSelectors {
    section: Selector,
    row: Selector,
    cell: Selector,
}

impl TableSelectors {
    pub fn compile(layout: &TableLayout) -> Result<Self> {
        Ok(Self {
            section: parse_selector(&layout.section_selector)?,
            row: parse_selector(&layout.row_selector)?,
            cell: parse_selector(&layout.cell_selector)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// A parsed HTML page plus the selectors used to walk it
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
    selectors: TableSelectors,
}

impl HtmlDocument {
    /// Parse `html` using the default [`TableLayout`].
    pub fn parse(html: &str) -> Result<Self> {
        Self::parse_with_layout(html, &TableLayout::default())
    }

    pub fn parse_with_layout(html: &str, layout: &TableLayout) -> Result<Self> {
        let selectors = TableSelectors::compile(layout)?;
        Ok(Self {
            html: Html::parse_document(html),
            selectors,
        })
    }
}

impl MappingDocument for HtmlDocument {
    type Section<'a> = HtmlSection<'a>;

    fn sections(&self) -> Vec<HtmlSection<'_>> {
        self.html
            .select(&self.selectors.section)
            .map(|element| HtmlSection {
                element,
                selectors: &self.selectors,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlSection<'a> {
    element: ElementRef<'a>,
    selectors: &'a TableSelectors,
}

impl<'a> MappingSection for HtmlSection<'a> {
    type Row = HtmlRow<'a>;

    fn identifier(&self) -> String {
        self.element.value().id().unwrap_or_default().to_string()
    }

    fn rows(&self) -> Vec<HtmlRow<'a>> {
        let selectors = self.selectors;
        self.element
            .select(&selectors.row)
            .map(|element| HtmlRow { element, selectors })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlRow<'a> {
    element: ElementRef<'a>,
    selectors: &'a TableSelectors,
}

impl MappingRow for HtmlRow<'_> {
    fn cells(&self) -> Vec<String> {
        self.element
            .select(&self.selectors.cell)
            .map(|cell| cell.text().collect::<String>())
            .collect()
    }
}
