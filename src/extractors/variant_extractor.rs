//! Mathematical alphanumeric variant table extraction
//!
//! Walks every nested variant section, keeps rows with exactly three cells
//! (base, transformed, delta) and groups them by base character.

use tracing::{debug, info, trace};

use crate::document::{MappingDocument, MappingRow, MappingSection};
use crate::error::Result;
use crate::extractors::html_document::HtmlDocument;
use crate::extractors::variant_table::{VariantGlyph, VariantTable};

/// Marker carried by every variant section id, e.g. `bold-mappings`
pub const MAPPINGS_SUFFIX: &str = "-mappings";

/// Cells in a data row: base, transformed, delta
const DATA_ROW_CELLS: usize = 3;

/// Build the variant table from a parsed document.
pub fn extract_variants<D: MappingDocument>(document: &D) -> VariantTable {
    let mut table = VariantTable::new();
    let mut section_count = 0usize;
    let mut skipped_rows = 0usize;

    for section in document.sections() {
        section_count += 1;
        let variant = variant_name(&section.identifier());
        let mut kept = 0usize;

        for row in section.rows() {
            let cells = row.cells();
            if cells.len() != DATA_ROW_CELLS {
                trace!(variant = %variant, cells = cells.len(), "skipping non-data row");
                skipped_rows += 1;
                continue;
            }

            let base = leading_token(&cells[0]);
            let glyph = VariantGlyph::new(leading_token(&cells[1]), leading_token(&cells[2]));
            table.insert(base, variant.clone(), glyph);
            kept += 1;
        }

        debug!(variant = %variant, rows = kept, "extracted variant section");
    }

    info!(
        bases = table.len(),
        sections = section_count,
        skipped_rows,
        "variant table extracted"
    );
    table
}

/// Extract the variant table and encode it as compact JSON.
///
/// A document without variant sections yields `{}`.
pub fn extract<D: MappingDocument>(document: &D) -> Result<String> {
    let table = extract_variants(document);
    Ok(serde_json::to_string(&table)?)
}

/// Parse `html` with the default table layout and extract it.
pub fn extract_from_html(html: &str) -> Result<String> {
    let document = HtmlDocument::parse(html)?;
    extract(&document)
}

/// Variant name for a section id: every occurrence of [`MAPPINGS_SUFFIX`] is removed.
pub fn variant_name(identifier: &str) -> String {
    identifier.replace(MAPPINGS_SUFFIX, "")
}

/// Text before the first whitespace character; annotations after it are dropped.
///
/// No trimming happens first, so a cell whose text starts with whitespace (for
/// example a pretty-printed `<td>\n  x\n</td>`) yields `""`.
pub fn leading_token(text: &str) -> &str {
    match text.find(char::is_whitespace) {
        Some(end) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    /// In-memory document, independent of any HTML parser
    struct FakeDocument(Vec<(&'static str, Vec<Vec<&'static str>>)>);

    struct FakeSection<'a>(&'a str, &'a [Vec<&'static str>]);

    struct FakeRow(Vec<String>);

    impl MappingDocument for FakeDocument {
        type Section<'a> = FakeSection<'a>;

        fn sections(&self) -> Vec<FakeSection<'_>> {
            self.0
                .iter()
                .map(|(id, rows)| FakeSection(id, rows.as_slice()))
                .collect()
        }
    }

    impl MappingSection for FakeSection<'_> {
        type Row = FakeRow;

        fn identifier(&self) -> String {
            self.0.to_string()
        }

        fn rows(&self) -> Vec<FakeRow> {
            self.1
                .iter()
                .map(|cells| FakeRow(cells.iter().map(|c| c.to_string()).collect()))
                .collect()
        }
    }

    impl MappingRow for FakeRow {
        fn cells(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract(&FakeDocument(vec![])).unwrap(), "{}");
        assert_eq!(extract_from_html("<html><body></body></html>").unwrap(), "{}");
    }

    #[test]
    fn test_annotations_and_suffix_stripped() {
        let document = FakeDocument(vec![(
            "italic-mappings",
            vec![vec!["x extra-note", "𝑥 note", "1D3ED note"]],
        )]);

        let json: Value = serde_json::from_str(&extract(&document).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"x": {"italic": {"char": "𝑥", "delta": "1D3ED"}}})
        );
    }

    #[test]
    fn test_wrong_cell_count_skipped() {
        let document = FakeDocument(vec![
            (
                "bold-mappings",
                vec![
                    vec!["Base", "Bold"],
                    vec!["a", "𝐚", "1D3B9", "extra"],
                    vec![],
                    vec!["x", "𝐱", "1D3B9"],
                ],
            ),
            ("script-mappings", vec![vec!["x", "𝓍", "1D455"]]),
        ]);

        let table = extract_variants(&document);
        assert_eq!(table.len(), 1);
        assert!(table.get("a").is_none());
        assert_eq!(table.lookup("x", "bold").unwrap().glyph, "𝐱");
        assert_eq!(table.lookup("x", "script").unwrap().glyph, "𝓍");
    }

    #[test]
    fn test_variants_accumulate_per_base() {
        let document = FakeDocument(vec![
            ("bold-mappings", vec![vec!["x", "𝐱", "1D3B9"]]),
            ("italic-mappings", vec![vec!["x", "𝑥", "1D3ED"]]),
        ]);

        assert_eq!(
            extract(&document).unwrap(),
            r#"{"x":{"bold":{"char":"𝐱","delta":"1D3B9"},"italic":{"char":"𝑥","delta":"1D3ED"}}}"#
        );
    }

    #[test]
    fn test_duplicate_row_last_write_wins() {
        let document = FakeDocument(vec![(
            "bold-mappings",
            vec![vec!["x", "first", "1"], vec!["x", "second", "2"]],
        )]);

        let table = extract_variants(&document);
        let glyph = table.lookup("x", "bold").unwrap();
        assert_eq!(glyph.glyph, "second");
        assert_eq!(glyph.delta, "2");
    }

    #[test]
    fn test_empty_and_blank_cells_stored_as_is() {
        let document = FakeDocument(vec![("fraktur-mappings", vec![vec!["", " lead", "1D4BD"]])]);

        let table = extract_variants(&document);
        let glyph = table.lookup("", "fraktur").unwrap();
        assert_eq!(glyph.glyph, "");
        assert_eq!(glyph.delta, "1D4BD");
    }

    #[test]
    fn test_variant_name_removes_every_marker() {
        assert_eq!(variant_name("bold-italic-mappings"), "bold-italic");
        assert_eq!(variant_name("a-mappings-b-mappings"), "a-b");
        assert_eq!(variant_name("monospace"), "monospace");
        assert_eq!(variant_name(""), "");
    }

    #[test]
    fn test_leading_token() {
        assert_eq!(leading_token("x extra"), "x");
        assert_eq!(leading_token("1D3ED\tnote"), "1D3ED");
        assert_eq!(leading_token("𝑥\u{a0}note"), "𝑥");
        assert_eq!(leading_token("plain"), "plain");
        assert_eq!(leading_token(" leading"), "");
    }

    #[test]
    fn test_pretty_printed_cells_yield_empty_tokens() {
        let html = "<section><section id=\"bold-mappings\"><table><tr>\
                    <td>\n  x\n</td><td>\n  𝐱\n</td><td>1D3B9</td>\
                    </tr></table></section></section>";

        assert_eq!(
            extract_from_html(html).unwrap(),
            r#"{"":{"bold":{"char":"","delta":"1D3B9"}}}"#
        );
    }

    #[test]
    fn test_leaves_have_char_and_delta_only() {
        let html = r#"
        <section>
            <section id="bold-mappings">
                <table>
                    <tr><td>A</td><td>𝐀</td><td>1D3BF</td></tr>
                    <tr><td>x</td><td>𝐱</td><td>1D3B9</td></tr>
                </table>
            </section>
            <section id="double-struck-mappings">
                <table><tr><td>x</td><td>𝕩</td><td>1D4F1</td></tr></table>
            </section>
        </section>
        "#;

        let json: Value = serde_json::from_str(&extract_from_html(html).unwrap()).unwrap();
        let bases = json.as_object().unwrap();
        assert_eq!(bases.len(), 2);
        for variants in bases.values() {
            for leaf in variants.as_object().unwrap().values() {
                let leaf = leaf.as_object().unwrap();
                assert_eq!(leaf.len(), 2);
                assert!(leaf["char"].is_string());
                assert!(leaf["delta"].is_string());
            }
        }
        assert_eq!(json["x"]["double-struck"]["char"], "𝕩");
    }
}
