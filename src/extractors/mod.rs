//! Variant table extraction modules
//!
//! `html_document` adapts the HTML parser, `variant_extractor` walks the table and
//! `variant_table` holds the result.

mod html_document;
mod variant_extractor;
mod variant_table;

pub use html_document::*;
pub use variant_extractor::*;
pub use variant_table::*;
