//! Mathematical alphanumeric variant table parser
//!
//! Turns the HTML table of Unicode math-alphanumeric variants (bold, italic,
//! fraktur, script, double-struck, ...) into JSON keyed by base character:
//! - `{ base: { variant: { "char": glyph, "delta": hex } } }`
//! - parser-independent input via the [`document`] traits
//! - FFI interface returning the JSON to C/C++ callers

pub mod document;
pub mod error;
pub mod extractors;
pub mod ffi;

pub use document::*;
pub use error::{Error, Result};
pub use extractors::*;
pub use ffi::*;
