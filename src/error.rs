//! Error types for variant table extraction

use thiserror::Error;

/// Errors surfaced by the adapter, delta parsing and JSON encoding.
///
/// Malformed table rows are never errors; they are skipped during extraction.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid delta {0:?}: not a hexadecimal codepoint offset")]
    InvalidDelta(String),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
