//! FFI interface for C/C++ interop
//!
//! Provides C-compatible functions for extracting the variant table from HTML.
//! The table is returned as a JSON string.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::error::Result;
use crate::extractors::{extract, HtmlDocument, TableLayout};

/// Result struct returned to C/C++
/// Both pointers are owned by Rust and must be freed via free_extraction_result
#[repr(C)]
pub struct ExtractionResultFFI {
    /// JSON-serialized variant table (null-terminated)
    pub json_ptr: *mut c_char,
    /// Error message if extraction failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Extract the variant table from HTML using the default table layout.
///
/// # Arguments
/// * `html_ptr` - Pointer to HTML content (UTF-8, not necessarily null-terminated)
/// * `html_len` - Length of HTML content in bytes
///
/// # Returns
/// ExtractionResultFFI with either json_ptr set (success) or error_ptr set (failure)
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - Caller must free the result via `free_extraction_result`
#[no_mangle]
pub unsafe extern "C" fn extract_variants_ffi(
    html_ptr: *const c_char,
    html_len: usize,
) -> ExtractionResultFFI {
    let html = match html_from_raw(html_ptr, html_len) {
        Ok(s) => s,
        Err(_) => return make_error_result("Invalid UTF-8 in HTML"),
    };

    make_result(HtmlDocument::parse(html).and_then(|document| extract(&document)))
}

/// Extract the variant table using a custom layout.
///
/// # Arguments
/// * `layout_json` - JSON-serialized TableLayout (null-terminated); missing fields use defaults
///
/// # Safety
/// Same as extract_variants_ffi, and `layout_json` must be a valid null-terminated C string
#[no_mangle]
pub unsafe extern "C" fn extract_variants_with_layout_ffi(
    html_ptr: *const c_char,
    html_len: usize,
    layout_json: *const c_char,
) -> ExtractionResultFFI {
    let html = match html_from_raw(html_ptr, html_len) {
        Ok(s) => s,
        Err(_) => return make_error_result("Invalid UTF-8 in HTML"),
    };

    let layout_str = if layout_json.is_null() {
        return make_error_result("Layout JSON is null");
    } else {
        match CStr::from_ptr(layout_json).to_str() {
            Ok(s) => s,
            Err(_) => return make_error_result("Invalid UTF-8 in layout JSON"),
        }
    };

    let layout: TableLayout = match serde_json::from_str(layout_str) {
        Ok(l) => l,
        Err(e) => {
            return make_error_result(&format!("Failed to parse layout JSON: {}", e));
        }
    };

    make_result(
        HtmlDocument::parse_with_layout(html, &layout).and_then(|document| extract(&document)),
    )
}

/// Free an ExtractionResultFFI returned by the extraction functions
///
/// # Safety
/// - `result` must have been returned by `extract_variants_ffi` or
///   `extract_variants_with_layout_ffi`
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_extraction_result(result: ExtractionResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

// Null or empty input is an empty document
unsafe fn html_from_raw<'a>(html_ptr: *const c_char, html_len: usize) -> Result<&'a str> {
    if html_ptr.is_null() || html_len == 0 {
        return Ok("");
    }
    let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
    Ok(std::str::from_utf8(slice)?)
}

fn make_result(json: Result<String>) -> ExtractionResultFFI {
    match json {
        Ok(json) => match CString::new(json) {
            Ok(cstr) => ExtractionResultFFI {
                json_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result JSON contains null bytes"),
        },
        Err(e) => make_error_result(&e.to_string()),
    }
}

// Helper to create error result
fn make_error_result(msg: &str) -> ExtractionResultFFI {
    let error_cstr = CString::new(msg).unwrap_or_else(|_| CString::from(c"Unknown error"));
    ExtractionResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}
