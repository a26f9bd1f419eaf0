//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using unresume from other
//! languages such as C#, Python, and Node.js. Every function returns JSON.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::render::{self, JsonFormat};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct UnresumeResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `unresume_free_string`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `unresume_free_string`.
    pub error: *mut c_char,
}

impl UnresumeResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

fn json_format(pretty: bool) -> JsonFormat {
    if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    }
}

/// Borrow a C string as UTF-8, naming the argument in the error.
unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, UnresumeResult> {
    if ptr.is_null() {
        return Err(UnresumeResult::error(format!("{} cannot be null", what)));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| UnresumeResult::error(format!("Invalid UTF-8 {}", what.to_lowercase())))
}

/// Extract a record from résumé text as a JSON object.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unresume_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unresume_extract_row(text: *const c_char, pretty: bool) -> UnresumeResult {
    let text = match read_str(text, "Text") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let record = crate::extract_row(text);
    match render::record_to_json(&record, json_format(pretty)) {
        Ok(json) => UnresumeResult::success(json),
        Err(e) => UnresumeResult::error(e.to_string()),
    }
}

/// Read a UTF-8 text file and extract its record as a JSON object.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unresume_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unresume_extract_file(path: *const c_char, pretty: bool) -> UnresumeResult {
    let path = match read_str(path, "Path") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let json = crate::extract_file(path)
        .and_then(|record| render::record_to_json(&record, json_format(pretty)));
    match json {
        Ok(json) => UnresumeResult::success(json),
        Err(e) => UnresumeResult::error(e.to_string()),
    }
}

/// Split résumé text into sections, returned as a compact JSON object keyed
/// by section name.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unresume_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unresume_split_sections(text: *const c_char) -> UnresumeResult {
    let text = match read_str(text, "Text") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let sections = crate::split_sections(text);
    match render::sections_to_json(&sections, JsonFormat::Compact) {
        Ok(json) => UnresumeResult::success(json),
        Err(e) => UnresumeResult::error(e.to_string()),
    }
}

/// Free a result returned by any unresume function.
///
/// # Safety
///
/// The `result` must have been returned by an unresume function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn unresume_free_result(result: UnresumeResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by unresume.
///
/// # Safety
///
/// The `ptr` must have been allocated by unresume.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn unresume_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the unresume library.
///
/// # Safety
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn unresume_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
