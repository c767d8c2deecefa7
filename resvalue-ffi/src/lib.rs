//! C ABI bridge for resvalue-codec.
//!
//! Exposes the escaper, unescaper and escape detector through `extern "C"`
//! so that tooling in other languages can share one implementation.
//! Strings cross the boundary as pointer + length (NOT null-terminated) and
//! results are written into caller-provided buffers.

use std::slice;
use std::str;

use resvalue_codec::{IndexErrorKind, UnescapeOptions};

// ---------------------------------------------------------------------------
// Error codes (negative = error, 0 = success, positive = bytes written)
// ---------------------------------------------------------------------------

pub const RESVALUE_OK: i32 = 0;
pub const RESVALUE_ERR_INVALID_UTF8: i32 = -1;
pub const RESVALUE_ERR_BUFFER_TOO_SMALL: i32 = -2;
pub const RESVALUE_ERR_INDEX_OUT_OF_BOUNDS: i32 = -3;
pub const RESVALUE_ERR_NOT_CHAR_BOUNDARY: i32 = -4;
pub const RESVALUE_ERR_OUTPUT_TOO_LARGE: i32 = -5;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Borrow a caller string as `&str`.
///
/// # Safety
/// - If `len > 0`, `ptr` must point to `len` readable bytes.
unsafe fn input_str<'a>(ptr: *const u8, len: usize) -> Result<&'a str, i32> {
    if ptr.is_null() || len == 0 {
        return Ok("");
    }
    let bytes = unsafe { slice::from_raw_parts(ptr, len) };
    str::from_utf8(bytes).map_err(|_| RESVALUE_ERR_INVALID_UTF8)
}

/// Borrow a caller buffer as `&mut [u8]`.
///
/// # Safety
/// - If `len > 0`, `ptr` must point to `len` writeable bytes.
unsafe fn output_buf<'a>(ptr: *mut u8, len: usize) -> &'a mut [u8] {
    if ptr.is_null() || len == 0 {
        &mut []
    } else {
        unsafe { slice::from_raw_parts_mut(ptr, len) }
    }
}

fn written_to_code(written: Option<usize>) -> i32 {
    match written {
        Some(n) => i32::try_from(n).unwrap_or(RESVALUE_ERR_OUTPUT_TOO_LARGE),
        None => RESVALUE_ERR_BUFFER_TOO_SMALL,
    }
}

fn len_to_code(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::from(RESVALUE_ERR_OUTPUT_TOO_LARGE))
}

fn index_error_to_code(kind: IndexErrorKind) -> i32 {
    match kind {
        IndexErrorKind::OutOfBounds => RESVALUE_ERR_INDEX_OUT_OF_BOUNDS,
        IndexErrorKind::NotCharBoundary => RESVALUE_ERR_NOT_CHAR_BOUNDARY,
    }
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape a raw value into a buffer.
///
/// # Safety
/// - `input_ptr` must point to a UTF-8 byte array of `input_len` bytes.
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
///
/// Returns bytes written on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn resvalue_escape(
    input_ptr: *const u8,
    input_len: usize,
    buf_ptr: *mut u8,
    buf_len: usize,
) -> i32 {
    let input = match unsafe { input_str(input_ptr, input_len) } {
        Ok(s) => s,
        Err(code) => return code,
    };
    let buf = unsafe { output_buf(buf_ptr, buf_len) };
    written_to_code(resvalue_codec::escape_into(input, buf))
}

/// Size in bytes of the escaped form of the input.
///
/// # Safety
/// - `input_ptr` must point to a UTF-8 byte array of `input_len` bytes.
///
/// Returns the size on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn resvalue_escaped_len(input_ptr: *const u8, input_len: usize) -> i64 {
    match unsafe { input_str(input_ptr, input_len) } {
        Ok(s) => len_to_code(resvalue_codec::escaped_len(s)),
        Err(code) => i64::from(code),
    }
}

// ---------------------------------------------------------------------------
// Unescaping
// ---------------------------------------------------------------------------

/// Unescape resource text into a buffer.
///
/// `resolve_entities` and `trim` are booleans (0 = false, anything else =
/// true). A buffer of `input_len` bytes is always large enough.
///
/// # Safety
/// - `input_ptr` must point to a UTF-8 byte array of `input_len` bytes.
/// - `buf_ptr` must point to a writeable buffer of at least `buf_len` bytes.
///
/// Returns bytes written on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn resvalue_unescape(
    input_ptr: *const u8,
    input_len: usize,
    resolve_entities: u8,
    trim: u8,
    buf_ptr: *mut u8,
    buf_len: usize,
) -> i32 {
    let input = match unsafe { input_str(input_ptr, input_len) } {
        Ok(s) => s,
        Err(code) => return code,
    };
    let buf = unsafe { output_buf(buf_ptr, buf_len) };
    let options = UnescapeOptions::new(resolve_entities != 0, trim != 0);
    written_to_code(resvalue_codec::unescape_into(input, options, buf))
}

/// Size in bytes of the unescaped form of the input.
///
/// # Safety
/// - `input_ptr` must point to a UTF-8 byte array of `input_len` bytes.
///
/// Returns the size on success, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn resvalue_unescaped_len(
    input_ptr: *const u8,
    input_len: usize,
    resolve_entities: u8,
    trim: u8,
) -> i64 {
    match unsafe { input_str(input_ptr, input_len) } {
        Ok(s) => {
            let options = UnescapeOptions::new(resolve_entities != 0, trim != 0);
            len_to_code(resvalue_codec::unescaped_len(s, options))
        }
        Err(code) => i64::from(code),
    }
}

// ---------------------------------------------------------------------------
// Escape detection
// ---------------------------------------------------------------------------

/// Report whether the character at byte offset `index` is escaped.
///
/// `index` may equal `input_len`.
///
/// # Safety
/// - `input_ptr` must point to a UTF-8 byte array of `input_len` bytes.
///
/// Returns 1 if escaped, 0 if not, negative error code on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn resvalue_is_escaped(
    input_ptr: *const u8,
    input_len: usize,
    index: usize,
) -> i32 {
    let input = match unsafe { input_str(input_ptr, input_len) } {
        Ok(s) => s,
        Err(code) => return code,
    };
    match resvalue_codec::try_is_escaped(input, index) {
        Ok(escaped) => i32::from(escaped),
        Err(e) => index_error_to_code(e.kind),
    }
}
