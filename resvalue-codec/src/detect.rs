use crate::consts::BACKSLASH;
use crate::error::IndexError;

/// Returns `true` if the character at byte offset `index` is escaped, i.e.
/// preceded by an odd-length run of backslashes.
///
/// Only the bytes before `index` are inspected, so `index == s.len()` is
/// valid and asks whether a character appended to `s` would be escaped.
///
/// # Panics
///
/// Panics if `index > s.len()` or `index` is not on a char boundary. Use
/// [`try_is_escaped`] to get an [`IndexError`] instead.
#[must_use]
pub fn is_escaped(s: &str, index: usize) -> bool {
    match try_is_escaped(s, index) {
        Ok(escaped) => escaped,
        Err(e) => panic!("is_escaped: {e}"),
    }
}

/// Checked form of [`is_escaped`].
pub fn try_is_escaped(s: &str, index: usize) -> Result<bool, IndexError> {
    if index > s.len() {
        return Err(IndexError::out_of_bounds(index, s.len()));
    }
    if !s.is_char_boundary(index) {
        return Err(IndexError::not_char_boundary(index, s.len()));
    }
    Ok(escaped_at(s.as_bytes(), index))
}

/// Parity of the backslash run ending just before `index`.
///
/// `0x5C` never occurs inside a multi-byte UTF-8 sequence, so counting bytes
/// counts code points. Caller guarantees `index <= bytes.len()`.
pub(crate) fn escaped_at(bytes: &[u8], index: usize) -> bool {
    let run = bytes[..index]
        .iter()
        .rev()
        .take_while(|&&b| b == BACKSLASH)
        .count();
    run % 2 == 1
}
