use alloc::borrow::Cow;
use alloc::string::String;

use crate::consts::{ENTITY_AMP, ENTITY_LT};
use crate::sink::{LenCounter, Sink, SliceWriter, write_mapped};
use crate::whitespace::is_resource_whitespace;

/// The two output forms of the escaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    /// Whole value wrapped in `"…"`; only `"` and `\` are escaped inside.
    Quoted,
    /// Character-by-character escaping, no surrounding quotes.
    Escaped,
}

/// A value is quoted when it has content and whitespace at either edge.
/// All-whitespace values are character-escaped instead.
fn form_of(raw: &str) -> Form {
    let trimmed = raw.trim_matches(is_resource_whitespace);
    if !trimmed.is_empty() && trimmed.len() != raw.len() {
        Form::Quoted
    } else {
        Form::Escaped
    }
}

fn escape_byte(pos: usize, b: u8) -> Option<&'static str> {
    match b {
        b'@' if pos == 0 => Some("\\@"),
        b'?' if pos == 0 => Some("\\?"),
        b'\\' => Some("\\\\"),
        b'\n' => Some("\\n"),
        b'\t' => Some("\\t"),
        b'\'' => Some("\\'"),
        b'"' => Some("\\\""),
        b'<' => Some(ENTITY_LT),
        b'&' => Some(ENTITY_AMP),
        _ => None,
    }
}

fn quote_byte(_pos: usize, b: u8) -> Option<&'static str> {
    match b {
        b'\\' => Some("\\\\"),
        b'"' => Some("\\\""),
        _ => None,
    }
}

fn escape_to<S: Sink>(raw: &str, out: &mut S) -> Option<()> {
    match form_of(raw) {
        Form::Quoted => {
            out.push_str("\"")?;
            write_mapped(raw, out, quote_byte)?;
            out.push_str("\"")
        }
        Form::Escaped => write_mapped(raw, out, escape_byte),
    }
}

/// Returns `true` if [`escape`] would change the value.
#[must_use]
pub fn needs_escape(raw: &str) -> bool {
    match form_of(raw) {
        Form::Quoted => true,
        Form::Escaped => raw
            .bytes()
            .enumerate()
            .any(|(pos, b)| escape_byte(pos, b).is_some()),
    }
}

/// Escape a raw value for storage in a value resource file.
///
/// Values with leading or trailing whitespace around real content are
/// wrapped in double quotes, escaping only `"` and `\` inside. Everything
/// else is escaped per character: `\`, newline, tab, `'` and `"` get a
/// backslash escape, `<` and `&` become `&lt;` and `&amp;`, and a leading
/// `@` or `?` is prefixed with a backslash.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
#[must_use]
pub fn escape(raw: &str) -> Cow<'_, str> {
    if !needs_escape(raw) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(escaped_len(raw));
    // a String sink never runs out of room
    let _ = escape_to(raw, &mut out);
    Cow::Owned(out)
}

/// Escape a raw value into the output buffer.
///
/// Returns the number of bytes written, or `None` if `out` is too small.
pub fn escape_into(raw: &str, out: &mut [u8]) -> Option<usize> {
    let mut w = SliceWriter::new(out);
    escape_to(raw, &mut w)?;
    Some(w.written())
}

/// Exact byte length of the escaped form of `raw`.
#[must_use]
pub fn escaped_len(raw: &str) -> usize {
    let mut counter = LenCounter::default();
    let _ = escape_to(raw, &mut counter);
    counter.0
}
