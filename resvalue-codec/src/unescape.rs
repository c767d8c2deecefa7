use alloc::borrow::Cow;
use alloc::string::String;

use crate::consts::{BACKSLASH, ENTITY_AMP, ENTITY_LT, QUOTE};
use crate::detect::escaped_at;
use crate::sink::{LenCounter, Sink, SliceWriter};
use crate::whitespace::is_resource_whitespace;

/// Decoding policy for [`unescape_with`].
///
/// Attribute values and text nodes are usually read with different flags,
/// so the policy is passed per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnescapeOptions {
    /// Decode the character references `&lt;` and `&amp;`.
    pub resolve_entities: bool,
    /// Trim edge whitespace and treat bare `"` as delimiters.
    pub trim: bool,
}

impl UnescapeOptions {
    #[must_use]
    pub const fn new(resolve_entities: bool, trim: bool) -> Self {
        Self {
            resolve_entities,
            trim,
        }
    }
}

/// Byte range of `s` that survives trimming.
///
/// Trimming looks at the raw text, before any decoding. A quote at either
/// edge stops it, which is what keeps quoted whitespace intact. Whitespace
/// right after the range is kept when it is escaped (`foo\ `).
fn trimmed_range(s: &str) -> (usize, usize) {
    let start = s.len() - s.trim_start_matches(is_resource_whitespace).len();
    let mut end = start + s[start..].trim_end_matches(is_resource_whitespace).len();
    if end < s.len() && escaped_at(s.as_bytes(), end) {
        end += s[end..].chars().next().map_or(0, char::len_utf8);
    }
    (start, end)
}

/// Decodes the escape starting at the backslash at `i`.
///
/// `\n` and `\t` map to control characters, any other escaped character
/// stands for itself. Returns `None` for a lone trailing backslash.
fn escape_sequence(body: &str, i: usize) -> Option<(&str, usize)> {
    let next = body[i + 1..].chars().next()?;
    let width = next.len_utf8();
    let decoded = match next {
        'n' => "\n",
        't' => "\t",
        _ => &body[i + 1..i + 1 + width],
    };
    Some((decoded, 1 + width))
}

fn entity(rest: &str) -> Option<(&'static str, usize)> {
    if rest.starts_with(ENTITY_LT) {
        Some(("<", ENTITY_LT.len()))
    } else if rest.starts_with(ENTITY_AMP) {
        Some(("&", ENTITY_AMP.len()))
    } else {
        None
    }
}

fn unescape_to<S: Sink>(s: &str, options: UnescapeOptions, out: &mut S) -> Option<()> {
    let (start, end) = if options.trim {
        trimmed_range(s)
    } else {
        (0, s.len())
    };
    let body = &s[start..end];
    let bytes = body.as_bytes();

    let mut run = 0;
    let mut i = 0;
    while i < bytes.len() {
        let step: Option<(&str, usize)> = match bytes[i] {
            BACKSLASH => escape_sequence(body, i),
            QUOTE if options.trim => Some(("", 1)),
            b'&' if options.resolve_entities => entity(&body[i..]),
            _ => None,
        };
        match step {
            Some((decoded, consumed)) => {
                out.push_str(&body[run..i])?;
                out.push_str(decoded)?;
                i += consumed;
                run = i;
            }
            None => i += 1,
        }
    }
    out.push_str(&body[run..])
}

/// Returns `true` if `s` contains anything [`unescape_with`] may rewrite
/// under `options`: edge whitespace to trim, a backslash, a quote (when
/// trimming) or an ampersand (when resolving entities).
#[must_use]
pub fn needs_unescape(s: &str, options: UnescapeOptions) -> bool {
    if options.trim && trimmed_range(s) != (0, s.len()) {
        return true;
    }
    s.bytes().any(|b| {
        b == BACKSLASH
            || (options.trim && b == QUOTE)
            || (options.resolve_entities && b == b'&')
    })
}

/// Unescape resource text back into the raw value.
///
/// Backslash escapes are always decoded. `resolve_entities` additionally
/// decodes `&lt;` and `&amp;`. `trim` removes unescaped whitespace at both
/// edges of the text and drops bare double quotes, so whitespace enclosed in
/// quotes survives. Without `trim`, quotes are ordinary characters.
#[must_use]
pub fn unescape(s: &str, resolve_entities: bool, trim: bool) -> Cow<'_, str> {
    unescape_with(s, UnescapeOptions::new(resolve_entities, trim))
}

/// [`unescape`] with the policy given as [`UnescapeOptions`].
///
/// Returns the input unchanged (borrowed) when there is nothing to decode.
#[must_use]
pub fn unescape_with(s: &str, options: UnescapeOptions) -> Cow<'_, str> {
    if !needs_unescape(s, options) {
        return Cow::Borrowed(s);
    }
    // decoding never grows the text
    let mut out = String::with_capacity(s.len());
    let _ = unescape_to(s, options, &mut out);
    Cow::Owned(out)
}

/// Unescape resource text into the output buffer.
///
/// Returns the number of bytes written, or `None` if `out` is too small.
/// A buffer of `s.len()` bytes is always large enough.
pub fn unescape_into(s: &str, options: UnescapeOptions, out: &mut [u8]) -> Option<usize> {
    let mut w = SliceWriter::new(out);
    unescape_to(s, options, &mut w)?;
    Some(w.written())
}

/// Exact byte length of the unescaped form of `s`.
#[must_use]
pub fn unescaped_len(s: &str, options: UnescapeOptions) -> usize {
    let mut counter = LenCounter::default();
    let _ = unescape_to(s, options, &mut counter);
    counter.0
}
