/// Returns `true` for characters that are trimmed from the edges of a value.
///
/// Unicode space, line and paragraph separators count, except the
/// non-breaking ones (U+00A0, U+2007, U+202F), which are content. The ASCII
/// controls TAB, LF, VT, FF, CR and the separators U+001C..=U+001F count as
/// well. U+0085 does not.
#[must_use]
pub fn is_resource_whitespace(c: char) -> bool {
    match c {
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{1C}'..='\u{1F}' => true,
        '\u{A0}' | '\u{2007}' | '\u{202F}' | '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

