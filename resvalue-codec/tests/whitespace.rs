//! Whitespace class used for trimming and quoting decisions.

use resvalue_codec::is_resource_whitespace;

#[test]
fn ascii_whitespace() {
    for c in [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}', '\u{1C}', '\u{1F}'] {
        assert!(is_resource_whitespace(c), "{c:?}");
    }
}

#[test]
fn non_breaking_spaces_are_content() {
    for c in ['\u{A0}', '\u{2007}', '\u{202F}', '\u{85}'] {
        assert!(!is_resource_whitespace(c), "{c:?}");
    }
}

#[test]
fn unicode_separators() {
    for c in ['\u{2003}', '\u{2028}', '\u{2029}', '\u{3000}'] {
        assert!(is_resource_whitespace(c), "{c:?}");
    }
}

#[test]
fn ordinary_characters() {
    for c in ['a', '\\', '"', '@', '\0', 'é'] {
        assert!(!is_resource_whitespace(c), "{c:?}");
    }
}
