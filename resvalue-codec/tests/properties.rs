//! Property tests for the round-trip and parity laws.

use proptest::prelude::*;
use resvalue_codec::{
    UnescapeOptions, escape, escaped_len, is_escaped, is_resource_whitespace, unescape,
    unescaped_len,
};

/// Mirrors the escaper's choice of the quoted form.
fn takes_quoted_form(raw: &str) -> bool {
    let trimmed = raw.trim_matches(is_resource_whitespace);
    !trimmed.is_empty() && trimmed.len() != raw.len()
}

fn trailing_backslashes(prefix: &str) -> usize {
    prefix.chars().rev().take_while(|&c| c == '\\').count()
}

/// Strings dense in the characters the transforms care about.
fn resource_like() -> impl Strategy<Value = String> {
    "[\\\\a\"'@?&<; \t\nlt]{0,24}"
}

proptest! {
    #[test]
    fn escaped_form_round_trips_without_trim(raw in any::<String>()) {
        prop_assume!(!takes_quoted_form(&raw));
        let text = escape(&raw);
        prop_assert_eq!(unescape(&text, true, false), raw.as_str());
    }

    #[test]
    fn quoted_form_round_trips_with_trim(pad in "[ \t\n]{1,3}", body in any::<String>()) {
        let raw = format!("{pad}x{body}");
        prop_assert!(takes_quoted_form(&raw));
        let text = escape(&raw);
        prop_assert!(text.starts_with('"') && text.ends_with('"'));
        prop_assert_eq!(unescape(&text, false, true), raw.as_str());
    }

    #[test]
    fn round_trips_on_dense_input(raw in resource_like()) {
        let text = escape(&raw);
        let back = if takes_quoted_form(&raw) {
            unescape(&text, false, true)
        } else {
            unescape(&text, true, false)
        };
        prop_assert_eq!(back, raw.as_str());
    }

    #[test]
    fn parity_matches_backslash_run(s in resource_like()) {
        for (i, _) in s.char_indices().chain(core::iter::once((s.len(), ' '))) {
            prop_assert_eq!(is_escaped(&s, i), trailing_backslashes(&s[..i]) % 2 == 1);
        }
    }

    #[test]
    fn lengths_are_exact(s in resource_like(), resolve_entities: bool, trim: bool) {
        let options = UnescapeOptions::new(resolve_entities, trim);
        prop_assert_eq!(escaped_len(&s), escape(&s).len());
        prop_assert_eq!(unescaped_len(&s, options), unescape(&s, resolve_entities, trim).len());
        prop_assert!(unescaped_len(&s, options) <= s.len());
    }

    #[test]
    fn plain_text_is_untouched(s in "[a-zA-Z0-9 .,!]{0,32}") {
        prop_assert_eq!(unescape(&s, true, false), s.as_str());
    }
}
