//! URI component encoding with browser `encodeURIComponent` semantics.
//!
//! Share targets are composed by concatenating already-encoded page fields, so
//! the encoded form must match what a browser produces byte for byte.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped by `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a URL query component.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Decode a percent-encoded component.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; a share action
/// must never fail on odd metadata.
pub fn decode_component(s: &str) -> Cow<'_, str> {
    percent_decode_str(s).decode_utf8_lossy()
}

/// First `max` characters of `s` (by `char`, never splitting a code point).
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_reserved() {
        assert_eq!(encode_component("https://ex.com"), "https%3A%2F%2Fex.com");
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("x?y#z"), "x%3Fy%23z");
    }

    #[test]
    fn test_encode_unreserved_untouched() {
        assert_eq!(encode_component("Az09-_.!~*'()"), "Az09-_.!~*'()");
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_decode_inverse() {
        let raw = "Hello, world: 100% \"ok\" – café";
        assert_eq!(decode_component(&encode_component(raw)), raw);
    }

    #[test]
    fn test_decode_lossy() {
        assert_eq!(decode_component("%FF"), "\u{FFFD}");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hi", 10), "hi");
        assert_eq!(truncate_chars("ééé", 2), "éé");
        assert_eq!(truncate_chars("", 5), "");
    }
}
