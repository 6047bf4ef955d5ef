//! Text normalization for fuzzy comparison.
//!
//! Normalization lowercases the text and deletes every character that is not a
//! word character (letter, mark, digit, connector such as `_`) or whitespace.
//! Nothing is inserted in place of deleted characters, and whitespace is left
//! exactly as it was, runs included.
//!
//! ```
//! use phrasebook::analysis::normalize;
//!
//! assert_eq!(normalize("Hello, World!"), "hello world");
//! assert_eq!(normalize("  What's up?  "), "  whats up  ");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PhrasebookError, Result};

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"));

/// Lowercase `text` and strip everything except word characters and whitespace.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    PUNCTUATION.replace_all(&lowered, "").into_owned()
}

/// Normalize raw bytes, rejecting anything that is not UTF-8 text.
pub fn normalize_bytes(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        PhrasebookError::invalid_input(format!("input must be UTF-8 text: {e}"))
    })?;
    Ok(normalize(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello world");
        assert_eq!(normalize("Hello!!!"), "hello");
        assert_eq!(normalize("snake_case-ok?"), "snake_caseok");
    }

    #[test]
    fn test_normalize_preserves_whitespace() {
        assert_eq!(normalize("  What's up?  "), "  whats up  ");
        assert_eq!(normalize("a\t\tb\nc"), "a\t\tb\nc");
    }

    #[test]
    fn test_normalize_keeps_unicode_letters_and_digits() {
        assert_eq!(normalize("Привет, Мир 2024!"), "привет мир 2024");
        assert_eq!(normalize("Café."), "café");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!.,;"), "");
    }

    #[test]
    fn test_normalize_bytes() {
        assert_eq!(normalize_bytes(b"Hi, there").unwrap(), "hi there");

        let result = normalize_bytes(&[0x68, 0x69, 0xff, 0xfe]);
        assert!(matches!(result, Err(PhrasebookError::InvalidInput(_))));
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(text in "[ -~À-ÿ\t\n]{0,40}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_leaves_only_word_chars_and_whitespace(text in "[ -~\t\n]{0,60}") {
            let normalized = normalize(&text);
            prop_assert!(normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c.is_whitespace()));
        }
    }
}
