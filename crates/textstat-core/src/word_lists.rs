//! Fixed reference word lists.
//!
//! Toy lexicons for the language and sentiment heuristics, plus the
//! constant tables used by password validation. All tables are read-only
//! data initialized once; none of them are tuned or extended at runtime.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Ten common English function words used by the toy language detector.
pub static ENGLISH_MARKERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["the", "and", "to", "of", "a", "in", "is", "it", "you", "that"]
        .into_iter()
        .collect()
});

/// Ten common Spanish function words used by the toy language detector.
pub static SPANISH_MARKERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["el", "la", "de", "que", "y", "a", "en", "un", "es", "se"]
        .into_iter()
        .collect()
});

/// Positive sentiment markers.
pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good",
        "great",
        "excellent",
        "amazing",
        "wonderful",
        "fantastic",
        "love",
        "happy",
    ]
    .into_iter()
    .collect()
});

/// Negative sentiment markers.
pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "bad",
        "terrible",
        "awful",
        "hate",
        "sad",
        "angry",
        "disappointed",
        "horrible",
    ]
    .into_iter()
    .collect()
});

/// Characters that satisfy the password special-character requirement.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Substrings a password may not contain under the default policy.
pub const DEFAULT_FORBIDDEN_WORDS: &[&str] = &["password", "123456", "qwerty"];

/// Keyboard rows scanned for three-character patterns.
pub const KEYBOARD_ROWS: &[&str] = &["qwertyuiop", "asdfghjkl", "zxcvbnm", "1234567890"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicons_have_expected_sizes() {
        assert_eq!(ENGLISH_MARKERS.len(), 10);
        assert_eq!(SPANISH_MARKERS.len(), 10);
        assert_eq!(POSITIVE_WORDS.len(), 8);
        assert_eq!(NEGATIVE_WORDS.len(), 8);
    }

    #[test]
    fn a_is_both_english_and_spanish() {
        // The toy lexicons intentionally overlap on "a".
        assert!(ENGLISH_MARKERS.contains("a"));
        assert!(SPANISH_MARKERS.contains("a"));
    }
}
