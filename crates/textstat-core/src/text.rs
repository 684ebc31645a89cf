//! Text splitting utilities.
//!
//! Provides sentence splitting, word extraction, and paragraph splitting
//! for use by the analysis sections.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for runs of sentence-ending punctuation.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Regex for a maximal run of ASCII letters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("valid regex"));

/// Split text into sentences on runs of `.`, `!`, `?`.
///
/// The text is trimmed before splitting and empty or whitespace-only
/// fragments are discarded. A terminator run of any length counts as a
/// single break, so `"Wait... what?"` yields two sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text.trim())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract words as maximal runs of ASCII letters, lower-cased.
///
/// Apostrophes and hyphens are separators: `"it's"` yields `it` and `s`.
pub fn extract_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
