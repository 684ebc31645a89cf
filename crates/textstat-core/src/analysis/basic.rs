//! Basic character, sentence, and paragraph counts.

use super::reports::BasicStats;

/// Count characters, sentences, and paragraphs.
///
/// `total_characters_no_spaces` excludes only the space character;
/// tabs and newlines still count, matching the whitespace handling of
/// the character-analysis section where all whitespace is classified.
#[tracing::instrument(skip_all)]
pub fn analyze_basic(text: &str, sentences: &[String], paragraphs: &[String]) -> BasicStats {
    BasicStats {
        total_characters: text.chars().count(),
        total_characters_no_spaces: text.chars().filter(|&c| c != ' ').count(),
        total_sentences: sentences.len(),
        total_paragraphs: paragraphs.len(),
    }
}
