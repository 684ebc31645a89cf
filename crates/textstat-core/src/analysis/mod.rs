//! Composite text statistics.
//!
//! [`analyze_text`] computes a [`TextReport`] in one pass over the input:
//! basic counts, word statistics, character classes, a readability
//! estimate, and — when requested via [`AnalyzeOptions`] — toy language
//! and sentiment classification. [`render_report`] turns the result into
//! a human-readable report.
//!
//! Every section is a pure function in its own module; callers can also
//! invoke sections individually.

pub mod basic;
pub mod characters;
pub mod language;
pub mod readability;
pub mod render;
pub mod reports;
pub mod sentiment;
pub mod words;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use render::render_report;
pub use reports::TextReport;

use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

/// Default number of entries in `most_common_words`.
pub const DEFAULT_TOP_WORDS: usize = 5;

/// Options controlling one analysis call.
///
/// All fields have defaults, so `AnalyzeOptions::default()` runs the
/// four mandatory sections and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeOptions {
    /// Number of entries in `most_common_words`.
    pub top_words_count: usize,
    /// Run the toy language detector.
    pub include_language_detection: bool,
    /// Run the toy sentiment classifier.
    pub include_sentiment: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            top_words_count: DEFAULT_TOP_WORDS,
            include_language_detection: false,
            include_sentiment: false,
        }
    }
}

impl AnalyzeOptions {
    /// Build options from a loosely-typed mapping.
    ///
    /// Unrecognized keys are ignored. A `top_words_count` that is
    /// missing, not an integer, or not positive silently falls back to
    /// the default; the boolean flags fall back to `false` when missing
    /// or mistyped. Malformed configuration never fails an analysis.
    pub fn from_value(value: &Value) -> Self {
        let mut options = Self::default();
        let Some(map) = value.as_object() else {
            return options;
        };

        if let Some(n) = map.get("top_words_count").and_then(Value::as_u64)
            && n > 0
        {
            options.top_words_count = n as usize;
        }
        if let Some(flag) = map.get("include_language_detection").and_then(Value::as_bool) {
            options.include_language_detection = flag;
        }
        if let Some(flag) = map.get("include_sentiment").and_then(Value::as_bool) {
            options.include_sentiment = flag;
        }

        options
    }
}

/// Analyze a text and return its statistics report.
///
/// Returns [`AnalysisError::EmptyInput`] for the empty string; any other
/// input yields a report with the four mandatory sections. Readability
/// is computed only when the text has at least one word and one
/// sentence, so no division ever sees a zero divisor.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_text(text: &str, options: &AnalyzeOptions) -> AnalysisResult<TextReport> {
    if text.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let sentences = text::split_sentences(text);
    let paragraphs = text::split_paragraphs(text);
    let word_list = text::extract_words(text);

    let basic_stats = basic::analyze_basic(text, &sentences, &paragraphs);
    let word_analysis = words::analyze_words(&word_list, options.top_words_count);
    let character_analysis = characters::analyze_characters(text);

    let readability = match &word_analysis.stats {
        Some(stats) if basic_stats.total_sentences > 0 => Some(readability::analyze_readability(
            word_analysis.total_words,
            basic_stats.total_sentences,
            stats.average_word_length,
        )),
        _ => None,
    };

    let language_detection = options
        .include_language_detection
        .then(|| language::detect_language(&word_list));
    let sentiment_analysis = options
        .include_sentiment
        .then(|| sentiment::analyze_sentiment(&word_list));

    Ok(TextReport {
        basic_stats,
        word_analysis,
        character_analysis,
        readability,
        language_detection,
        sentiment_analysis,
    })
}
