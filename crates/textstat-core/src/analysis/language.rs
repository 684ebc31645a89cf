//! Toy language detection.
//!
//! Counts occurrences of ten common English and ten common Spanish
//! function words and reports whichever list scores higher. This is a
//! deliberately naive heuristic, kept at word-list strength; it is not a
//! language identifier and reports low confidence accordingly.

use std::cmp::Ordering;

use crate::word_lists::{ENGLISH_MARKERS, SPANISH_MARKERS};

use super::reports::{Confidence, Language, LanguageDetection};

/// Classify the text's language from marker-word counts.
#[tracing::instrument(skip_all)]
pub fn detect_language(words: &[String]) -> LanguageDetection {
    let english = words
        .iter()
        .filter(|w| ENGLISH_MARKERS.contains(w.as_str()))
        .count();
    let spanish = words
        .iter()
        .filter(|w| SPANISH_MARKERS.contains(w.as_str()))
        .count();

    match english.cmp(&spanish) {
        Ordering::Greater => LanguageDetection {
            detected_language: Language::English,
            confidence: Confidence::Low,
        },
        Ordering::Less => LanguageDetection {
            detected_language: Language::Spanish,
            confidence: Confidence::Low,
        },
        Ordering::Equal => LanguageDetection {
            detected_language: Language::Unknown,
            confidence: Confidence::VeryLow,
        },
    }
}
