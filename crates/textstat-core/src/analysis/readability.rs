//! Approximate Flesch reading-ease scoring.
//!
//! Formula: `206.835 − 1.015 × (words/sentences) − 84.6 × (avg word length × 0.7)`,
//! clamped to `[0, 100]`.
//!
//! The `avg word length × 0.7` term stands in for a syllable count. It is
//! not the standard Flesch formula; the constant is kept as-is so scores
//! stay comparable with earlier reports computed the same way.

use super::reports::{Difficulty, ReadabilityStats};

/// Score readability from word and sentence totals.
///
/// Callers must ensure `words > 0` and `sentences > 0`; the section is
/// omitted from the report otherwise.
#[tracing::instrument(skip_all)]
pub fn analyze_readability(
    words: usize,
    sentences: usize,
    average_word_length: f64,
) -> ReadabilityStats {
    let average_words_per_sentence = words as f64 / sentences as f64;
    let syllable_proxy = average_word_length * 0.7;

    // Evaluated term by term, not via mul_add, to keep scores identical
    // to earlier reports down to float rounding.
    #[allow(clippy::suboptimal_flops)]
    let raw = 206.835 - (1.015 * average_words_per_sentence) - (84.6 * syllable_proxy);
    let clamped = raw.clamp(0.0, 100.0);

    ReadabilityStats {
        average_words_per_sentence,
        flesch_score: round2(clamped),
        difficulty_level: Difficulty::from_score(clamped),
    }
}

impl Difficulty {
    /// Map a clamped Flesch score onto its difficulty label.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
