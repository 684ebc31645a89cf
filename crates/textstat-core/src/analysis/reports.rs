//! Report structs for text analysis.
//!
//! All structs derive `Serialize` and `Deserialize` for use in CLI JSON
//! output. Conditional sections are `Option`s skipped during
//! serialization when absent, so the JSON shape only contains what was
//! actually computed.

use serde::{Deserialize, Serialize};

/// Full analysis result for one text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextReport {
    /// Character, sentence, and paragraph counts.
    pub basic_stats: BasicStats,
    /// Word counts and word-level statistics.
    pub word_analysis: WordAnalysis,
    /// Character class counts and letter frequencies.
    pub character_analysis: CharacterAnalysis,
    /// Readability estimate. Absent when the text has no sentence or no word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityStats>,
    /// Toy language detection. Present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_detection: Option<LanguageDetection>,
    /// Toy sentiment classification. Present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_analysis: Option<SentimentAnalysis>,
}

/// Character, sentence, and paragraph counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicStats {
    /// Total characters, including whitespace.
    pub total_characters: usize,
    /// Characters excluding the space character (other whitespace counts).
    pub total_characters_no_spaces: usize,
    /// Sentences, split on runs of `.`, `!`, `?`.
    pub total_sentences: usize,
    /// Paragraphs, split on blank lines.
    pub total_paragraphs: usize,
}

/// Word counts and word-level statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// Number of words found.
    pub total_words: usize,
    /// Word-level statistics. Absent when the text contains no words.
    /// Flattened, so the serialized shape stays a single flat section.
    #[serde(flatten)]
    pub stats: Option<WordStats>,
}

/// Word-level statistics, computed when at least one word exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordStats {
    /// Top-N most frequent words, count descending, ties by first
    /// occurrence.
    pub most_common_words: Vec<WordCount>,
    /// Mean word length in characters.
    pub average_word_length: f64,
    /// First word of maximum length in scan order.
    pub longest_word: String,
    /// First word of minimum length in scan order.
    pub shortest_word: String,
    /// Number of distinct words.
    pub unique_words: usize,
    /// Unique words divided by total words, in `[0, 1]`.
    pub lexical_diversity: f64,
}

/// A word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The (lower-cased) word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Character class counts and letter frequencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterAnalysis {
    /// Five most frequent letters (lower-cased), ties by first occurrence.
    /// Absent when the text has no alphabetic characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_common_letters: Option<Vec<LetterCount>>,
    /// Uppercase letters.
    pub uppercase_count: usize,
    /// Lowercase letters.
    pub lowercase_count: usize,
    /// ASCII digits.
    pub digit_count: usize,
    /// Characters from the fixed set `. , ! ? ; :`.
    pub punctuation_count: usize,
    /// Whitespace characters of any kind.
    pub whitespace_count: usize,
}

/// A letter with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCount {
    /// The (lower-cased) letter.
    pub letter: char,
    /// Number of occurrences.
    pub count: usize,
}

/// Readability estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadabilityStats {
    /// Mean number of words per sentence.
    pub average_words_per_sentence: f64,
    /// Approximate Flesch reading-ease score, clamped to `[0, 100]` and
    /// rounded to two decimals.
    pub flesch_score: f64,
    /// Discrete difficulty label derived from the clamped score.
    pub difficulty_level: Difficulty,
}

/// Discrete reading-difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Flesch score ≥ 90.
    #[serde(rename = "Very Easy")]
    VeryEasy,
    /// Flesch score ≥ 80.
    Easy,
    /// Flesch score ≥ 70.
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    /// Flesch score ≥ 60.
    Standard,
    /// Flesch score ≥ 50.
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    /// Flesch score ≥ 30.
    Difficult,
    /// Flesch score < 30.
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl Difficulty {
    /// Returns the label as displayed in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toy language detection outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDetection {
    /// The winning language, or Unknown on a tie.
    pub detected_language: Language,
    /// Confidence label. Always low; this is a ten-word heuristic.
    pub confidence: Confidence,
}

/// Languages the toy detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// More English marker words than Spanish.
    English,
    /// More Spanish marker words than English.
    Spanish,
    /// Equal marker counts (including zero of each).
    Unknown,
}

impl Language {
    /// Returns the language name as displayed in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence labels for the toy detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    /// A language won the marker count.
    Low,
    /// Tie between the marker counts.
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl Confidence {
    /// Returns the confidence label as displayed in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Toy sentiment classification outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Overall sentiment: the strictly larger count wins, else Neutral.
    pub sentiment: Sentiment,
    /// Occurrences of positive lexicon words.
    pub positive_words_count: usize,
    /// Occurrences of negative lexicon words.
    pub negative_words_count: usize,
}

/// Sentiment labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    /// More positive than negative lexicon words.
    Positive,
    /// More negative than positive lexicon words.
    Negative,
    /// Equal counts.
    Neutral,
}

impl Sentiment {
    /// Returns the sentiment label as displayed in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
