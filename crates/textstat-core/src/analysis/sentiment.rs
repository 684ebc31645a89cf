//! Toy sentiment classification.
//!
//! Counts occurrences of eight positive and eight negative lexicon words;
//! the strictly larger count wins. Word-list strength only, same caveat
//! as the language detector.

use std::cmp::Ordering;

use crate::word_lists::{NEGATIVE_WORDS, POSITIVE_WORDS};

use super::reports::{Sentiment, SentimentAnalysis};

/// Classify overall sentiment from lexicon-word counts.
#[tracing::instrument(skip_all)]
pub fn analyze_sentiment(words: &[String]) -> SentimentAnalysis {
    let positive_words_count = words
        .iter()
        .filter(|w| POSITIVE_WORDS.contains(w.as_str()))
        .count();
    let negative_words_count = words
        .iter()
        .filter(|w| NEGATIVE_WORDS.contains(w.as_str()))
        .count();

    let sentiment = match positive_words_count.cmp(&negative_words_count) {
        Ordering::Greater => Sentiment::Positive,
        Ordering::Less => Sentiment::Negative,
        Ordering::Equal => Sentiment::Neutral,
    };

    SentimentAnalysis {
        sentiment,
        positive_words_count,
        negative_words_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    fn classify(input: &str) -> SentimentAnalysis {
        analyze_sentiment(&text::extract_words(input))
    }

    #[test]
    fn positive_text() {
        let result = classify("This is a wonderful day and I love this amazing fantastic place");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.positive_words_count, 4);
        assert_eq!(result.negative_words_count, 0);
    }

    #[test]
    fn negative_text() {
        let result = classify("What a terrible awful experience, I hate it");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.negative_words_count, 3);
    }

    #[test]
    fn balanced_text_is_neutral() {
        let result = classify("good but also bad");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.positive_words_count, 1);
        assert_eq!(result.negative_words_count, 1);
    }

    #[test]
    fn no_markers_is_neutral() {
        let result = classify("the weather report for tomorrow");
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }
}
