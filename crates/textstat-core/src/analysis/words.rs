//! Word-level statistics.

use std::collections::HashMap;

use super::reports::{WordAnalysis, WordCount, WordStats};

/// Compute word counts, frequencies, and derived statistics.
///
/// The frequency table is built in insertion order, then stable-sorted
/// by descending count so ties keep first-encountered order. Longest and
/// shortest word are the first words attaining the extreme length in
/// scan order.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn analyze_words(words: &[String], top_count: usize) -> WordAnalysis {
    if words.is_empty() {
        return WordAnalysis {
            total_words: 0,
            stats: None,
        };
    }

    // word -> index into `tallies`, which preserves first-seen order.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(String, usize)> = Vec::new();
    for word in words {
        if let Some(&i) = index.get(word.as_str()) {
            tallies[i].1 += 1;
        } else {
            index.insert(word.as_str(), tallies.len());
            tallies.push((word.clone(), 1));
        }
    }

    let unique_words = tallies.len();
    let total = words.len();

    let mut ranked = tallies;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_count);
    let most_common_words = ranked
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();

    let lengths: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();
    let total_length: usize = lengths.iter().sum();
    let average_word_length = total_length as f64 / total as f64;

    let mut longest = 0;
    let mut shortest = 0;
    for (i, &len) in lengths.iter().enumerate() {
        if len > lengths[longest] {
            longest = i;
        }
        if len < lengths[shortest] {
            shortest = i;
        }
    }

    WordAnalysis {
        total_words: total,
        stats: Some(WordStats {
            most_common_words,
            average_word_length,
            longest_word: words[longest].clone(),
            shortest_word: words[shortest].clone(),
            unique_words,
            lexical_diversity: unique_words as f64 / total as f64,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    fn analyze(input: &str, top_count: usize) -> WordAnalysis {
        analyze_words(&text::extract_words(input), top_count)
    }

    #[test]
    fn empty_text_has_no_stats() {
        let report = analyze("123 456", 5);
        assert_eq!(report.total_words, 0);
        assert!(report.stats.is_none());
    }

    #[test]
    fn simple_counts() {
        let report = analyze("Hello world. This is a test.", 5);
        assert_eq!(report.total_words, 6);
        let stats = report.stats.unwrap();
        assert_eq!(stats.unique_words, 6);
        assert!((stats.average_word_length - 3.5).abs() < f64::EPSILON);
        assert!((stats.lexical_diversity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn frequency_ties_keep_first_seen_order() {
        let report = analyze("beta alpha beta alpha gamma", 5);
        let stats = report.stats.unwrap();
        let ranked: Vec<&str> = stats
            .most_common_words
            .iter()
            .map(|wc| wc.word.as_str())
            .collect();
        // beta and alpha both occur twice; beta was seen first.
        assert_eq!(ranked, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn top_count_truncates() {
        let report = analyze("one two three four five six seven", 3);
        let stats = report.stats.unwrap();
        assert_eq!(stats.most_common_words.len(), 3);
    }

    #[test]
    fn top_count_larger_than_vocabulary() {
        let report = analyze("only two words words", 10);
        let stats = report.stats.unwrap();
        assert_eq!(stats.most_common_words.len(), 3);
        assert_eq!(stats.most_common_words[0], WordCount {
            word: "words".to_string(),
            count: 2,
        });
    }

    #[test]
    fn longest_and_shortest_are_first_in_scan_order() {
        let report = analyze("spot ample a zesty b", 5);
        let stats = report.stats.unwrap();
        // "ample" and "zesty" are both length 5; "ample" comes first.
        assert_eq!(stats.longest_word, "ample");
        // "a" and "b" are both length 1; "a" comes first.
        assert_eq!(stats.shortest_word, "a");
    }

    #[test]
    fn lexical_diversity_bounds() {
        let report = analyze("word word word word", 5);
        let stats = report.stats.unwrap();
        assert!((stats.lexical_diversity - 0.25).abs() < f64::EPSILON);
        assert_eq!(stats.unique_words, 1);
    }
}
