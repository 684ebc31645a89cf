//! Character class counts and letter frequencies.

use std::collections::HashMap;

use super::reports::{CharacterAnalysis, LetterCount};

/// How many letter frequencies the report carries.
const TOP_LETTERS: usize = 5;

/// Punctuation characters the analyzer counts.
const PUNCTUATION: &str = ".,!?;:";

/// Classify every character and rank letter frequencies.
///
/// Letters are ranked over the lower-cased text so `E` and `e` pool into
/// one tally; ties keep first-encountered order.
#[tracing::instrument(skip_all)]
pub fn analyze_characters(text: &str) -> CharacterAnalysis {
    let mut uppercase_count = 0;
    let mut lowercase_count = 0;
    let mut digit_count = 0;
    let mut punctuation_count = 0;
    let mut whitespace_count = 0;

    for c in text.chars() {
        if c.is_uppercase() {
            uppercase_count += 1;
        }
        if c.is_lowercase() {
            lowercase_count += 1;
        }
        if c.is_ascii_digit() {
            digit_count += 1;
        }
        if PUNCTUATION.contains(c) {
            punctuation_count += 1;
        }
        if c.is_whitespace() {
            whitespace_count += 1;
        }
    }

    // letter -> index into `tallies`, which preserves first-seen order.
    let mut index: HashMap<char, usize> = HashMap::new();
    let mut tallies: Vec<(char, usize)> = Vec::new();
    for c in text.to_lowercase().chars().filter(|c| c.is_alphabetic()) {
        if let Some(&i) = index.get(&c) {
            tallies[i].1 += 1;
        } else {
            index.insert(c, tallies.len());
            tallies.push((c, 1));
        }
    }

    let most_common_letters = if tallies.is_empty() {
        None
    } else {
        tallies.sort_by(|a, b| b.1.cmp(&a.1));
        tallies.truncate(TOP_LETTERS);
        Some(
            tallies
                .into_iter()
                .map(|(letter, count)| LetterCount { letter, count })
                .collect(),
        )
    };

    CharacterAnalysis {
        most_common_letters,
        uppercase_count,
        lowercase_count,
        digit_count,
        punctuation_count,
        whitespace_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_counts() {
        let report = analyze_characters("Hi, there 42!");
        assert_eq!(report.uppercase_count, 1);
        assert_eq!(report.lowercase_count, 6);
        assert_eq!(report.digit_count, 2);
        assert_eq!(report.punctuation_count, 2);
        assert_eq!(report.whitespace_count, 2);
    }

    #[test]
    fn letters_pool_case_insensitively() {
        let report = analyze_characters("Eee");
        let letters = report.most_common_letters.unwrap();
        assert_eq!(letters, vec![LetterCount {
            letter: 'e',
            count: 3,
        }]);
    }

    #[test]
    fn top_letters_truncated_to_five() {
        let report = analyze_characters("abcdefg");
        let letters = report.most_common_letters.unwrap();
        assert_eq!(letters.len(), 5);
        // All counts are 1, so first-seen order wins.
        assert_eq!(letters[0].letter, 'a');
        assert_eq!(letters[4].letter, 'e');
    }

    #[test]
    fn no_letters_means_no_ranking() {
        let report = analyze_characters("12 34 !!");
        assert!(report.most_common_letters.is_none());
    }

    #[test]
    fn only_listed_punctuation_counts() {
        let report = analyze_characters("a-b(c)");
        assert_eq!(report.punctuation_count, 0);
    }
}
