//! Plain-text report rendering.
//!
//! Pure string construction: the same result always renders to the same
//! report. Section blocks appear in a fixed order and only when the
//! corresponding section is present in the result.

use crate::error::AnalysisResult;

use super::reports::TextReport;

/// Render an analysis result as a human-readable report.
///
/// An `Err` result renders as a single `Error: <message>` line.
pub fn render_report(result: &AnalysisResult<TextReport>) -> String {
    match result {
        Err(err) => format!("Error: {err}"),
        Ok(report) => render_sections(report),
    }
}

fn render_sections(report: &TextReport) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("=== TEXT ANALYSIS REPORT ===\n".to_string());

    let basic = &report.basic_stats;
    lines.push("BASIC STATISTICS:".to_string());
    lines.push(format!("  • Total Characters: {}", basic.total_characters));
    lines.push(format!(
        "  • Characters (no spaces): {}",
        basic.total_characters_no_spaces
    ));
    lines.push(format!(
        "  • Total Words: {}",
        report.word_analysis.total_words
    ));
    lines.push(format!("  • Total Sentences: {}", basic.total_sentences));
    lines.push(format!("  • Total Paragraphs: {}", basic.total_paragraphs));
    lines.push(String::new());

    lines.push("WORD ANALYSIS:".to_string());
    if let Some(stats) = &report.word_analysis.stats {
        lines.push(format!(
            "  • Average Word Length: {:.2}",
            stats.average_word_length
        ));
        lines.push(format!("  • Longest Word: '{}'", stats.longest_word));
        lines.push(format!("  • Shortest Word: '{}'", stats.shortest_word));
        lines.push(format!(
            "  • Lexical Diversity: {:.2}",
            stats.lexical_diversity
        ));
        lines.push("  • Most Common Words:".to_string());
        for entry in &stats.most_common_words {
            lines.push(format!("    - '{}': {}", entry.word, entry.count));
        }
    }
    lines.push(String::new());

    let chars = &report.character_analysis;
    lines.push("CHARACTER ANALYSIS:".to_string());
    if let Some(letters) = &chars.most_common_letters {
        lines.push("  • Most Common Letters:".to_string());
        for entry in letters {
            lines.push(format!("    - '{}': {}", entry.letter, entry.count));
        }
    }
    for (name, value) in [
        ("uppercase_count", chars.uppercase_count),
        ("lowercase_count", chars.lowercase_count),
        ("digit_count", chars.digit_count),
        ("punctuation_count", chars.punctuation_count),
        ("whitespace_count", chars.whitespace_count),
    ] {
        lines.push(format!("  • {}: {}", field_label(name), value));
    }
    lines.push(String::new());

    if let Some(readability) = &report.readability {
        lines.push("READABILITY:".to_string());
        lines.push(format!(
            "  • {}: {:.2}",
            field_label("average_words_per_sentence"),
            readability.average_words_per_sentence
        ));
        lines.push(format!(
            "  • {}: {:.2}",
            field_label("flesch_score"),
            readability.flesch_score
        ));
        lines.push(format!(
            "  • {}: {}",
            field_label("difficulty_level"),
            readability.difficulty_level
        ));
        lines.push(String::new());
    }

    if let Some(language) = &report.language_detection {
        lines.push("LANGUAGE DETECTION:".to_string());
        lines.push(format!(
            "  • Detected Language: {}",
            language.detected_language
        ));
        lines.push(format!("  • Confidence: {}", language.confidence));
        lines.push(String::new());
    }

    if let Some(sentiment) = &report.sentiment_analysis {
        lines.push("SENTIMENT ANALYSIS:".to_string());
        lines.push(format!("  • Overall Sentiment: {}", sentiment.sentiment));
        lines.push(format!(
            "  • Positive Words: {}",
            sentiment.positive_words_count
        ));
        lines.push(format!(
            "  • Negative Words: {}",
            sentiment.negative_words_count
        ));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Turn a snake_case field name into a report label.
fn field_label(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalyzeOptions, analyze_text};
    use crate::error::AnalysisError;

    #[test]
    fn error_renders_as_single_line() {
        let rendered = render_report(&Err(AnalysisError::EmptyInput));
        assert_eq!(rendered, "Error: Text cannot be empty");
    }

    #[test]
    fn report_has_title_and_section_headers() {
        let result = analyze_text("Hello world. This is a test.", &AnalyzeOptions::default());
        let rendered = render_report(&result);
        assert!(rendered.starts_with("=== TEXT ANALYSIS REPORT ==="));
        assert!(rendered.contains("BASIC STATISTICS:"));
        assert!(rendered.contains("WORD ANALYSIS:"));
        assert!(rendered.contains("CHARACTER ANALYSIS:"));
        assert!(rendered.contains("READABILITY:"));
        assert!(!rendered.contains("LANGUAGE DETECTION:"));
        assert!(!rendered.contains("SENTIMENT ANALYSIS:"));
    }

    #[test]
    fn fractional_fields_use_two_decimals() {
        let result = analyze_text("Hello world. This is a test.", &AnalyzeOptions::default());
        let rendered = render_report(&result);
        assert!(rendered.contains("  • Average Word Length: 3.50"));
        assert!(rendered.contains("  • Lexical Diversity: 1.00"));
        assert!(rendered.contains("  • Flesch Score: 0.00"));
        assert!(rendered.contains("  • Difficulty Level: Very Difficult"));
    }

    #[test]
    fn word_list_renders_as_sub_list() {
        let result = analyze_text("apple apple pear.", &AnalyzeOptions::default());
        let rendered = render_report(&result);
        assert!(rendered.contains("  • Most Common Words:"));
        assert!(rendered.contains("    - 'apple': 2"));
        assert!(rendered.contains("    - 'pear': 1"));
    }

    #[test]
    fn optional_sections_render_when_present() {
        let options = AnalyzeOptions {
            include_language_detection: true,
            include_sentiment: true,
            ..AnalyzeOptions::default()
        };
        let result = analyze_text("The sunset was wonderful and the food was great.", &options);
        let rendered = render_report(&result);
        assert!(rendered.contains("LANGUAGE DETECTION:"));
        assert!(rendered.contains("  • Detected Language: English"));
        assert!(rendered.contains("SENTIMENT ANALYSIS:"));
        assert!(rendered.contains("  • Overall Sentiment: Positive"));
        assert!(rendered.contains("  • Positive Words: 2"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let result = analyze_text("Same text, same report.", &AnalyzeOptions::default());
        assert_eq!(render_report(&result), render_report(&result));
    }

    #[test]
    fn field_labels_title_case() {
        assert_eq!(field_label("uppercase_count"), "Uppercase Count");
        assert_eq!(
            field_label("average_words_per_sentence"),
            "Average Words Per Sentence"
        );
    }
}
