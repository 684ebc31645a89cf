//! Analyze command — text statistics report.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use textstat_core::analysis;
use textstat_core::config::Config;

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    #[arg(conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Literal text to analyze instead of a file.
    #[arg(long)]
    pub text: Option<String>,

    /// Number of most-common words to report.
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// Include toy language detection.
    #[arg(long)]
    pub language: bool,

    /// Include toy sentiment classification.
    #[arg(long)]
    pub sentiment: bool,
}

/// Run text analysis on a file or literal text.
#[instrument(name = "cmd_analyze", skip_all)]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = ?args.file, top_words = ?args.top_words, "executing analyze command");

    let content = match (&args.file, &args.text) {
        (Some(file), _) => read_input_file(file)?,
        (None, Some(text)) => text.clone(),
        (None, None) => bail!("provide a file to analyze, or --text"),
    };

    let mut options = config.analyzer.clone();
    if let Some(n) = args.top_words
        && n > 0
    {
        options.top_words_count = n;
    }
    if args.language {
        options.include_language_detection = true;
    }
    if args.sentiment {
        options.include_sentiment = true;
    }

    match analysis::analyze_text(&content, &options) {
        Ok(report) => {
            if global_json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", analysis::render_report(&Ok(report)));
            }
            Ok(())
        }
        Err(err) => {
            if global_json {
                println!("{}", serde_json::json!({ "error": err.to_string() }));
            }
            Err(err.into())
        }
    }
}
