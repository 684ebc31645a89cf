//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use textstat_core::config::{Config, ConfigSources};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    top_words_count: usize,
    include_language_detection: bool,
    include_sentiment: bool,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            top_words_count: config.analyzer.top_words_count,
            include_language_detection: config.analyzer.include_language_detection,
            include_sentiment: config.analyzer.include_sentiment,
        }
    }
}

#[derive(Serialize)]
struct InfoOutput {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Show package and configuration information.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: &InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!("executing info command");

    let output = InfoOutput {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", output.package.name.bold(), output.package.version);
    if !output.package.description.is_empty() {
        println!("{}", output.package.description);
    }
    println!();
    match &output.config.config_file {
        Some(file) => println!("config file: {file}"),
        None => println!("config file: (none found, using defaults)"),
    }
    println!("log level: {}", output.config.log_level);
    println!("top words: {}", output.config.top_words_count);

    Ok(())
}
