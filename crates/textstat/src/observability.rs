//! Logging setup for the CLI.
//!
//! Log output goes to stderr so report output on stdout stays clean for
//! piping. `RUST_LOG` overrides everything; otherwise the level comes
//! from `-q`/`-v` flags, falling back to the configured level.

use tracing_subscriber::EnvFilter;

/// Build the env filter from CLI flags and the configured log level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global tracing subscriber.
pub fn init(filter: EnvFilter) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))
}
