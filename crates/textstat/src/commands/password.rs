//! Password command — policy validation and strength scoring.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::password::{PasswordPolicy, validate_password};

/// Arguments for the `password` subcommand.
#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// Password to validate.
    pub password: String,

    /// Minimum accepted length.
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Maximum accepted length.
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Do not require a special character.
    #[arg(long)]
    pub no_special: bool,

    /// Forbidden substrings (comma-separated), replacing the defaults.
    #[arg(long, value_delimiter = ',')]
    pub forbid: Option<Vec<String>>,
}

/// Validate a password and print the outcome.
#[instrument(name = "cmd_password", skip_all)]
pub fn cmd_password(args: PasswordArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(min_length = ?args.min_length, "executing password command");

    let mut policy = PasswordPolicy::default();
    if let Some(min) = args.min_length {
        policy.min_length = min;
    }
    if let Some(max) = args.max_length {
        policy.max_length = max;
    }
    if args.no_special {
        policy.require_special = false;
    }
    if let Some(forbid) = args.forbid {
        policy.forbidden_words = forbid;
    }

    let report = validate_password(&args.password, &policy);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.valid {
            bail!("password failed validation");
        }
        return Ok(());
    }

    for warning in &report.warnings {
        println!("  {} {warning}", "warn:".yellow());
    }
    if report.valid {
        println!("{} {}", "PASS:".green(), report.message);
        Ok(())
    } else {
        for error in &report.errors {
            println!("  {} {error}", "error:".red());
        }
        bail!("{}", report.message);
    }
}
