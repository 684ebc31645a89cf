//! Register command — registration field validation.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::registration::validate_registration;

/// Arguments for the `register` subcommand.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Email address to validate.
    #[arg(long)]
    pub email: String,

    /// Password to validate.
    #[arg(long)]
    pub password: String,

    /// Display name to validate.
    #[arg(long)]
    pub name: String,
}

/// Validate registration fields and print the outcome.
#[instrument(name = "cmd_register", skip_all)]
pub fn cmd_register(args: RegisterArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(email = %args.email, "executing register command");

    let report = validate_registration(&args.email, &args.password, &args.name);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.valid {
            bail!("registration failed validation");
        }
        return Ok(());
    }

    if report.valid {
        let message = report.message.as_deref().unwrap_or("Registration valid!");
        println!("{} {message}", "PASS:".green());
        Ok(())
    } else {
        for error in &report.errors {
            println!("  {} {error}", "error:".red());
        }
        bail!("registration failed with {} error(s)", report.errors.len());
    }
}
