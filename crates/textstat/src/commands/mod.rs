//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
pub mod password;
pub mod register;

/// Read an input file for analysis.
pub fn read_input_file(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}
