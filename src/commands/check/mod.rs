mod execute;
mod output;

pub use execute::CheckResult;

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;

/// Validate a manifest without compiling
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  soql_gen check -m manifest.json                 # Validate and list diagnostics
  soql_gen --format json check -m manifest.json   # Machine-readable diagnostics")]
pub struct CheckCmd {
    /// Path to the declaration manifest JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub manifest: PathBuf,
}
