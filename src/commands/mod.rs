//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs` running the pipeline and producing a result type
//! - `output.rs` rendering that result as a table

mod check;
mod compile;

pub use check::{CheckCmd, CheckResult};
pub use compile::{CompileCmd, CompileResult};

use clap::Subcommand;
use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ConfigFile;
use crate::declarations::Manifest;
use crate::output::{OutputFormat, Outputable};
use crate::resolver::ManifestResolver;
use crate::schema::{self, BuildOutput};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable + Outcome;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>>;
}

/// Results that decide the process exit status.
pub trait Outcome {
    fn is_failure(&self, warnings_as_errors: bool) -> bool;
}

/// Rendered command output plus its exit status.
#[derive(Debug)]
pub struct RunOutput {
    pub text: String,
    pub failed: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a manifest and compile its objects into SOQL queries
    Compile(CompileCmd),

    /// Validate a manifest without compiling
    Check(CheckCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, config: &ConfigFile, format: OutputFormat) -> Result<RunOutput, Box<dyn Error>> {
        match self {
            Command::Compile(cmd) => render(cmd, config, format),
            Command::Check(cmd) => render(cmd, config, format),
        }
    }
}

fn render<C: Execute>(cmd: C, config: &ConfigFile, format: OutputFormat) -> Result<RunOutput, Box<dyn Error>> {
    let result = cmd.execute(config)?;
    Ok(RunOutput {
        text: result.format(format),
        failed: result.is_failure(config.compiler.warnings_as_errors),
    })
}

pub(crate) fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}

/// Load a manifest and run the validation pass over it.
pub(crate) fn build_manifest(path: &Path, config: &ConfigFile) -> Result<BuildOutput, Box<dyn Error>> {
    let manifest = Manifest::load(path)?;
    let (objects, fields) = manifest.declarations(config.compiler.default_type_handling);
    info!(
        manifest = %path.display(),
        objects = objects.len(),
        fields = fields.len(),
        "loaded manifest"
    );

    let resolver = ManifestResolver::new(&manifest);
    Ok(schema::build(&objects, &fields, &resolver))
}
