mod cli_tests;
mod execute;
mod output;
mod output_tests;

pub use execute::CompileResult;

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;
use crate::schema::ObjectKey;

/// Validate a manifest and compile its objects into SOQL queries
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  soql_gen compile -m manifest.json                        # Compile every object
  soql_gen compile -m manifest.json --class App.Account    # All keys of one class
  soql_gen compile -m manifest.json -c App.Account -k Q    # A single root
  soql_gen --format json compile -m manifest.json          # Queries plus deserialization plans")]
pub struct CompileCmd {
    /// Path to the declaration manifest JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub manifest: PathBuf,
    /// Only compile objects of this class (fully-qualified name)
    #[arg(short, long)]
    pub class: Option<String>,
    /// Only compile objects with this key
    #[arg(short, long)]
    pub key: Option<String>,
}

impl CompileCmd {
    fn is_filtered(&self) -> bool {
        self.class.is_some() || self.key.is_some()
    }

    fn matches(&self, object: &ObjectKey) -> bool {
        self.class.as_ref().is_none_or(|c| *c == object.class_name)
            && self.key.as_ref().is_none_or(|k| *k == object.key)
    }
}
