//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Render diagnostics as an indented block, one per line.
pub(crate) fn diagnostics_section(diagnostics: &[crate::diagnostics::Diagnostic]) -> Vec<String> {
    if diagnostics.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![format!("Diagnostics ({}):", diagnostics.len())];
    lines.extend(diagnostics.iter().map(|d| format!("  {}", d)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::{FieldDeclaration, LocationHint};
    use crate::diagnostics::Diagnostic;
    use rstest::rstest;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        count: usize,
    }

    impl Outputable for Sample {
        fn to_table(&self) -> String {
            format!("{}: {}", self.name, self.count)
        }
    }

    #[rstest]
    #[case(OutputFormat::Table, "Account: 2")]
    #[case(OutputFormat::Json, "{\n  \"name\": \"Account\",\n  \"count\": 2\n}")]
    #[case(OutputFormat::Toon, "count: 2\nname: Account")]
    fn test_format_dispatch(#[case] format: OutputFormat, #[case] expected: &str) {
        let sample = Sample { name: "Account", count: 2 };
        assert_eq!(sample.format(format), expected);
    }

    #[rstest]
    fn test_diagnostics_section() {
        assert!(diagnostics_section(&[]).is_empty());

        let field = FieldDeclaration::new("Name", "X", "Name", "App.Account");
        let diagnostic = Diagnostic::invalid_field_key(&field).with_location(Some(LocationHint {
            file: "Account.cs".to_string(),
            line: 4,
            column: 5,
        }));
        let lines = diagnostics_section(&[diagnostic]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Diagnostics (1):");
        assert!(lines[1].starts_with("  SOQL003 error: "));
        assert!(lines[1].ends_with("(at Account.cs:4:5)"));
    }
}
