//! Output formatting for check command results.

use super::execute::CheckResult;
use crate::output::{diagnostics_section, Outputable};

impl Outputable for CheckResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Check: {}", self.manifest), String::new()];

        lines.push(format!("  Objects:   {:>4}", self.objects));
        lines.push(format!("  Fields:    {:>4}", self.fields));
        lines.push(format!("  Errors:    {:>4}", self.summary.errors));
        lines.push(format!("  Warnings:  {:>4}", self.summary.warnings));

        let diagnostics = diagnostics_section(&self.diagnostics);
        if !diagnostics.is_empty() {
            lines.push(String::new());
            lines.extend(diagnostics);
        }

        lines.join("\n")
    }
}
