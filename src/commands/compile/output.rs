//! Output formatting for compile command results.

use super::execute::CompileResult;
use crate::compiler::CompileOutcome;
use crate::output::{diagnostics_section, Outputable};

impl Outputable for CompileResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Compile: {}", self.manifest), String::new()];

        if self.compiled.is_empty() {
            lines.push("No queries compiled.".to_string());
        }

        for compiled in &self.compiled {
            lines.push(format!("{} [{}]", compiled.class_name, compiled.key));
            match &compiled.outcome {
                CompileOutcome::Query { text, .. } => lines.push(format!("  {}", text)),
                CompileOutcome::Failed { diagnostic } => lines.push(format!("  FAILED {}", diagnostic)),
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "Errors: {}, Warnings: {}",
            self.summary.errors, self.summary.warnings
        ));

        let diagnostics = diagnostics_section(&self.diagnostics);
        if !diagnostics.is_empty() {
            lines.push(String::new());
            lines.extend(diagnostics);
        }

        lines.join("\n")
    }
}
