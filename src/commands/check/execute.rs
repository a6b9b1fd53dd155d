use std::error::Error;

use serde::Serialize;

use super::CheckCmd;
use crate::commands::{build_manifest, Execute, Outcome};
use crate::config::ConfigFile;
use crate::diagnostics::{Diagnostic, DiagnosticSummary};

/// Validation report for one manifest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub manifest: String,
    pub objects: usize,
    pub fields: usize,
    pub summary: DiagnosticSummary,
    pub diagnostics: Vec<Diagnostic>,
}

impl Execute for CheckCmd {
    type Output = CheckResult;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let output = build_manifest(&self.manifest, config)?;

        Ok(CheckResult {
            manifest: self.manifest.display().to_string(),
            objects: output.graph.len(),
            fields: output.graph.field_count(),
            summary: DiagnosticSummary::from_diagnostics(&output.diagnostics),
            diagnostics: output.diagnostics,
        })
    }
}

impl Outcome for CheckResult {
    fn is_failure(&self, warnings_as_errors: bool) -> bool {
        self.summary.is_failure(warnings_as_errors)
    }
}
