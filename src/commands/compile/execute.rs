use std::error::Error;

use serde::Serialize;

use super::CompileCmd;
use crate::commands::{build_manifest, Execute, Outcome};
use crate::compiler::{compile_all, compile_root, CompiledObject};
use crate::config::ConfigFile;
use crate::diagnostics::{Diagnostic, DiagnosticSummary};

/// Validation diagnostics plus one entry per compiled root.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompileResult {
    pub manifest: String,
    /// Counts over validation diagnostics and compile failures
    pub summary: DiagnosticSummary,
    pub diagnostics: Vec<Diagnostic>,
    pub compiled: Vec<CompiledObject>,
}

impl Execute for CompileCmd {
    type Output = CompileResult;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let output = build_manifest(&self.manifest, config)?;
        let graph = &output.graph;

        let compiled: Vec<CompiledObject> = if self.is_filtered() {
            graph
                .keys()
                .filter(|k| self.matches(k))
                .filter_map(|k| compile_root(graph, &k.class_name, &k.key))
                .collect()
        } else {
            compile_all(graph)
        };

        let summary = DiagnosticSummary::from_diagnostics(
            output
                .diagnostics
                .iter()
                .chain(compiled.iter().filter_map(CompiledObject::diagnostic)),
        );

        Ok(CompileResult {
            manifest: self.manifest.display().to_string(),
            summary,
            diagnostics: output.diagnostics,
            compiled,
        })
    }
}

impl Outcome for CompileResult {
    fn is_failure(&self, warnings_as_errors: bool) -> bool {
        self.summary.is_failure(warnings_as_errors)
    }
}
