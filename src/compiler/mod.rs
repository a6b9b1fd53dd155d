//! Query compiler.
//!
//! Compiles objects of a `SchemaGraph` into SOQL-style SELECT statements with
//! relationship sub-queries, plus a deserialization plan per object.
//!
//! Every object is compiled as its own root with a fresh recursion guard, so
//! a cycle only fails the roots that can reach it. Per-object projections are
//! cached on the graph's objects and shared between roots of the same pass.

mod plan;
mod projection;

pub use plan::{FieldPlan, ObjectPlan};
pub use projection::CompileError;

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::diagnostics::Diagnostic;
use crate::schema::{QueryObject, SchemaGraph};

/// Result of compiling one root object: a query or a diagnostic, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompileOutcome {
    Query { text: String, plan: ObjectPlan },
    Failed { diagnostic: Diagnostic },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledObject {
    pub class_name: String,
    pub key: String,
    pub object_name: String,
    #[serde(flatten)]
    pub outcome: CompileOutcome,
}

impl CompiledObject {
    pub fn query(&self) -> Option<&str> {
        match &self.outcome {
            CompileOutcome::Query { text, .. } => Some(text),
            CompileOutcome::Failed { .. } => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.outcome {
            CompileOutcome::Query { .. } => None,
            CompileOutcome::Failed { diagnostic } => Some(diagnostic),
        }
    }
}

/// Compile every object of the graph, in `(class_name, key)` order.
pub fn compile_all(graph: &SchemaGraph) -> Vec<CompiledObject> {
    let compiled: Vec<_> = graph.iter().filter_map(|obj| compile_object(graph, obj)).collect();

    let failed = compiled.iter().filter(|c| c.diagnostic().is_some()).count();
    info!(
        compiled = compiled.len() - failed,
        failed,
        "query compilation finished"
    );

    compiled
}

/// Compile a single root object, if the graph contains it.
pub fn compile_root(graph: &SchemaGraph, class_name: &str, key: &str) -> Option<CompiledObject> {
    compile_object(graph, graph.get(class_name, key)?)
}

fn compile_object(graph: &SchemaGraph, obj: &QueryObject) -> Option<CompiledObject> {
    let mut visiting = HashSet::new();
    let outcome = match obj.generate_query(graph, &mut visiting, None) {
        Ok(Some(text)) => {
            debug!(class = %obj.class_name, key = %obj.key, query = %text, "compiled query");
            CompileOutcome::Query {
                text,
                plan: ObjectPlan::for_object(obj, graph),
            }
        }
        Ok(None) => {
            debug!(class = %obj.class_name, key = %obj.key, "nothing to project, skipping");
            return None;
        }
        Err(err) => {
            debug!(class = %obj.class_name, key = %obj.key, error = %err, "compilation failed");
            CompileOutcome::Failed {
                diagnostic: err.into(),
            }
        }
    };

    Some(CompiledObject {
        class_name: obj.class_name.clone(),
        key: obj.key.clone(),
        object_name: obj.object_name.clone(),
        outcome,
    })
}
