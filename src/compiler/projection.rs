//! Recursive projection of query objects into SELECT lists.
//!
//! For every field of an object, in declaration order:
//!
//! - no object in the graph for the field's type (same key): the field is a
//!   terminal projection, `Name`
//! - singular reference: the target's projected paths are flattened with a
//!   dotted prefix, `Owner.Username`
//! - collection reference: the target is compiled as a parenthesized
//!   sub-query selecting from the relationship, `(SELECT LastName FROM Contacts)`
//!
//! Object names currently being expanded are tracked in `visiting`; meeting
//! one again is a cycle. Each object caches its own projection after the
//! first successful resolution.

use std::collections::HashSet;

use thiserror::Error;
use tracing::trace;

use crate::diagnostics::Diagnostic;
use crate::schema::{QueryObject, SchemaGraph};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Cyclic dependency detected in object '{object_name}' with Key '{key}'")]
    CyclicDependency {
        object_name: String,
        class_name: String,
        key: String,
    },
}

impl CompileError {
    fn cyclic(obj: &QueryObject) -> Self {
        CompileError::CyclicDependency {
            object_name: obj.object_name.clone(),
            class_name: obj.class_name.clone(),
            key: obj.key.clone(),
        }
    }
}

impl From<&CompileError> for Diagnostic {
    fn from(err: &CompileError) -> Self {
        match err {
            CompileError::CyclicDependency {
                object_name,
                class_name,
                key,
            } => Diagnostic::cyclic_dependency(object_name, class_name, key),
        }
    }
}

impl From<CompileError> for Diagnostic {
    fn from(err: CompileError) -> Self {
        Diagnostic::from(&err)
    }
}

impl QueryObject {
    /// Resolve the projected field paths of this object.
    ///
    /// Returns `Ok(None)` for an object without fields. The result is cached
    /// on the object, so later calls (from any path) return the same slice.
    pub fn resolve_projected_fields(
        &self,
        graph: &SchemaGraph,
        visiting: &mut HashSet<String>,
    ) -> Result<Option<&[String]>, CompileError> {
        if let Some(cached) = self.cached_projection() {
            return Ok(Some(cached));
        }

        if visiting.contains(self.object_name.as_str()) {
            return Err(CompileError::cyclic(self));
        }

        if self.fields.is_empty() {
            return Ok(None);
        }

        visiting.insert(self.object_name.clone());
        let projected = self.project_fields(graph, visiting);
        visiting.remove(self.object_name.as_str());

        let projected = projected?;
        Ok(Some(self.projected.get_or_init(|| projected).as_slice()))
    }

    /// Render `SELECT <projection> FROM <from_override or object_name>`.
    pub fn generate_query(
        &self,
        graph: &SchemaGraph,
        visiting: &mut HashSet<String>,
        from_override: Option<&str>,
    ) -> Result<Option<String>, CompileError> {
        let Some(fields) = self.resolve_projected_fields(graph, visiting)? else {
            return Ok(None);
        };

        Ok(Some(format!(
            "SELECT {} FROM {}",
            fields.join(", "),
            from_override.unwrap_or(&self.object_name)
        )))
    }

    fn project_fields(
        &self,
        graph: &SchemaGraph,
        visiting: &mut HashSet<String>,
    ) -> Result<Vec<String>, CompileError> {
        let mut projected = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let Some(nested) = graph.get(field.lookup_type(), &self.key) else {
                projected.push(field.field_name.clone());
                continue;
            };

            if field.is_collection() {
                trace!(object = %self.object_name, field = %field.field_name, target = %nested.object_name, "sub-query");
                if let Some(sub_query) = nested.generate_query(graph, visiting, Some(&field.field_name))? {
                    projected.push(format!("({})", sub_query));
                }
                continue;
            }

            trace!(object = %self.object_name, field = %field.field_name, target = %nested.object_name, "flatten");
            match nested.resolve_projected_fields(graph, visiting)? {
                Some(paths) => {
                    projected.extend(paths.iter().map(|p| format!("{}.{}", field.field_name, p)));
                }
                // Target has nothing to project; keep the reference itself as a leaf.
                None => projected.push(field.field_name.clone()),
            }
        }

        Ok(projected)
    }
}
