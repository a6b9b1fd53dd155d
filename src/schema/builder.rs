//! Schema graph construction and validation.
//!
//! `build` folds the two declaration lists into a `SchemaGraph`. Each
//! declaration is accepted or rejected on its own; a rejection produces a
//! diagnostic and never stops the pass.
//!
//! Rule order:
//!
//! 1. objects: type must resolve with a default constructor (SOQL007)
//! 2. objects: `(class_name, key)` must be unique (SOQL001)
//! 3. fields: member must have a usable write path (SOQL008)
//! 4. fields: the class must have an accepted object (SOQL002)
//! 5. fields: the class must have an accepted object with the field's key (SOQL003)
//! 6. fields: `(property_name, field_name)` must be unique per object (SOQL004)
//! 7. objects left without fields are dropped with a warning (SOQL005)

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info};

use super::graph::SchemaGraph;
use super::model::{QueryField, QueryObject};
use crate::declarations::{DeclarationRef, FieldDeclaration, ObjectDeclaration};
use crate::diagnostics::Diagnostic;
use crate::resolver::SymbolResolver;

/// Result of a build pass: the graph plus every validation diagnostic.
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub graph: SchemaGraph,
    pub diagnostics: Vec<Diagnostic>,
}

type Identity<'a> = (&'a str, &'a str);

/// Validate declarations and build the schema graph.
pub fn build(
    objects: &[ObjectDeclaration],
    fields: &[FieldDeclaration],
    resolver: &dyn SymbolResolver,
) -> BuildOutput {
    let mut diagnostics = Vec::new();

    let accepted = accept_objects(objects, resolver, &mut diagnostics);
    let object_classes: HashSet<&str> = objects
        .iter()
        .filter(|o| accepted.contains_key(&(o.class_name.as_str(), o.key.as_str())))
        .map(|o| o.class_name.as_str())
        .collect();

    let mut accepted_fields = accept_fields(fields, &accepted, &object_classes, resolver, &mut diagnostics);

    let mut graph = SchemaGraph::new();
    for (identity, obj) in accepted {
        let Some(field_decls) = accepted_fields.remove(&identity) else {
            debug!(class = %obj.class_name, key = %obj.key, "dropping object with no fields");
            diagnostics.push(
                Diagnostic::object_with_no_fields(obj)
                    .with_location(resolver.locate(DeclarationRef::Object(obj))),
            );
            continue;
        };

        let query_fields = field_decls
            .into_iter()
            .map(|f| resolve_field(f, obj, resolver))
            .collect();
        graph.insert(QueryObject::new(obj, query_fields));
    }

    info!(
        objects = graph.len(),
        fields = graph.field_count(),
        diagnostics = diagnostics.len(),
        "schema graph built"
    );

    BuildOutput { graph, diagnostics }
}

fn accept_objects<'a>(
    objects: &'a [ObjectDeclaration],
    resolver: &dyn SymbolResolver,
    diagnostics: &mut Vec<Diagnostic>,
) -> BTreeMap<Identity<'a>, &'a ObjectDeclaration> {
    let mut accepted = BTreeMap::new();

    for o in objects {
        let constructible = resolver
            .resolve_type(&o.class_name)
            .is_some_and(|ty| resolver.has_default_constructor(ty));
        if !constructible {
            debug!(class = %o.class_name, key = %o.key, "rejecting object: no parameterless constructor");
            diagnostics.push(
                Diagnostic::missing_parameterless_constructor(o)
                    .with_location(resolver.locate(DeclarationRef::Object(o))),
            );
            continue;
        }

        let identity = (o.class_name.as_str(), o.key.as_str());
        if accepted.contains_key(&identity) {
            debug!(class = %o.class_name, key = %o.key, "rejecting duplicate object");
            diagnostics.push(
                Diagnostic::duplicate_object(o).with_location(resolver.locate(DeclarationRef::Object(o))),
            );
            continue;
        }

        accepted.insert(identity, o);
    }

    accepted
}

fn accept_fields<'a>(
    fields: &'a [FieldDeclaration],
    accepted: &BTreeMap<Identity<'a>, &'a ObjectDeclaration>,
    object_classes: &HashSet<&str>,
    resolver: &dyn SymbolResolver,
    diagnostics: &mut Vec<Diagnostic>,
) -> BTreeMap<Identity<'a>, Vec<&'a FieldDeclaration>> {
    let mut accepted_fields: BTreeMap<Identity<'a>, Vec<&'a FieldDeclaration>> = BTreeMap::new();

    for f in fields {
        let reject = |diagnostic: Diagnostic| diagnostic.with_location(resolver.locate(DeclarationRef::Field(f)));

        let writable = resolver
            .resolve_member(&f.class_name, &f.property_name)
            .and_then(|m| resolver.setter(m))
            .is_some_and(|s| s.is_writable());
        if !writable {
            debug!(class = %f.class_name, property = %f.property_name, "rejecting field: no usable setter");
            diagnostics.push(reject(Diagnostic::invalid_property_accessor(f)));
            continue;
        }

        if !object_classes.contains(f.class_name.as_str()) {
            debug!(class = %f.class_name, property = %f.property_name, "rejecting field: class has no object");
            diagnostics.push(reject(Diagnostic::missing_object(f)));
            continue;
        }

        let identity = (f.class_name.as_str(), f.key.as_str());
        if !accepted.contains_key(&identity) {
            debug!(class = %f.class_name, key = %f.key, property = %f.property_name, "rejecting field: unknown key");
            diagnostics.push(reject(Diagnostic::invalid_field_key(f)));
            continue;
        }

        let list = accepted_fields.entry(identity).or_default();
        if list
            .iter()
            .any(|existing| existing.property_name == f.property_name && existing.field_name == f.field_name)
        {
            debug!(class = %f.class_name, key = %f.key, field = %f.field_name, "rejecting duplicate field");
            diagnostics.push(reject(Diagnostic::duplicate_field(f)));
            continue;
        }

        list.push(f);
    }

    accepted_fields
}

fn resolve_field(f: &FieldDeclaration, owner: &ObjectDeclaration, resolver: &dyn SymbolResolver) -> QueryField {
    let type_handling = f.type_handling.unwrap_or(owner.type_handling);
    match resolver.resolve_member(&f.class_name, &f.property_name) {
        Some(member) => QueryField::resolved(f, resolver.describe_type(member), type_handling),
        None => {
            debug!(class = %f.class_name, property = %f.property_name, "member no longer resolves, degrading field");
            QueryField::unresolved(f, type_handling)
        }
    }
}
