//! Structured diagnostic records.

use std::fmt;

use serde::Serialize;

use super::catalog::{DiagnosticKind, Severity};
use crate::declarations::{FieldDeclaration, LocationHint, ObjectDeclaration};

/// A single diagnostic attributable to a class, key and (optionally) member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationHint>,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, class_name: &str, message: String) -> Self {
        Self {
            kind,
            code: kind.code(),
            severity: kind.severity(),
            message,
            class_name: class_name.to_string(),
            key: None,
            object_name: None,
            property_name: None,
            field_name: None,
            location: None,
        }
    }

    fn for_object(kind: DiagnosticKind, obj: &ObjectDeclaration, message: String) -> Self {
        Self {
            key: Some(obj.key.clone()),
            object_name: Some(obj.object_name.clone()),
            ..Self::new(kind, &obj.class_name, message)
        }
    }

    fn for_field(kind: DiagnosticKind, field: &FieldDeclaration, message: String) -> Self {
        Self {
            key: Some(field.key.clone()),
            property_name: Some(field.property_name.clone()),
            field_name: Some(field.field_name.clone()),
            ..Self::new(kind, &field.class_name, message)
        }
    }

    pub fn with_location(mut self, location: Option<LocationHint>) -> Self {
        self.location = location;
        self
    }

    pub fn duplicate_object(obj: &ObjectDeclaration) -> Self {
        let message = format!(
            "Class '{}' has multiple SoqlObject declarations with the same Key '{}'",
            obj.class_name, obj.key
        );
        Self::for_object(DiagnosticKind::DuplicateObject, obj, message)
    }

    pub fn missing_object(field: &FieldDeclaration) -> Self {
        let message = format!(
            "No SoqlObject defined for key '{}' in class '{}'",
            field.key, field.class_name
        );
        Self::for_field(DiagnosticKind::MissingObject, field, message)
    }

    pub fn invalid_field_key(field: &FieldDeclaration) -> Self {
        let message = format!(
            "Field key '{}' in property '{}' doesn't match any SoqlObject key in class '{}'",
            field.key, field.property_name, field.class_name
        );
        Self::for_field(DiagnosticKind::InvalidFieldKey, field, message)
    }

    pub fn duplicate_field(field: &FieldDeclaration) -> Self {
        let message = format!(
            "Property '{}' has multiple SoqlField declarations with the same FieldName '{}' and Key '{}'",
            field.property_name, field.field_name, field.key
        );
        Self::for_field(DiagnosticKind::DuplicateField, field, message)
    }

    pub fn object_with_no_fields(obj: &ObjectDeclaration) -> Self {
        let message = format!(
            "Class '{}' with Key '{}' has no associated SoqlField declarations",
            obj.class_name, obj.key
        );
        Self::for_object(DiagnosticKind::ObjectWithNoFields, obj, message)
    }

    pub fn cyclic_dependency(object_name: &str, class_name: &str, key: &str) -> Self {
        let message = format!(
            "Cyclic dependency detected in object '{}' with Key '{}'",
            object_name, key
        );
        Self {
            key: Some(key.to_string()),
            object_name: Some(object_name.to_string()),
            ..Self::new(DiagnosticKind::CyclicDependency, class_name, message)
        }
    }

    pub fn missing_parameterless_constructor(obj: &ObjectDeclaration) -> Self {
        let message = format!(
            "Class '{}' must have a parameterless constructor to be used as a SoqlObject",
            obj.class_name
        );
        Self::for_object(DiagnosticKind::MissingParameterlessConstructor, obj, message)
    }

    pub fn invalid_property_accessor(field: &FieldDeclaration) -> Self {
        let message = format!(
            "Property '{}' in class '{}' must have at least an init accessor or a non-private setter to be used as a SoqlField",
            field.property_name, field.class_name
        );
        Self::for_field(DiagnosticKind::InvalidPropertyAccessor, field, message)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.code, self.severity, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}

/// Error and warning counts over a set of diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticSummary {
    pub errors: usize,
    pub warnings: usize,
}

impl DiagnosticSummary {
    pub fn from_diagnostics<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> Self {
        diagnostics
            .into_iter()
            .fold(Self::default(), |mut acc, d| {
                match d.severity {
                    Severity::Error => acc.errors += 1,
                    Severity::Warning => acc.warnings += 1,
                }
                acc
            })
    }

    /// Whether the pass should be considered failed.
    pub fn is_failure(&self, warnings_as_errors: bool) -> bool {
        self.errors > 0 || (warnings_as_errors && self.warnings > 0)
    }
}
