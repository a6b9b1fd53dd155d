//! Canonical diagnostic kinds.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticKind {
    DuplicateObject,
    MissingObject,
    InvalidFieldKey,
    DuplicateField,
    ObjectWithNoFields,
    CyclicDependency,
    MissingParameterlessConstructor,
    InvalidPropertyAccessor,
}

impl DiagnosticKind {
    pub const ALL: [DiagnosticKind; 8] = [
        DiagnosticKind::DuplicateObject,
        DiagnosticKind::MissingObject,
        DiagnosticKind::InvalidFieldKey,
        DiagnosticKind::DuplicateField,
        DiagnosticKind::ObjectWithNoFields,
        DiagnosticKind::CyclicDependency,
        DiagnosticKind::MissingParameterlessConstructor,
        DiagnosticKind::InvalidPropertyAccessor,
    ];

    /// Stable identifier, never reused across kinds.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::DuplicateObject => "SOQL001",
            DiagnosticKind::MissingObject => "SOQL002",
            DiagnosticKind::InvalidFieldKey => "SOQL003",
            DiagnosticKind::DuplicateField => "SOQL004",
            DiagnosticKind::ObjectWithNoFields => "SOQL005",
            DiagnosticKind::CyclicDependency => "SOQL006",
            DiagnosticKind::MissingParameterlessConstructor => "SOQL007",
            DiagnosticKind::InvalidPropertyAccessor => "SOQL008",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::ObjectWithNoFields => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DiagnosticKind::DuplicateObject => "Duplicate object definition",
            DiagnosticKind::MissingObject => "Missing object definition",
            DiagnosticKind::InvalidFieldKey => "Invalid field key",
            DiagnosticKind::DuplicateField => "Duplicate field definition",
            DiagnosticKind::ObjectWithNoFields => "Object with no fields",
            DiagnosticKind::CyclicDependency => "Cyclic dependency detected",
            DiagnosticKind::MissingParameterlessConstructor => "Missing parameterless constructor",
            DiagnosticKind::InvalidPropertyAccessor => "Invalid property accessor",
        }
    }
}
