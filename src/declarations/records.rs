//! Object and field declaration records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the downstream deserializer converts JSON values into member types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeHandling {
    /// Values must already have the member's JSON type
    #[default]
    Strict,
    /// Values are converted between compatible JSON types (e.g. "42" -> 42)
    Coerce,
}

impl fmt::Display for TypeHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeHandling::Strict => write!(f, "strict"),
            TypeHandling::Coerce => write!(f, "coerce"),
        }
    }
}

/// Source position of an annotation, used to route diagnostics back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationHint {
    pub file: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl fmt::Display for LocationHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// One annotated root entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDeclaration {
    /// External entity name used in the FROM clause
    pub object_name: String,
    /// Grouping key; one class may declare several keyed views
    pub key: String,
    /// True when the class declares more than one object view
    pub key_required: bool,
    /// Fully-qualified name of the annotated type
    pub class_name: String,
    pub type_handling: TypeHandling,
}

impl ObjectDeclaration {
    pub fn new(
        object_name: impl Into<String>,
        key: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            key: key.into(),
            key_required: false,
            class_name: class_name.into(),
            type_handling: TypeHandling::default(),
        }
    }

    pub fn with_type_handling(mut self, type_handling: TypeHandling) -> Self {
        self.type_handling = type_handling;
        self
    }

    pub fn with_key_required(mut self, key_required: bool) -> Self {
        self.key_required = key_required;
        self
    }
}

/// One annotated member of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// External field name used in projections and as the JSON key
    pub field_name: String,
    /// Key of the object view this field belongs to
    pub key: String,
    pub property_name: String,
    pub class_name: String,
    /// Per-field override; `None` inherits the owning object's mode
    pub type_handling: Option<TypeHandling>,
}

impl FieldDeclaration {
    pub fn new(
        field_name: impl Into<String>,
        key: impl Into<String>,
        property_name: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            key: key.into(),
            property_name: property_name.into(),
            class_name: class_name.into(),
            type_handling: None,
        }
    }

    pub fn with_type_handling(mut self, type_handling: TypeHandling) -> Self {
        self.type_handling = Some(type_handling);
        self
    }
}

/// Borrowed reference to either kind of declaration, for location lookups.
#[derive(Debug, Clone, Copy)]
pub enum DeclarationRef<'a> {
    Object(&'a ObjectDeclaration),
    Field(&'a FieldDeclaration),
}
