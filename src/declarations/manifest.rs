//! JSON manifest structures written by the upstream annotation collector.
//!
//! A manifest carries the two declaration lists plus a snapshot of the type
//! table (types, members, accessors) that `ManifestResolver` answers lookups
//! from.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::records::{FieldDeclaration, LocationHint, ObjectDeclaration, TypeHandling};

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file '{path}': {message}")]
    FileReadFailed { path: String, message: String },

    #[error("Failed to parse manifest JSON: {message}")]
    JsonParseFailed { message: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeDecl>,
    #[serde(default)]
    pub objects: Vec<ObjectEntry>,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeDecl {
    pub class_name: String,
    #[serde(default = "default_true")]
    pub public: bool,
    #[serde(default = "default_true")]
    pub default_constructor: bool,
    #[serde(default)]
    pub location: Option<LocationHint>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberDecl {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub collection: bool,
    #[serde(default)]
    pub element_type: Option<String>,
    #[serde(default)]
    pub value_type: bool,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub setter: SetterDecl,
    #[serde(default)]
    pub location: Option<LocationHint>,
}

/// Write accessor of a member as seen by the collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetterDecl {
    #[default]
    Public,
    Internal,
    ProtectedInternal,
    Protected,
    Private,
    Init,
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectEntry {
    pub object_name: String,
    pub key: String,
    pub class_name: String,
    #[serde(default)]
    pub type_handling: Option<TypeHandling>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldEntry {
    pub field_name: String,
    pub key: String,
    pub property_name: String,
    pub class_name: String,
    #[serde(default)]
    pub type_handling: Option<TypeHandling>,
}

fn default_true() -> bool {
    true
}

impl Manifest {
    /// Load a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|e| ManifestError::FileReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(|e| ManifestError::JsonParseFailed {
            message: e.to_string(),
        })
    }

    /// Convert manifest entries into declaration records, preserving order.
    ///
    /// `key_required` is recomputed from the object list: a class with more
    /// than one object entry requires explicit keys. Objects without a
    /// `type_handling` get `default_type_handling`.
    pub fn declarations(
        &self,
        default_type_handling: TypeHandling,
    ) -> (Vec<ObjectDeclaration>, Vec<FieldDeclaration>) {
        let mut per_class: HashMap<&str, usize> = HashMap::new();
        for o in &self.objects {
            *per_class.entry(o.class_name.as_str()).or_default() += 1;
        }

        let objects = self
            .objects
            .iter()
            .map(|o| ObjectDeclaration {
                object_name: o.object_name.clone(),
                key: o.key.clone(),
                key_required: per_class.get(o.class_name.as_str()).copied().unwrap_or(0) > 1,
                class_name: o.class_name.clone(),
                type_handling: o.type_handling.unwrap_or(default_type_handling),
            })
            .collect();

        let fields = self
            .fields
            .iter()
            .map(|f| FieldDeclaration {
                field_name: f.field_name.clone(),
                key: f.key.clone(),
                property_name: f.property_name.clone(),
                class_name: f.class_name.clone(),
                type_handling: f.type_handling,
            })
            .collect();

        (objects, fields)
    }
}
