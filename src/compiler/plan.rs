//! Deserialization plan for compiled objects.
//!
//! The plan lists, per field, everything a downstream JSON deserializer needs
//! to map a result record back onto the annotated type: the JSON key, the
//! target member, its type shape and the conversion mode.

use serde::Serialize;

use crate::declarations::TypeHandling;
use crate::schema::{ObjectKey, QueryField, QueryObject, SchemaGraph};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectPlan {
    pub object_name: String,
    pub class_name: String,
    pub key: String,
    pub key_required: bool,
    pub type_handling: TypeHandling,
    pub fields: Vec<FieldPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlan {
    pub json_key: String,
    pub property_name: String,
    pub type_name: String,
    pub is_collection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    pub is_value_type: bool,
    pub is_nullable: bool,
    pub type_handling: TypeHandling,
    pub resolved: bool,
    /// Target object for nested references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<ObjectKey>,
}

impl ObjectPlan {
    pub fn for_object(obj: &QueryObject, graph: &SchemaGraph) -> Self {
        Self {
            object_name: obj.object_name.clone(),
            class_name: obj.class_name.clone(),
            key: obj.key.clone(),
            key_required: obj.key_required,
            type_handling: obj.type_handling,
            fields: obj
                .fields
                .iter()
                .map(|f| FieldPlan::for_field(f, &obj.key, graph))
                .collect(),
        }
    }
}

impl FieldPlan {
    fn for_field(field: &QueryField, key: &str, graph: &SchemaGraph) -> Self {
        let nested = graph
            .get(field.lookup_type(), key)
            .map(|target| ObjectKey::new(&target.class_name, &target.key));

        Self {
            json_key: field.field_name.clone(),
            property_name: field.property_name.clone(),
            type_name: field.type_name().to_string(),
            is_collection: field.is_collection(),
            element_type: field.collection_element_type().map(str::to_string),
            is_value_type: field.is_value_type(),
            is_nullable: field.is_nullable(),
            type_handling: field.type_handling,
            resolved: field.is_resolved(),
            nested,
        }
    }
}
