//! Validated, queryable object and field model.

use std::cell::OnceCell;

use crate::declarations::{FieldDeclaration, ObjectDeclaration, TypeHandling};
use crate::resolver::TypeDescription;

/// Type name given to fields whose member could not be resolved.
pub const UNRESOLVED_TYPE_NAME: &str = "object";

/// Outcome of resolving a field's backing member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Resolved(TypeDescription),
    /// Member missing from the current snapshot; treated as a plain nullable
    /// `object` so the rest of the object still compiles.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryField {
    pub field_name: String,
    pub property_name: String,
    pub field_type: FieldType,
    /// Effective mode: the field override, else the owning object's
    pub type_handling: TypeHandling,
}

impl QueryField {
    pub fn resolved(decl: &FieldDeclaration, description: TypeDescription, type_handling: TypeHandling) -> Self {
        Self {
            field_name: decl.field_name.clone(),
            property_name: decl.property_name.clone(),
            field_type: FieldType::Resolved(description),
            type_handling,
        }
    }

    pub fn unresolved(decl: &FieldDeclaration, type_handling: TypeHandling) -> Self {
        Self {
            field_name: decl.field_name.clone(),
            property_name: decl.property_name.clone(),
            field_type: FieldType::Unresolved,
            type_handling,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.field_type, FieldType::Resolved(_))
    }

    pub fn type_name(&self) -> &str {
        match &self.field_type {
            FieldType::Resolved(d) => &d.type_name,
            FieldType::Unresolved => UNRESOLVED_TYPE_NAME,
        }
    }

    pub fn is_collection(&self) -> bool {
        match &self.field_type {
            FieldType::Resolved(d) => d.is_collection,
            FieldType::Unresolved => false,
        }
    }

    pub fn collection_element_type(&self) -> Option<&str> {
        match &self.field_type {
            FieldType::Resolved(d) if d.is_collection => d.element_type.as_deref(),
            _ => None,
        }
    }

    pub fn is_value_type(&self) -> bool {
        match &self.field_type {
            FieldType::Resolved(d) => d.is_value_type,
            FieldType::Unresolved => false,
        }
    }

    pub fn is_nullable(&self) -> bool {
        match &self.field_type {
            FieldType::Resolved(d) => d.is_nullable,
            FieldType::Unresolved => true,
        }
    }

    /// Class name to look up in the schema graph: the element type for
    /// collections, the member type otherwise, without nullability markers.
    pub fn lookup_type(&self) -> &str {
        let name = match self.collection_element_type() {
            Some(element) if self.is_collection() => element,
            _ => self.type_name(),
        };
        name.trim_matches('?')
    }
}

/// One keyed object view with its fields in declaration order.
///
/// Read-only after construction apart from the projection cache, which the
/// compiler fills at most once.
#[derive(Debug, Clone)]
pub struct QueryObject {
    pub object_name: String,
    pub class_name: String,
    pub key: String,
    pub key_required: bool,
    pub type_handling: TypeHandling,
    pub fields: Vec<QueryField>,
    pub(crate) projected: OnceCell<Vec<String>>,
}

impl QueryObject {
    pub fn new(decl: &ObjectDeclaration, fields: Vec<QueryField>) -> Self {
        Self {
            object_name: decl.object_name.clone(),
            class_name: decl.class_name.clone(),
            key: decl.key.clone(),
            key_required: decl.key_required,
            type_handling: decl.type_handling,
            fields,
            projected: OnceCell::new(),
        }
    }

    /// Projected field paths, if already computed in this pass.
    pub fn cached_projection(&self) -> Option<&[String]> {
        self.projected.get().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decl() -> FieldDeclaration {
        FieldDeclaration::new("Owner", "K", "Owner", "App.Account")
    }

    fn description(type_name: &str, element: Option<&str>) -> TypeDescription {
        TypeDescription {
            type_name: type_name.to_string(),
            is_collection: element.is_some(),
            element_type: element.map(str::to_string),
            is_value_type: false,
            is_nullable: type_name.ends_with('?'),
        }
    }

    #[rstest]
    fn test_unresolved_fallback() {
        let field = QueryField::unresolved(&decl(), TypeHandling::Coerce);
        assert!(!field.is_resolved());
        assert_eq!(field.type_name(), "object");
        assert!(!field.is_collection());
        assert!(field.is_nullable());
        assert!(!field.is_value_type());
        assert_eq!(field.collection_element_type(), None);
        assert_eq!(field.type_handling, TypeHandling::Coerce);
    }

    #[rstest]
    #[case("App.User?", None, "App.User")]
    #[case("App.User", None, "App.User")]
    #[case("List<App.Contact>?", Some("App.Contact"), "App.Contact")]
    #[case("App.Contact?[]", Some("App.Contact?"), "App.Contact")]
    fn test_lookup_type(#[case] type_name: &str, #[case] element: Option<&str>, #[case] expected: &str) {
        let field = QueryField::resolved(&decl(), description(type_name, element), TypeHandling::Strict);
        assert_eq!(field.lookup_type(), expected);
    }

    #[rstest]
    fn test_new_object_has_empty_cache() {
        let obj = ObjectDeclaration::new("Account", "K", "App.Account");
        let query_object = QueryObject::new(&obj, vec![]);
        assert!(query_object.cached_projection().is_none());
        assert_eq!(query_object.object_name, "Account");
    }
}
