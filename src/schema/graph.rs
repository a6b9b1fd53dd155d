//! The validated schema graph.

use std::collections::BTreeMap;

use serde::Serialize;

use super::model::QueryObject;

/// Identity of an object view in the graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ObjectKey {
    pub class_name: String,
    pub key: String,
}

impl ObjectKey {
    pub fn new(class_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            key: key.into(),
        }
    }
}

/// Mapping from `(class_name, key)` to the resolved `QueryObject`.
///
/// Nested references between objects are logical: a field points at another
/// object only through a lookup by class name and key. Iteration order is
/// `(class_name, key)` ascending.
#[derive(Debug, Clone, Default)]
pub struct SchemaGraph {
    objects: BTreeMap<String, BTreeMap<String, QueryObject>>,
}

impl SchemaGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object, replacing any previous object with the same identity.
    pub fn insert(&mut self, object: QueryObject) {
        self.objects
            .entry(object.class_name.clone())
            .or_default()
            .insert(object.key.clone(), object);
    }

    pub fn get(&self, class_name: &str, key: &str) -> Option<&QueryObject> {
        self.objects.get(class_name)?.get(key)
    }

    pub fn contains(&self, class_name: &str, key: &str) -> bool {
        self.get(class_name, key).is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryObject> {
        self.objects.values().flat_map(BTreeMap::values)
    }

    pub fn keys(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.iter().map(|o| ObjectKey::new(&o.class_name, &o.key))
    }

    /// Total number of fields across all objects.
    pub fn field_count(&self) -> usize {
        self.iter().map(|o| o.fields.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::ObjectDeclaration;
    use rstest::rstest;

    fn object(class_name: &str, key: &str) -> QueryObject {
        QueryObject::new(&ObjectDeclaration::new("Obj", key, class_name), vec![])
    }

    #[rstest]
    fn test_empty_graph() {
        let graph = SchemaGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(graph.get("App.Account", "K").is_none());
    }

    #[rstest]
    fn test_lookup_by_class_and_key() {
        let mut graph = SchemaGraph::new();
        graph.insert(object("App.Account", "A"));
        graph.insert(object("App.Account", "B"));

        assert_eq!(graph.len(), 2);
        assert!(graph.contains("App.Account", "A"));
        assert!(graph.contains("App.Account", "B"));
        assert!(!graph.contains("App.Account", "C"));
        assert!(!graph.contains("App.User", "A"));
    }

    #[rstest]
    fn test_iteration_is_sorted() {
        let mut graph = SchemaGraph::new();
        graph.insert(object("App.User", "K"));
        graph.insert(object("App.Account", "Z"));
        graph.insert(object("App.Account", "A"));

        let keys: Vec<_> = graph.keys().collect();
        assert_eq!(
            keys,
            vec![
                ObjectKey::new("App.Account", "A"),
                ObjectKey::new("App.Account", "Z"),
                ObjectKey::new("App.User", "K"),
            ]
        );
    }
}
