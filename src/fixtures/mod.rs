//! Collector manifests shared by unit tests.
//!
//! The JSON lives next to this file so integration tests can `include_str!`
//! the same documents.

/// Account with a nested collection (Contacts) and a nested singular reference (Owner).
pub const ACCOUNTS: &str = include_str!("accounts.json");

/// Two object declarations for `App.Account` with key `Q`.
pub const DUPLICATE_OBJECT: &str = include_str!("duplicate_object.json");

/// `App.Empty` is declared as an object but has no fields.
pub const OBJECT_WITHOUT_FIELDS: &str = include_str!("object_without_fields.json");

/// One field declaration per field rule violation, in rule order.
pub const INVALID_FIELDS: &str = include_str!("invalid_fields.json");

/// Object types that are missing, non-public or lack a default constructor.
pub const UNCONSTRUCTIBLE: &str = include_str!("unconstructible.json");

/// Object-level coerce mode with one strict field override.
pub const COERCION: &str = include_str!("coercion.json");

/// `App.Account` viewed through two keys; `App.User` only exists under one.
pub const MULTI_KEY: &str = include_str!("multi_key.json");

/// A -> B -> A through singular references, plus an unrelated C.
pub const CYCLE: &str = include_str!("cycle.json");

/// A node whose collection field holds nodes of the same type.
pub const SELF_REFERENCE: &str = include_str!("self_reference.json");

/// Two singular fields of `App.Order` referencing the same `App.Address` object.
pub const SHARED_NESTED: &str = include_str!("shared_nested.json");
