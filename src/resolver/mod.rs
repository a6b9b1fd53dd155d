//! Symbol resolution capability.
//!
//! The core never inspects source code itself. Every question about the
//! current program snapshot ("does this type still exist", "what is the type
//! of this member") goes through a `SymbolResolver`, and the answers are
//! requested again on every compilation pass.
//!
//! Handles returned by a resolver are opaque and only valid for the pass that
//! produced them. The schema graph stores primitive identifiers (class name,
//! property name) instead, so nothing in it can go stale.

mod manifest;

pub use manifest::ManifestResolver;

use serde::Serialize;

use crate::declarations::{DeclarationRef, LocationHint};

/// Opaque reference to a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeHandle(usize);

impl TypeHandle {
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> usize {
        self.0
    }
}

/// Opaque reference to a resolved member of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberHandle {
    owner: TypeHandle,
    index: usize,
}

impl MemberHandle {
    pub fn new(owner: TypeHandle, index: usize) -> Self {
        Self { owner, index }
    }

    pub fn owner(&self) -> TypeHandle {
        self.owner
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Declared accessibility of an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Public,
    Internal,
    ProtectedInternal,
    Protected,
    Private,
}

/// Write accessor of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setter {
    pub accessibility: Accessibility,
    /// One-time write during construction
    pub init_only: bool,
}

impl Setter {
    /// A deserializer can assign through this setter.
    ///
    /// Init-only setters are always usable; otherwise the setter must not be
    /// private or protected.
    pub fn is_writable(&self) -> bool {
        self.init_only
            || !matches!(
                self.accessibility,
                Accessibility::Private | Accessibility::Protected
            )
    }
}

/// Semantic type information of a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescription {
    pub type_name: String,
    pub is_collection: bool,
    /// Present only when `is_collection`
    pub element_type: Option<String>,
    pub is_value_type: bool,
    pub is_nullable: bool,
}

/// Lookups against the current program snapshot.
///
/// Implementations must be idempotent within a pass. A `None` answer means
/// the symbol does not exist (or is not usable) in this snapshot.
pub trait SymbolResolver {
    /// Resolve a public type by its fully-qualified name.
    fn resolve_type(&self, class_name: &str) -> Option<TypeHandle>;

    /// Resolve a member of a type by name.
    fn resolve_member(&self, class_name: &str, property_name: &str) -> Option<MemberHandle>;

    fn has_default_constructor(&self, ty: TypeHandle) -> bool;

    /// The member's write accessor, `None` when it has none.
    fn setter(&self, member: MemberHandle) -> Option<Setter>;

    fn describe_type(&self, member: MemberHandle) -> TypeDescription;

    /// Where the annotation behind a declaration lives, for diagnostics.
    fn locate(&self, declaration: DeclarationRef<'_>) -> Option<LocationHint>;
}
