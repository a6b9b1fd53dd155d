//! Raw declaration records handed over by the upstream collector.
//!
//! Two flat lists make up the input of a compilation pass:
//!
//! - `ObjectDeclaration` - one per `SoqlObject` annotation on a class
//! - `FieldDeclaration` - one per `SoqlField` annotation on a member
//!
//! Records only carry stable string identifiers (class name, property name,
//! key). Anything that depends on the current program snapshot is looked up
//! again through a `SymbolResolver` on every pass.
//!
//! The `manifest` submodule defines the JSON format the collector writes.

mod manifest;
mod records;

pub use manifest::{FieldEntry, Manifest, ManifestError, MemberDecl, ObjectEntry, SetterDecl, TypeDecl};
pub use records::{DeclarationRef, FieldDeclaration, LocationHint, ObjectDeclaration, TypeHandling};
