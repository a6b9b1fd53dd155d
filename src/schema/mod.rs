//! Schema graph: validated query objects keyed by `(class_name, key)`.
//!
//! # Overview
//!
//! 1. **Builder** (`builder.rs`): validates object and field declarations
//!    against a `SymbolResolver` and emits diagnostics for rejected ones.
//! 2. **Model** (`model.rs`): `QueryObject` and `QueryField`, the resolved
//!    form the compiler walks.
//! 3. **Graph** (`graph.rs`): `SchemaGraph`, owning every `QueryObject`.
//!
//! A graph lives for one compilation pass. Fields reference other objects by
//! lookup only, never by pointer.

mod builder;
mod graph;
mod model;

pub use builder::{build, BuildOutput};
pub use graph::{ObjectKey, SchemaGraph};
pub use model::{FieldType, QueryField, QueryObject, UNRESOLVED_TYPE_NAME};
