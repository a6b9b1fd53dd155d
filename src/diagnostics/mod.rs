//! Diagnostic catalog and diagnostic records.
//!
//! Every expected failure of a compilation pass (rejected declaration,
//! dropped object, cyclic reference) is reported as a `Diagnostic` rather
//! than an error. Each kind has a stable code, a severity and a message
//! template; see `catalog.rs`.

mod catalog;
mod diagnostic;

pub use catalog::{DiagnosticKind, Severity};
pub use diagnostic::{Diagnostic, DiagnosticSummary};
