//! soql_gen library - SOQL query generation from annotated data models
//!
//! Validates object/field declarations against a type model, builds a schema
//! graph of query objects, and compiles each object into a SELECT statement
//! with relationship sub-queries.

pub mod cli;
pub mod commands;
pub mod compiler;
pub mod config;
pub mod declarations;
pub mod diagnostics;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod schema;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
