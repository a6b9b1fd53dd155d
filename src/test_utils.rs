//! Shared test utilities for unit tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::declarations::{Manifest, TypeHandling};
use crate::resolver::ManifestResolver;
use crate::schema::{build, BuildOutput};

/// Create a temporary file containing the given content.
///
/// Used to hand manifests to commands that read from disk.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Parse a manifest fixture and run the validation pass over it.
pub fn build_fixture(json: &str) -> BuildOutput {
    let manifest = Manifest::from_json(json).expect("Fixture should parse");
    let (objects, fields) = manifest.declarations(TypeHandling::Strict);
    let resolver = ManifestResolver::new(&manifest);
    build(&objects, &fields, &resolver)
}
