//! Configuration file handling.
//!
//! This module provides loading and parsing of `.soql_gen.json` configuration files.
//! Every key is optional; a missing default file yields `ConfigFile::default()`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::declarations::TypeHandling;

pub const DEFAULT_CONFIG_FILE: &str = ".soql_gen.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub compiler: CompilerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Conversion mode for objects that don't declare one
    pub default_type_handling: TypeHandling,
    /// Treat warnings as failures when computing the exit status
    pub warnings_as_errors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl ConfigFile {
    /// Load configuration from `path`, or from `.soql_gen.json` in the current
    /// directory when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly named file doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound {
                        path: p.display().to_string(),
                    });
                }
                p.to_path_buf()
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        Self::from_file(&config_path)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use std::sync::{Mutex, OnceLock};
    use tempfile::NamedTempFile;

    fn test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    #[rstest]
    fn test_full_deserialization() {
        let json = r#"
        {
            "compiler": {
                "default_type_handling": "coerce",
                "warnings_as_errors": true
            },
            "logging": {
                "filter": "soql_gen=debug"
            }
        }
        "#;
        let config: ConfigFile = serde_json::from_str(json).unwrap();
        assert_eq!(config.compiler.default_type_handling, TypeHandling::Coerce);
        assert!(config.compiler.warnings_as_errors);
        assert_eq!(config.logging.filter, "soql_gen=debug");
    }

    #[rstest]
    fn test_empty_object_uses_defaults() {
        let config: ConfigFile = serde_json::from_str("{}").unwrap();
        assert_eq!(config.compiler.default_type_handling, TypeHandling::Strict);
        assert!(!config.compiler.warnings_as_errors);
        assert_eq!(config.logging.filter, "warn");
    }

    #[rstest]
    fn test_partial_section_uses_defaults() {
        let json = r#"{ "compiler": { "warnings_as_errors": true } }"#;
        let config: ConfigFile = serde_json::from_str(json).unwrap();
        assert_eq!(config.compiler.default_type_handling, TypeHandling::Strict);
        assert!(config.compiler.warnings_as_errors);
    }

    #[rstest]
    fn test_unknown_type_handling_rejected() {
        let json = r#"{ "compiler": { "default_type_handling": "loose" } }"#;
        assert!(serde_json::from_str::<ConfigFile>(json).is_err());
    }

    #[rstest]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "logging": { "filter": "trace" } }"#).unwrap();
        file.flush().unwrap();

        let config = ConfigFile::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[rstest]
    fn test_load_explicit_missing_file() {
        let result = ConfigFile::load(Some(Path::new("/nonexistent/.soql_gen.json")));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[rstest]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ invalid json }").unwrap();
        file.flush().unwrap();

        let result = ConfigFile::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::InvalidJson { .. })));
    }

    #[rstest]
    fn test_load_default_missing_file() {
        let _lock = test_lock().lock();
        let temp_dir = tempfile::tempdir().unwrap();
        let old_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&temp_dir).unwrap();

        let result = ConfigFile::load(None);

        std::env::set_current_dir(old_dir).unwrap();
        let config = result.unwrap();
        assert!(!config.compiler.warnings_as_errors);
    }

    #[rstest]
    fn test_load_default_file_from_current_dir() {
        let _lock = test_lock().lock();
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "compiler": { "warnings_as_errors": true } }"#,
        )
        .unwrap();

        let old_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&temp_dir).unwrap();

        let result = ConfigFile::load(None);

        std::env::set_current_dir(old_dir).unwrap();
        assert!(result.unwrap().compiler.warnings_as_errors);
    }
}
