//! Configuration for docverify runs.
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! file (or no file) is a valid configuration.
//!
//! ```
//! use docverify::config::DocVerifyConfig;
//!
//! let config = DocVerifyConfig::from_toml_str(r#"
//!     random_seed = 42
//!     upload_dir = "uploads"
//!     max_file_size = 5000000
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.max_file_size, 5_000_000);
//! ```

use crate::error::ConfigError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest upload accepted by default (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_000_000;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI/CD integration
    Junit,
}

/// Main docverify configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocVerifyConfig {
    /// Seed for reproducible validations. Unseeded runs draw from OS entropy.
    pub random_seed: Option<u64>,

    /// Directory uploads are copied into. Files are validated in place when unset.
    pub upload_dir: Option<PathBuf>,

    /// Upload size limit in bytes.
    pub max_file_size: u64,

    /// Default output format.
    pub format: OutputFormat,

    /// Colour terminal output.
    pub color: bool,
}

impl Default for DocVerifyConfig {
    fn default() -> Self {
        DocVerifyConfig {
            random_seed: None,
            upload_dir: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl DocVerifyConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML, or holds
    /// invalid values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: DocVerifyConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_size == 0 {
            return Err(ConfigError::Invalid(
                "max_file_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
