//! Error types for docverify operations.
//!
//! Validation itself never fails; these cover intake, configuration and
//! output around it.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Error types for docverify operations.
#[derive(Debug, Error)]
pub enum DocVerifyError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("File {} is {size} bytes, over the {limit} byte limit", path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Uploads {} and {} would both be stored as {name}", first.display(), second.display())]
    UploadNameCollision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("I/O error in {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid metadata entry: {0}")]
    InvalidMetadata(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DocVerifyError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        DocVerifyError::Io {
            context: context.into(),
            source,
        }
    }
}
