//! Document intake.
//!
//! Turns a file on disk plus the customer details entered with it into a
//! [`Document`]. Uploads are size-checked and, when an upload directory is
//! configured, copied there for the duration of processing.
//!
//! Intake failures are errors, not validation results: a file that cannot be
//! read never reaches the validator.

use crate::config::{DocVerifyConfig, DEFAULT_MAX_FILE_SIZE};
use crate::error::DocVerifyError;
use crate::{DeclaredType, Document};
use chrono::Utc;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Placeholder for customer fields left blank.
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

/// Customer details captured alongside an upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeForm {
    pub document_type: String,
    pub customer_name: Option<String>,
    pub customer_id: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

impl IntakeForm {
    pub fn new(document_type: impl Into<String>) -> Self {
        IntakeForm {
            document_type: document_type.into(),
            ..Default::default()
        }
    }

    pub fn customer(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self.customer_id = Some(id.into());
        self
    }

    /// Add a `KEY=VALUE` metadata entry.
    pub fn parse_metadata(&mut self, entry: &str) -> Result<(), DocVerifyError> {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| DocVerifyError::InvalidMetadata(format!("'{}' is not KEY=VALUE", entry)))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(DocVerifyError::InvalidMetadata(format!(
                "'{}' has an empty key",
                entry
            )));
        }
        self.metadata.insert(key.to_string(), value.trim().to_string());
        Ok(())
    }
}

/// Accepts uploads and builds documents from them.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentIntake {
    upload_dir: Option<PathBuf>,
    max_file_size: u64,
}

impl Default for DocumentIntake {
    fn default() -> Self {
        DocumentIntake {
            upload_dir: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl DocumentIntake {
    pub fn new(upload_dir: Option<PathBuf>, max_file_size: u64) -> Self {
        DocumentIntake {
            upload_dir,
            max_file_size,
        }
    }

    pub fn from_config(config: &DocVerifyConfig) -> Self {
        Self::new(config.upload_dir.clone(), config.max_file_size)
    }

    pub fn upload_dir(&self) -> Option<&Path> {
        self.upload_dir.as_deref()
    }

    /// Accept an uploaded file and build its document descriptor.
    pub fn accept(&self, path: &Path, form: &IntakeForm) -> Result<Document, DocVerifyError> {
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DocVerifyError::FileNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(DocVerifyError::io(format!("stat {}", path.display()), e)),
        };

        if !meta.is_file() {
            return Err(DocVerifyError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        if meta.len() > self.max_file_size {
            return Err(DocVerifyError::FileTooLarge {
                path: path.to_path_buf(),
                size: meta.len(),
                limit: self.max_file_size,
            });
        }

        let file_path = match &self.upload_dir {
            Some(dir) => self.store(path, dir)?,
            None => path.to_path_buf(),
        };
        debug!(file = %file_path.display(), size = meta.len(), "accepted upload");

        Ok(Document {
            file_path,
            document_type: DeclaredType::from(form.document_type.as_str()),
            customer_name: or_unknown(form.customer_name.as_deref()),
            customer_id: or_unknown(form.customer_id.as_deref()),
            upload_date: Utc::now(),
            metadata: form.metadata.clone(),
        })
    }

    /// Accept a batch of uploads sharing one form.
    ///
    /// With an upload directory, two different files with the same file name
    /// are rejected before anything is copied.
    pub fn accept_all(&self, paths: &[PathBuf], form: &IntakeForm) -> Result<Vec<Document>, DocVerifyError> {
        if self.upload_dir.is_some() {
            let mut stored: HashMap<&OsStr, (&Path, PathBuf)> = HashMap::new();
            for path in paths {
                let Some(name) = path.file_name() else {
                    continue;
                };
                // unreadable paths are reported by accept
                let Ok(source) = fs::canonicalize(path) else {
                    continue;
                };
                match stored.entry(name) {
                    Entry::Occupied(entry) => {
                        let (first, first_source) = entry.get();
                        if *first_source != source {
                            return Err(DocVerifyError::UploadNameCollision {
                                name: name.to_string_lossy().into_owned(),
                                first: first.to_path_buf(),
                                second: path.clone(),
                            });
                        }
                    }
                    Entry::Vacant(entry) => {
                        entry.insert((path.as_path(), source));
                    }
                }
            }
        }

        paths.iter().map(|path| self.accept(path, form)).collect()
    }

    fn store(&self, path: &Path, dir: &Path) -> Result<PathBuf, DocVerifyError> {
        fs::create_dir_all(dir)
            .map_err(|e| DocVerifyError::io(format!("create upload dir {}", dir.display()), e))?;

        let name = path.file_name().ok_or_else(|| DocVerifyError::NotAFile {
            path: path.to_path_buf(),
        })?;
        let dest = dir.join(name);

        // copying a file onto itself truncates it
        if dest.exists() && canonical(&dest)? == canonical(path)? {
            debug!(file = %dest.display(), "upload already in upload dir");
            return Ok(dest);
        }

        fs::copy(path, &dest)
            .map_err(|e| DocVerifyError::io(format!("copy upload to {}", dest.display()), e))?;
        info!(from = %path.display(), to = %dest.display(), "stored upload");
        Ok(dest)
    }
}

fn canonical(path: &Path) -> Result<PathBuf, DocVerifyError> {
    fs::canonicalize(path).map_err(|e| DocVerifyError::io(format!("resolve {}", path.display()), e))
}

fn or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN_CUSTOMER.to_string(),
    }
}
