//! docverify library
//!
//! Document validation for customer onboarding demos.
//!
//! This library provides:
//! - Rule tables for bank statements, payslips, residency permits, PPSN records and tax records
//! - A validator that turns rule outcomes into a verdict, risk score, anomalies and recommendations
//! - Injectable, seedable random sources standing in for real document inspection
//! - Upload intake and terminal, JSON and JUnit XML reporting
//!
//! # Example
//!
//! ```
//! use docverify::{validate_document, Document, DocumentType};
//!
//! let document = Document::new("statement.pdf", DocumentType::BankStatement, "Aoife Kelly", "C-1001");
//! let result = validate_document(document, Some(42));
//! assert!(result.risk_score <= 100);
//! assert_eq!(result.is_valid, result.checks.iter().all(|c| c.passed));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod intake;
pub mod random;
pub mod version;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use config::{DocVerifyConfig, OutputFormat};
pub use document::{DeclaredType, Document, DocumentType};
pub use engine::result::{ResultSummary, RiskLevel, ValidationReport, ValidationResult};
pub use engine::validator::{DocumentValidator, ValidatorConfig};
pub use error::{ConfigError, DocVerifyError};
pub use random::{RandomSource, RngSource};

/// A single named pass/fail assessment within a validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCheck {
    /// Check label (e.g., "Balance Calculation")
    pub check_type: String,
    pub passed: bool,
    /// What the check found
    pub details: String,
}

impl ValidationCheck {
    pub fn new(check_type: impl Into<String>, passed: bool, details: impl Into<String>) -> Self {
        ValidationCheck {
            check_type: check_type.into(),
            passed,
            details: details.into(),
        }
    }
}

impl fmt::Display for ValidationCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "{}: {} ({})", status, self.check_type, self.details)
    }
}

/// Validate one document with the built-in rule tables.
///
/// With a seed the outcome is reproducible; without one the draws come from
/// OS entropy.
pub fn validate_document(document: Document, seed: Option<u64>) -> ValidationResult {
    let validator = DocumentValidator::default();
    match seed {
        Some(seed) => validator.validate(document, &mut RngSource::seeded(seed)),
        None => validator.validate(document, &mut RngSource::from_entropy()),
    }
}
