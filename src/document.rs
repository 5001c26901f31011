//! Document descriptors submitted for validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Kinds of document the validator has rule tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Bank account statement
    BankStatement,
    /// Employer payslip
    Payslip,
    /// Irish Residency Permit
    Irp,
    /// Personal Public Service Number record
    Ppsn,
    /// Revenue tax record
    TaxRecord,
}

impl DocumentType {
    /// Every known document type, in display order.
    pub const ALL: [DocumentType; 5] = [
        DocumentType::BankStatement,
        DocumentType::Payslip,
        DocumentType::Irp,
        DocumentType::Ppsn,
        DocumentType::TaxRecord,
    ];

    /// Wire label, as accepted on the command line and emitted in JSON.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::BankStatement => "bank_statement",
            DocumentType::Payslip => "payslip",
            DocumentType::Irp => "irp",
            DocumentType::Ppsn => "ppsn",
            DocumentType::TaxRecord => "tax_record",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::BankStatement => "Bank Statement",
            DocumentType::Payslip => "Payslip",
            DocumentType::Irp => "Irish Residency Permit (IRP)",
            DocumentType::Ppsn => "PPSN Document",
            DocumentType::TaxRecord => "Tax Record",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DocumentType::ALL
            .into_iter()
            .find(|t| t.label() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown document type: '{}'. Valid types: bank_statement, payslip, irp, ppsn, tax_record",
                    s
                )
            })
    }
}

/// The document type a caller declared at intake.
///
/// Labels that do not name a known type are kept verbatim so the validator
/// can answer them with its rejection result instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeclaredType {
    Known(DocumentType),
    Unrecognized(String),
}

impl DeclaredType {
    pub fn known(&self) -> Option<DocumentType> {
        match self {
            DeclaredType::Known(t) => Some(*t),
            DeclaredType::Unrecognized(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DeclaredType::Known(t) => t.label(),
            DeclaredType::Unrecognized(raw) => raw,
        }
    }
}

impl From<DocumentType> for DeclaredType {
    fn from(t: DocumentType) -> Self {
        DeclaredType::Known(t)
    }
}

impl From<&str> for DeclaredType {
    fn from(s: &str) -> Self {
        match s.parse::<DocumentType>() {
            Ok(t) => DeclaredType::Known(t),
            Err(_) => DeclaredType::Unrecognized(s.to_string()),
        }
    }
}

impl From<String> for DeclaredType {
    fn from(s: String) -> Self {
        DeclaredType::from(s.as_str())
    }
}

impl From<DeclaredType> for String {
    fn from(t: DeclaredType) -> Self {
        match t {
            DeclaredType::Known(t) => t.label().to_string(),
            DeclaredType::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An uploaded document and the customer details captured alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub file_path: PathBuf,
    pub document_type: DeclaredType,
    pub customer_name: String,
    pub customer_id: String,
    pub upload_date: DateTime<Utc>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    /// Create a document uploaded now, with no metadata.
    pub fn new(
        file_path: impl Into<PathBuf>,
        document_type: impl Into<DeclaredType>,
        customer_name: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Document {
            file_path: file_path.into(),
            document_type: document_type.into(),
            customer_name: customer_name.into(),
            customer_id: customer_id.into(),
            upload_date: Utc::now(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_upload_date(mut self, upload_date: DateTime<Utc>) -> Self {
        self.upload_date = upload_date;
        self
    }
}
