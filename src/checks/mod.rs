//! Per-document-type rule tables.
//!
//! Each document type has one static [`RuleTable`]:
//! - Bank statements: template, logo and IBAN format, balance and transaction analysis
//! - Payslips: employer, tax calculation, salary consistency, format
//! - IRP: card format, security features, expiry, GNIB number
//! - PPSN: number format, document format, name and date-of-birth matching
//! - Tax records: format, tax year, income consistency, tax calculation, stamps
//!
//! Rules with a pass probability of `1.0` are deterministic template checks
//! and never draw from the random source. Every rule that can fail carries
//! anomaly text.

pub mod bank_statement;
pub mod irp;
pub mod payslip;
pub mod ppsn;
pub mod tax_record;

use crate::DocumentType;

/// One named check within a rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckRule {
    /// Label reported as the check type
    pub name: &'static str,
    /// Probability that the mocked inspection passes
    pub pass_probability: f64,
    /// Details reported when the check passes
    pub passed_details: &'static str,
    /// Details reported when the check fails
    pub failed_details: &'static str,
    /// Anomaly reported when the check fails
    pub anomaly: Option<&'static str>,
    /// Extra recommendation when the check fails
    pub escalation: Option<&'static str>,
}

impl CheckRule {
    /// Deterministic rules always pass and consume no randomness.
    pub fn is_deterministic(&self) -> bool {
        self.pass_probability >= 1.0
    }

    pub fn details(&self, passed: bool) -> &'static str {
        if passed {
            self.passed_details
        } else {
            self.failed_details
        }
    }
}

/// Scoring constants and rules for one document type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleTable {
    pub document_type: DocumentType,
    /// Risk before any failures are counted
    pub base_risk: i32,
    /// Risk added for every failed check
    pub failure_penalty: i32,
    /// Sole recommendation when every check passes
    pub valid_recommendation: &'static str,
    /// First recommendation when any check fails
    pub review_recommendation: &'static str,
    pub rules: &'static [CheckRule],
}

impl RuleTable {
    pub fn rule(&self, name: &str) -> Option<&CheckRule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

/// Get the rule table for a document type
pub fn rule_table(document_type: DocumentType) -> &'static RuleTable {
    match document_type {
        DocumentType::BankStatement => &bank_statement::RULES,
        DocumentType::Payslip => &payslip::RULES,
        DocumentType::Irp => &irp::RULES,
        DocumentType::Ppsn => &ppsn::RULES,
        DocumentType::TaxRecord => &tax_record::RULES,
    }
}

/// Get every rule table, in document type order
pub fn all_rule_tables() -> Vec<&'static RuleTable> {
    DocumentType::ALL.iter().map(|t| rule_table(*t)).collect()
}
