//! PPSN document rules.
//!
//! A PPS Number is 7 digits followed by 1-2 letters. The format check is
//! deterministic here; name and date-of-birth matching are mocked.

use super::{CheckRule, RuleTable};
use crate::DocumentType;

pub static RULES: RuleTable = RuleTable {
    document_type: DocumentType::Ppsn,
    base_risk: 15,
    failure_penalty: 25,
    valid_recommendation: "PPSN document appears valid - proceed with standard processing",
    review_recommendation: "Request additional identification documents",
    rules: &[
        CheckRule {
            name: "PPSN Format",
            pass_probability: 1.0,
            passed_details: "PPSN format is valid (7 digits + 1-2 letters)",
            failed_details: "PPSN format is invalid (expected 7 digits + 1-2 letters)",
            anomaly: None,
            escalation: None,
        },
        CheckRule {
            name: "Document Format",
            pass_probability: 1.0,
            passed_details: "Document format matches official PPSN documentation",
            failed_details: "Document format does not match official PPSN documentation",
            anomaly: None,
            escalation: None,
        },
        CheckRule {
            name: "Name Matching",
            pass_probability: 0.8,
            passed_details: "Name on document matches application name",
            failed_details: "Name discrepancy detected",
            anomaly: Some("Name on PPSN document does not match name on application"),
            escalation: Some("Verify name change documentation if applicable"),
        },
        CheckRule {
            name: "DOB Consistency",
            pass_probability: 0.8,
            passed_details: "Date of birth is consistent with other documents",
            failed_details: "Date of birth discrepancy detected",
            anomaly: Some(
                "Date of birth on PPSN document does not match other provided documents",
            ),
            escalation: None,
        },
    ],
};
