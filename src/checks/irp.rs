//! Irish Residency Permit rules.
//!
//! Identity documents start from a higher base risk than financial ones, and
//! a failed security feature check goes to the fraud department.

use super::{CheckRule, RuleTable};
use crate::DocumentType;

pub static RULES: RuleTable = RuleTable {
    document_type: DocumentType::Irp,
    base_risk: 20,
    failure_penalty: 25,
    valid_recommendation: "IRP appears valid - proceed with standard processing",
    review_recommendation: "Request physical verification of original document",
    rules: &[
        CheckRule {
            name: "Document Format",
            pass_probability: 1.0,
            passed_details: "Document format matches official IRP card format",
            failed_details: "Document format does not match official IRP card format",
            anomaly: None,
            escalation: None,
        },
        CheckRule {
            name: "Security Features",
            pass_probability: 0.8,
            passed_details: "Security features present and valid",
            failed_details: "One or more security features could not be verified",
            anomaly: Some("Missing or altered security features detected"),
            escalation: Some("Escalate to fraud department for detailed investigation"),
        },
        CheckRule {
            name: "Expiration Date",
            pass_probability: 0.8,
            passed_details: "IRP is current and not expired",
            failed_details: "IRP appears to be expired",
            anomaly: Some("Document appears to be expired or date has been altered"),
            escalation: None,
        },
        CheckRule {
            name: "GNIB Number Format",
            pass_probability: 1.0,
            passed_details: "GNIB number format is valid",
            failed_details: "GNIB number format is invalid",
            anomaly: None,
            escalation: None,
        },
    ],
};
