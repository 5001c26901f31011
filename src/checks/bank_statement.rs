//! Bank statement rules.
//!
//! Template, logo and IBAN checks are deterministic. Balance reconciliation
//! and transaction pattern analysis are mocked inspections.

use super::{CheckRule, RuleTable};
use crate::DocumentType;

pub static RULES: RuleTable = RuleTable {
    document_type: DocumentType::BankStatement,
    base_risk: 10,
    failure_penalty: 20,
    valid_recommendation: "Document appears valid - proceed with standard processing",
    review_recommendation: "Request additional verification from customer",
    rules: &[
        CheckRule {
            name: "Template Verification",
            pass_probability: 1.0,
            passed_details: "Document matches known bank statement template",
            failed_details: "Document does not match any known bank statement template",
            anomaly: None,
            escalation: None,
        },
        CheckRule {
            name: "Logo Verification",
            pass_probability: 1.0,
            passed_details: "Bank logo position and appearance verified",
            failed_details: "Bank logo position or appearance could not be verified",
            anomaly: None,
            escalation: None,
        },
        CheckRule {
            name: "Account Number Format",
            pass_probability: 1.0,
            passed_details: "IBAN format is valid",
            failed_details: "IBAN format is invalid",
            anomaly: None,
            escalation: None,
        },
        CheckRule {
            name: "Balance Calculation",
            pass_probability: 0.7,
            passed_details: "Opening balance + transactions = closing balance",
            failed_details: "Discrepancy detected in balance calculation",
            anomaly: Some(
                "Balance discrepancy: Opening balance + transactions does not equal closing balance",
            ),
            escalation: Some("Verify transaction history with issuing bank"),
        },
        CheckRule {
            name: "Transaction Pattern Analysis",
            pass_probability: 0.7,
            passed_details: "Transaction patterns appear normal",
            failed_details: "Unusual transaction patterns detected",
            anomaly: Some("Unusual pattern: Multiple large round-sum deposits detected"),
            escalation: None,
        },
    ],
};
