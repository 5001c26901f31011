//! Payslip rules.

use super::{CheckRule, RuleTable};
use crate::DocumentType;

pub static RULES: RuleTable = RuleTable {
    document_type: DocumentType::Payslip,
    base_risk: 15,
    failure_penalty: 25,
    valid_recommendation: "Payslip appears valid - proceed with standard processing",
    review_recommendation: "Request additional verification from customer",
    rules: &[
        CheckRule {
            name: "Employer Verification",
            pass_probability: 0.8,
            passed_details: "Employer details match registered business",
            failed_details: "Employer details could not be verified",
            anomaly: Some("Employer not found in registered business database"),
            escalation: Some("Verify employer existence through Companies Registration Office"),
        },
        CheckRule {
            name: "Tax Calculation",
            pass_probability: 0.8,
            passed_details: "Tax calculations are correct",
            failed_details: "Discrepancies found in tax calculations",
            anomaly: Some("Tax calculation does not match standard rates for income level"),
            escalation: None,
        },
        CheckRule {
            name: "Salary Consistency",
            pass_probability: 0.8,
            passed_details: "Salary figures are consistent throughout document",
            failed_details: "Inconsistent salary figures detected",
            anomaly: Some("Gross salary does not match sum of net pay and deductions"),
            escalation: None,
        },
        CheckRule {
            name: "Document Format",
            pass_probability: 1.0,
            passed_details: "Document format matches standard payslip format",
            failed_details: "Document format does not match standard payslip format",
            anomaly: None,
            escalation: None,
        },
    ],
};
