use super::{CheckRule, RuleTable};
use crate::DocumentType;

pub static RULES: RuleTable = RuleTable {
    document_type: DocumentType::TaxRecord,
    base_risk: 25,
    failure_penalty: 20,
    valid_recommendation: "Tax record appears valid - proceed with standard processing",
    review_recommendation: "Request additional verification from tax authority",
    rules: &[
        CheckRule {
            name: "Document Format",
            pass_probability: 1.0,
            passed_details: "Document format matches official tax record format",
            failed_details: "Document format does not match official tax record format",
            anomaly: None,
            escalation: None,
        },
        CheckRule {
            name: "Tax Year Verification",
            pass_probability: 1.0,
            passed_details: "Tax year is current or recent",
            failed_details: "Tax year is outdated",
            anomaly: None,
            escalation: None,
        },
        CheckRule {
            name: "Income Consistency",
            pass_probability: 0.8,
            passed_details: "Income figures are consistent with other documents",
            failed_details: "Income discrepancies detected",
            anomaly: Some("Reported income does not match income on other documents"),
            escalation: Some("Cross-verify income with payslips and bank statements"),
        },
        CheckRule {
            name: "Tax Calculation",
            pass_probability: 0.8,
            passed_details: "Tax calculations appear correct",
            failed_details: "Tax calculation anomalies detected",
            anomaly: Some(
                "Tax amounts do not align with standard calculation for reported income",
            ),
            escalation: None,
        },
        CheckRule {
            name: "Official Stamps/Watermarks",
            pass_probability: 0.8,
            passed_details: "Official stamps/watermarks verified",
            failed_details: "Official stamps/watermarks could not be verified",
            anomaly: Some("Document lacks proper official authentication markers"),
            escalation: None,
        },
    ],
};
