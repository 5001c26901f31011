//! Report formatting across all output formats.

use crate::mocks::{one_of_each, sample_document, ScriptedSource};
use docverify::cli::args::OutputFormat;
use docverify::cli::output::{get_formatter, JsonFormatter, JunitFormatter, OutputFormatter, TerminalFormatter};
use docverify::{DocumentType, DocumentValidator, ValidationReport};

fn mixed_report() -> ValidationReport {
    let validator = DocumentValidator::default();
    let mut report = ValidationReport::new();
    report.add_result(validator.validate(
        sample_document(DocumentType::BankStatement),
        &mut ScriptedSource::all_pass(0),
    ));
    report.add_result(validator.validate(
        sample_document(DocumentType::Payslip),
        &mut ScriptedSource::all_fail(0),
    ));
    report.add_result(validator.validate(sample_document("passport"), &mut ScriptedSource::all_pass(0)));
    report
}

#[test]
fn test_every_format_handles_empty_report() {
    let report = ValidationReport::new();
    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Junit] {
        let out = get_formatter(format, false, false).format(&report).unwrap();
        assert!(!out.is_empty(), "{:?}", format);
    }
}

#[test]
fn test_terminal_report_sections() {
    let out = TerminalFormatter::new(false, false).format(&mixed_report()).unwrap();

    assert!(out.contains("Status: Valid Document"));
    assert!(out.contains("Status: Invalid Document"));
    assert!(out.contains("[FAIL] Employer Verification"));
    assert!(out.contains("DETECTED ANOMALIES"));
    assert!(out.contains("Unknown document type"));
    assert!(out.contains("SUMMARY: 1 valid, 2 invalid, 2 high risk (3 documents)"));
    assert!(out.contains("Exit code: 1"));
}

#[test]
fn test_terminal_quiet_keeps_invalid() {
    let out = TerminalFormatter::new(false, true).format(&mixed_report()).unwrap();
    assert!(!out.contains("Type: bank_statement"));
    assert!(out.contains("Type: payslip"));
}

#[test]
fn test_json_report_parses() {
    let out = JsonFormatter::new(false).format(&mixed_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["is_valid"], true);
    assert_eq!(results[0]["document"]["document_type"], "bank_statement");
    assert_eq!(results[1]["risk_score"], 90);
    assert_eq!(results[2]["document"]["document_type"], "passport");
    assert_eq!(value["summary"]["invalid"], 2);
}

#[test]
fn test_json_keeps_metadata() {
    let report: ValidationReport = one_of_each()
        .into_iter()
        .map(|d| DocumentValidator::default().validate(d, &mut ScriptedSource::all_pass(0)))
        .collect();
    let out = JsonFormatter::new(true).format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    for result in value["results"].as_array().unwrap() {
        assert_eq!(result["document"]["metadata"]["channel"], "branch");
        assert_eq!(result["document"]["customer_id"], "CUST-2024-0042");
    }
}

#[test]
fn test_junit_counts() {
    let out = JunitFormatter::new().format(&mixed_report()).unwrap();

    // 5 bank + 4 payslip + 1 rejection
    assert!(out.contains("<testsuites tests=\"10\" failures=\"4\" errors=\"0\">"));
    assert_eq!(out.matches("<testsuite ").count(), 3);
    assert!(out.contains("<property name=\"risk_score\" value=\"100\" />"));
    assert!(out.ends_with("</testsuites>"));
}
