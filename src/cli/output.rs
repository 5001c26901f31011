//! Output formatting for docverify.
//!
//! Provides terminal, JSON, and JUnit XML output formatters.
//!
//! All formatters produce valid output for any ValidationReport input,
//! including an empty one.

use crate::checks::{self, RuleTable};
use crate::config::OutputFormat;
use crate::engine::result::{RiskLevel, ValidationReport, ValidationResult};
use crate::error::DocVerifyError;

const RULE: &str = "--------------------------------------------------------------------------------";

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> Result<String, DocVerifyError>;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, quiet: bool) -> Self {
        TerminalFormatter { color, quiet }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn risk(&self, level: RiskLevel, text: &str) -> String {
        match level {
            RiskLevel::Low => self.green(text),
            RiskLevel::Elevated => self.yellow(text),
            RiskLevel::High => self.red(text),
        }
    }

    fn format_result(&self, result: &ValidationResult, output: &mut String) {
        let doc = &result.document;
        output.push_str(&format!("Document: {}\n", doc.file_path.display()));
        output.push_str(&format!(
            "Type: {}  Customer: {} ({})\n",
            doc.document_type, doc.customer_name, doc.customer_id
        ));

        let status = if result.is_valid {
            self.green("Valid Document")
        } else {
            self.red("Invalid Document")
        };
        output.push_str(&format!("Status: {}\n", status));
        output.push_str(&format!(
            "Risk Score: {} ({})\n\n",
            self.risk(result.risk_level(), &format!("{}/100", result.risk_score)),
            result.risk_level()
        ));

        output.push_str("VALIDATION CHECKS\n");
        for check in &result.checks {
            let status = if check.passed {
                self.green("[PASS]")
            } else {
                self.red("[FAIL]")
            };
            output.push_str(&format!("  {} {}: {}\n", status, check.check_type, check.details));
        }

        if !result.anomalies.is_empty() {
            output.push_str("\nDETECTED ANOMALIES\n");
            for anomaly in &result.anomalies {
                output.push_str(&format!("  {} {}\n", self.red("!"), anomaly));
            }
        }

        output.push_str("\nRECOMMENDATIONS\n");
        for rec in &result.recommendations {
            output.push_str(&format!("  - {}\n", rec));
        }
        output.push('\n');
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, DocVerifyError> {
        let mut output = String::new();

        output.push_str(RULE);
        output.push('\n');
        output.push_str("docverify validation report\n");
        output.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%dT%H:%M:%SZ")
        ));
        output.push_str(RULE);
        output.push_str("\n\n");

        for result in &report.results {
            if self.quiet && result.is_valid {
                continue;
            }
            self.format_result(result, &mut output);
        }

        let summary = report.summary();
        output.push_str(RULE);
        output.push('\n');
        output.push_str(&format!(
            "SUMMARY: {} valid, {} invalid, {} high risk ({} documents)\n",
            summary.valid, summary.invalid, summary.high_risk, summary.total
        ));
        output.push_str(&format!("Mean risk score: {:.1}\n", summary.mean_risk_score));

        let (exit_code, exit_desc) = if summary.invalid > 0 {
            (1, "invalid documents detected")
        } else {
            (0, "all documents valid")
        };
        output.push_str(&format!("Exit code: {} ({})\n", exit_code, exit_desc));
        output.push_str(RULE);

        Ok(output)
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ValidationReport,
    summary: crate::ResultSummary,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, DocVerifyError> {
        let body = JsonReport {
            report,
            summary: report.summary(),
        };
        let json = if self.pretty {
            serde_json::to_string_pretty(&body)?
        } else {
            serde_json::to_string(&body)?
        };
        Ok(json)
    }
}

/// JUnit XML formatter
///
/// Each document is a test suite and each check a test case.
pub struct JunitFormatter;

impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }

    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }
}

impl Default for JunitFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JunitFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, DocVerifyError> {
        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

        let total: usize = report.results.iter().map(|r| r.checks.len()).sum();
        let failures: usize = report.results.iter().map(|r| r.failed_checks().count()).sum();
        output.push_str(&format!(
            "<testsuites tests=\"{}\" failures=\"{}\" errors=\"0\">\n",
            total, failures
        ));

        for result in &report.results {
            let suite_name = format!(
                "{}:{}",
                result.document.document_type,
                result.document.file_path.display()
            );
            output.push_str(&format!(
                "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\" timestamp=\"{}\">\n",
                Self::escape_xml(&suite_name),
                result.checks.len(),
                result.failed_checks().count(),
                result.validation_date.format("%Y-%m-%dT%H:%M:%S")
            ));
            output.push_str("    <properties>\n");
            output.push_str(&format!(
                "      <property name=\"risk_score\" value=\"{}\" />\n",
                result.risk_score
            ));
            output.push_str(&format!(
                "      <property name=\"customer_id\" value=\"{}\" />\n",
                Self::escape_xml(&result.document.customer_id)
            ));
            output.push_str("    </properties>\n");

            let classname = format!("docverify.{}", result.document.document_type);
            for check in &result.checks {
                output.push_str(&format!(
                    "    <testcase name=\"{}\" classname=\"{}\">\n",
                    Self::escape_xml(&check.check_type),
                    Self::escape_xml(&classname)
                ));
                if check.passed {
                    output.push_str(&format!(
                        "      <system-out>{}</system-out>\n",
                        Self::escape_xml(&check.details)
                    ));
                } else {
                    output.push_str(&format!(
                        "      <failure message=\"{}\">{}</failure>\n",
                        Self::escape_xml(&check.details),
                        Self::escape_xml(check_anomaly(result, &check.check_type).unwrap_or(""))
                    ));
                }
                output.push_str("    </testcase>\n");
            }

            output.push_str("  </testsuite>\n");
        }

        output.push_str("</testsuites>");
        Ok(output)
    }
}

/// Anomaly raised by one failed check of a result.
///
/// Known types look the check up in the built-in rule table. An
/// unrecognized type has a single check whose anomaly is the result's only one.
fn check_anomaly<'a>(result: &'a ValidationResult, check_type: &str) -> Option<&'a str> {
    match result.document.document_type.known() {
        Some(document_type) => checks::rule_table(document_type)
            .rule(check_type)
            .and_then(|rule| rule.anomaly),
        None => result.anomalies.first().map(String::as_str),
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(format: OutputFormat, color: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(color, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Junit => Box::new(JunitFormatter::new()),
    }
}

/// Render rule tables for the `list` command.
pub fn format_rule_tables(tables: &[&RuleTable]) -> String {
    let mut output = String::from("Available checks:\n");

    for table in tables {
        output.push('\n');
        output.push_str(&format!(
            "{} ({}): base risk {}, +{} per failed check\n",
            table.document_type.display_name().to_uppercase(),
            table.document_type,
            table.base_risk,
            table.failure_penalty
        ));
        for rule in table.rules {
            let kind = if rule.is_deterministic() {
                "fixed".to_string()
            } else {
                format!("p={:.2}", rule.pass_probability)
            };
            output.push_str(&format!("  {:<30} {}\n", rule.name, kind));
        }
    }

    output
}
