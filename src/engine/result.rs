//! Result aggregation and reporting.
//!
//! Holds per-document validation results, the multi-document report, and
//! summary statistics.

use crate::{Document, ValidationCheck};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Risk band used when presenting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Score below 30
    Low,
    /// Score from 30 to 69
    Elevated,
    /// Score of 70 or more
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            RiskLevel::Low
        } else if score < 70 {
            RiskLevel::Elevated
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Elevated => write!(f, "Elevated"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub document: Document,
    /// True only when every check passed
    pub is_valid: bool,
    /// 0-100, where 100 is highest risk
    pub risk_score: u8,
    pub checks: Vec<ValidationCheck>,
    pub anomalies: Vec<String>,
    pub recommendations: Vec<String>,
    pub validation_date: DateTime<Utc>,
}

impl ValidationResult {
    /// Build a result, deriving the verdict from the checks and clamping the score.
    pub fn new(
        document: Document,
        checks: Vec<ValidationCheck>,
        risk_score: i32,
        anomalies: Vec<String>,
        recommendations: Vec<String>,
    ) -> Self {
        let is_valid = checks.iter().all(|c| c.passed);
        ValidationResult {
            document,
            is_valid,
            risk_score: clamp_risk(risk_score),
            checks,
            anomalies,
            recommendations,
            validation_date: Utc::now(),
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &ValidationCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Clamp a raw score into the 0-100 range.
pub fn clamp_risk(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSummary {
    pub total: u32,
    pub valid: u32,
    pub invalid: u32,
    pub high_risk: u32,
    pub mean_risk_score: f64,
}

/// Validation report covering every document in one run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        ValidationReport {
            generated_at: Utc::now(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: ValidationResult) {
        self.results.push(result);
    }

    pub fn has_invalid(&self) -> bool {
        self.results.iter().any(|r| !r.is_valid)
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();
        let mut risk_total: u64 = 0;

        for result in &self.results {
            summary.total += 1;
            if result.is_valid {
                summary.valid += 1;
            } else {
                summary.invalid += 1;
            }
            if result.risk_level() == RiskLevel::High {
                summary.high_risk += 1;
            }
            risk_total += u64::from(result.risk_score);
        }

        if summary.total > 0 {
            summary.mean_risk_score = risk_total as f64 / f64::from(summary.total);
        }

        summary
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ValidationResult> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        ValidationReport {
            generated_at: Utc::now(),
            results: iter.into_iter().collect(),
        }
    }
}
