//! Document validator.
//!
//! Selects the rule table for a document's type, draws an outcome for each
//! rule, and aggregates the outcomes into a verdict, risk score, anomalies and
//! recommendations.
//!
//! # Totality
//!
//! Validation never fails:
//! - Known document type: every rule in its table is evaluated, in order
//! - Unrecognized type: a fixed rejection result with risk 100
//!
//! Draw order is fixed (one draw per non-deterministic rule, then one risk
//! adjustment), so a seeded source replays a validation exactly.

use crate::checks::{self, RuleTable};
use crate::engine::result::{ValidationReport, ValidationResult};
use crate::random::RandomSource;
use crate::{Document, DocumentType, ValidationCheck};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Check type reported when the document type is not recognized.
pub const DOCUMENT_TYPE_CHECK: &str = "Document Type";
const UNKNOWN_TYPE_MESSAGE: &str = "Unknown document type";
const UNKNOWN_TYPE_RECOMMENDATION: &str = "Please select a valid document type";

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Half-width of the uniform adjustment added to every risk score
    pub adjustment_spread: i32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            adjustment_spread: 10,
        }
    }
}

/// Rule-table driven document validator
#[derive(Debug, Clone)]
pub struct DocumentValidator {
    config: ValidatorConfig,
    tables: HashMap<DocumentType, RuleTable>,
}

impl DocumentValidator {
    /// Create a validator with the built-in rule tables
    pub fn new(config: ValidatorConfig) -> Self {
        let mut validator = DocumentValidator {
            config,
            tables: HashMap::new(),
        };
        for table in checks::all_rule_tables() {
            validator.register_table(*table);
        }
        validator
    }

    /// Register a rule table, replacing any table for the same document type
    pub fn register_table(&mut self, table: RuleTable) {
        self.tables.insert(table.document_type, table);
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn table(&self, document_type: DocumentType) -> &RuleTable {
        self.tables
            .get(&document_type)
            .unwrap_or_else(|| checks::rule_table(document_type))
    }

    /// Validate a single document
    pub fn validate<R>(&self, document: Document, rng: &mut R) -> ValidationResult
    where
        R: RandomSource + ?Sized,
    {
        match document.document_type.known() {
            Some(document_type) => {
                let table = self.table(document_type);
                self.evaluate(table, document, rng)
            }
            None => {
                warn!(
                    document_type = %document.document_type,
                    file = %document.file_path.display(),
                    "rejecting document with unrecognized type"
                );
                reject_unknown_type(document)
            }
        }
    }

    /// Validate documents in order, sharing one random source
    pub fn validate_all<R, I>(&self, documents: I, rng: &mut R) -> ValidationReport
    where
        R: RandomSource + ?Sized,
        I: IntoIterator<Item = Document>,
    {
        documents
            .into_iter()
            .map(|document| self.validate(document, rng))
            .collect()
    }

    fn evaluate<R>(&self, table: &RuleTable, document: Document, rng: &mut R) -> ValidationResult
    where
        R: RandomSource + ?Sized,
    {
        let mut checks = Vec::with_capacity(table.rules.len());
        let mut anomalies = Vec::new();
        let mut escalations = Vec::new();

        for rule in table.rules {
            let passed = rule.is_deterministic() || rng.passes(rule.pass_probability);
            debug!(
                document_type = %table.document_type,
                check = rule.name,
                passed,
                "evaluated check"
            );

            if !passed {
                anomalies.extend(rule.anomaly.map(str::to_string));
                escalations.extend(rule.escalation.map(str::to_string));
            }
            checks.push(ValidationCheck::new(rule.name, passed, rule.details(passed)));
        }

        let failed = checks.iter().filter(|c| !c.passed).count() as i32;
        let adjustment = rng.adjustment(self.config.adjustment_spread);
        let raw_score = table
            .base_risk
            .saturating_add(table.failure_penalty.saturating_mul(failed))
            .saturating_add(adjustment);
        debug!(
            base = table.base_risk,
            failed,
            adjustment,
            raw_score,
            "computed risk score"
        );

        let recommendations = if failed == 0 {
            vec![table.valid_recommendation.to_string()]
        } else {
            let mut recs = vec![table.review_recommendation.to_string()];
            recs.extend(escalations);
            recs
        };

        let result = ValidationResult::new(document, checks, raw_score, anomalies, recommendations);
        info!(
            document_type = %table.document_type,
            customer_id = %result.document.customer_id,
            is_valid = result.is_valid,
            risk_score = result.risk_score,
            "validated document"
        );
        result
    }
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

/// Fixed result for a document whose type has no rule table.
pub fn reject_unknown_type(document: Document) -> ValidationResult {
    ValidationResult::new(
        document,
        vec![ValidationCheck::new(
            DOCUMENT_TYPE_CHECK,
            false,
            UNKNOWN_TYPE_MESSAGE,
        )],
        100,
        vec![UNKNOWN_TYPE_MESSAGE.to_string()],
        vec![UNKNOWN_TYPE_RECOMMENDATION.to_string()],
    )
}
