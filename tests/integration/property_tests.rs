//! Property tests over seeded validations.

use crate::mocks::sample_document;
use docverify::checks::rule_table;
use docverify::{DocumentType, DocumentValidator, RngSource};
use proptest::prelude::*;

fn arb_document_type() -> impl Strategy<Value = DocumentType> {
    prop::sample::select(DocumentType::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn property_verdict_is_conjunction_of_checks(seed in any::<u64>(), t in arb_document_type()) {
        let result = DocumentValidator::default()
            .validate(sample_document(t), &mut RngSource::seeded(seed));

        prop_assert_eq!(result.is_valid, result.checks.iter().all(|c| c.passed));
        prop_assert!(result.risk_score <= 100);
    }

    #[test]
    fn property_score_tracks_failures(seed in any::<u64>(), t in arb_document_type()) {
        let table = rule_table(t);
        let result = DocumentValidator::default()
            .validate(sample_document(t), &mut RngSource::seeded(seed));

        let failed = result.failed_checks().count() as i32;
        let centre = table.base_risk + table.failure_penalty * failed;
        let score = i32::from(result.risk_score);
        prop_assert!(
            score >= (centre - 10).clamp(0, 100) && score <= (centre + 10).clamp(0, 100),
            "score {} outside band around {}",
            score,
            centre
        );
    }

    #[test]
    fn property_anomalies_and_recommendations_follow_failures(
        seed in any::<u64>(),
        t in arb_document_type(),
    ) {
        let table = rule_table(t);
        let result = DocumentValidator::default()
            .validate(sample_document(t), &mut RngSource::seeded(seed));

        let failed_rules: Vec<_> = table
            .rules
            .iter()
            .filter(|r| result.checks.iter().any(|c| c.check_type == r.name && !c.passed))
            .collect();
        let expected_anomalies: Vec<String> =
            failed_rules.iter().filter_map(|r| r.anomaly).map(str::to_string).collect();
        prop_assert_eq!(&result.anomalies, &expected_anomalies);

        if result.is_valid {
            prop_assert_eq!(result.recommendations.len(), 1);
            prop_assert_eq!(result.recommendations[0].as_str(), table.valid_recommendation);
        } else {
            let escalations = failed_rules.iter().filter(|r| r.escalation.is_some()).count();
            prop_assert_eq!(result.recommendations.len(), 1 + escalations);
            prop_assert_eq!(result.recommendations[0].as_str(), table.review_recommendation);
        }
    }

    #[test]
    fn property_same_seed_same_outcome(seed in any::<u64>(), t in arb_document_type()) {
        let validator = DocumentValidator::default();
        let a = validator.validate(sample_document(t), &mut RngSource::seeded(seed));
        let b = validator.validate(sample_document(t), &mut RngSource::seeded(seed));

        prop_assert_eq!(a.checks, b.checks);
        prop_assert_eq!(a.risk_score, b.risk_score);
        prop_assert_eq!(a.anomalies, b.anomalies);
        prop_assert_eq!(a.recommendations, b.recommendations);
    }

    #[test]
    fn property_unknown_labels_always_rejected(seed in any::<u64>(), label in "[a-z]{3,12}") {
        prop_assume!(label.parse::<DocumentType>().is_err());
        let result = DocumentValidator::default()
            .validate(sample_document(label.as_str()), &mut RngSource::seeded(seed));

        prop_assert!(!result.is_valid);
        prop_assert_eq!(result.risk_score, 100);
        prop_assert_eq!(result.checks.len(), 1);
    }
}
