use super::common::*;
use crate::analytics::scoring::{
    CollectabilityBand, CollectionScorer, CollectionStrategy, ScoreFactorKind, ScoringPolicy,
};
use crate::error::ValidationError;

#[test]
fn calibration_account_scores_eighty() {
    let prediction = scorer().score(&baseline_factors()).expect("valid input");

    assert_eq!(prediction.score, 80);
    assert_eq!(prediction.band, CollectabilityBand::VeryHigh);
    assert_eq!(
        prediction.recommended_strategy,
        CollectionStrategy::StandardDunning
    );
    assert!((prediction.expected_collection_amount - 700.0).abs() <= 1.0);
    assert_eq!(prediction.estimated_days_to_payment, Some(24));
}

#[test]
fn paid_down_check_outranks_sweet_spot() {
    // $8,000 balance, but 60% of the original charge already recovered.
    let mut mostly_paid = baseline_factors();
    mostly_paid.balance = 8_000.0;
    mostly_paid.original_amount = 20_000.0;

    // Mid-size balance with no payments at all against the original.
    let mut untouched = baseline_factors();
    untouched.balance = 8_000.0;
    untouched.original_amount = 8_000.0;

    let engine = scorer();
    let paid_balance_points = balance_points(&engine, &mostly_paid);
    let untouched_points = balance_points(&engine, &untouched);

    assert_eq!(paid_balance_points, 18);
    assert_eq!(untouched_points, 12);
    assert!(paid_balance_points > untouched_points);
}

#[test]
fn tiny_balance_scores_low_even_when_paid_down() {
    let mut tiny = baseline_factors();
    tiny.balance = 60.0;
    tiny.original_amount = 500.0;

    assert_eq!(balance_points(&scorer(), &tiny), 4);
}

#[test]
fn score_stays_within_bounds_for_distressed_account() {
    let prediction = scorer().score(&distressed_factors()).expect("valid input");

    assert!(prediction.score <= 100);
    assert_eq!(prediction.band, CollectabilityBand::VeryLow);
    assert!(prediction.full_collection_probability >= 5.0);
    assert!(prediction.full_collection_probability <= 85.0);
    assert!(prediction.partial_collection_probability >= 20.0);
    assert!(prediction.partial_collection_probability <= 95.0);
    assert!(prediction.expected_collection_amount <= prediction.confidence_interval.high);
    assert!(!prediction.risk_factors.is_empty());
}

#[test]
fn band_edges_are_inclusive_at_lower_bound() {
    let engine = scorer();
    let bands = engine.policy().bands;
    assert_eq!(bands.very_high, 80);
    assert_eq!(bands.high, 60);

    // The calibration account lands exactly on the very-high edge.
    let prediction = engine.score(&baseline_factors()).expect("valid");
    assert_eq!(prediction.score, bands.very_high);
    assert_eq!(prediction.band, CollectabilityBand::VeryHigh);
}

#[test]
fn scoring_is_idempotent() {
    let engine = scorer();
    let first = engine.score(&baseline_factors()).expect("valid");
    let second = engine.score(&baseline_factors()).expect("valid");
    assert_eq!(first, second);
}

#[test]
fn collections_policy_penalizes_hardship_harder() {
    let mut hardship = baseline_factors();
    hardship.hardship_program = true;

    let predictive = scorer().score(&hardship).expect("valid");
    let collections = CollectionScorer::with_policy(ScoringPolicy::collections())
        .score(&hardship)
        .expect("valid");

    assert_eq!(predictive.score, 65);
    assert_eq!(collections.score, 60);
}

#[test]
fn extreme_counts_degrade_monotonically() {
    let engine = scorer();

    let mut repeat_offender = baseline_factors();
    repeat_offender.broken_promises = 3;
    repeat_offender.returned_payments = 3;

    // Counts far beyond any i16 range must still read as a penalty, never
    // wrap into a bonus.
    let mut pathological = baseline_factors();
    pathological.broken_promises = 100_000;
    pathological.returned_payments = 100_000;
    pathological.payments_made_count = 1_000_000;

    let repeat = engine.score(&repeat_offender).expect("valid input");
    let extreme = engine.score(&pathological).expect("valid input");

    assert!(extreme.score <= repeat.score);
    assert!(extreme.score < scorer().score(&baseline_factors()).expect("valid").score);

    let history = extreme
        .breakdown
        .iter()
        .find(|entry| entry.factor == ScoreFactorKind::PaymentHistory)
        .expect("history factor present");
    assert_eq!(history.points, 0);
}

#[test]
fn negative_balance_is_rejected() {
    let mut invalid = baseline_factors();
    invalid.balance = -50.0;

    let err = scorer().score(&invalid).unwrap_err();
    assert!(matches!(err, ValidationError::NegativeAmount { field, .. } if field == "balance"));
}

#[test]
fn nan_amount_is_rejected() {
    let mut invalid = baseline_factors();
    invalid.payments_made_total = f64::NAN;

    let err = scorer().score(&invalid).unwrap_err();
    assert!(matches!(err, ValidationError::NonFiniteAmount { .. }));
}

fn balance_points(
    engine: &CollectionScorer,
    factors: &crate::analytics::scoring::AccountScoringFactors,
) -> i16 {
    engine
        .score(factors)
        .expect("valid input")
        .breakdown
        .iter()
        .find(|entry| entry.factor == ScoreFactorKind::Balance)
        .expect("balance factor present")
        .points
}
