use super::domain::{
    AccountScoringFactors, ConfidenceInterval, InsuranceCategory, PaymentHistoryRating,
};

/// Probability, dollar, and timing projections derived from the composite
/// score. Probabilities are independently bounded and do not sum to 100.
pub(crate) struct CollectionOutlook {
    pub full_collection_probability: f64,
    pub partial_collection_probability: f64,
    pub expected_collection_pct: f64,
    pub expected_collection_amount: f64,
    pub confidence_interval: ConfidenceInterval,
    pub estimated_days_to_payment: Option<u32>,
    pub estimated_days_to_full_collection: Option<u32>,
}

const FULL_PROBABILITY_FLOOR: f64 = 5.0;
const FULL_PROBABILITY_CEILING: f64 = 85.0;
const PARTIAL_PROBABILITY_FLOOR: f64 = 20.0;
const PARTIAL_PROBABILITY_CEILING: f64 = 95.0;

/// Below this score no first-payment date is projected at all.
const FIRST_PAYMENT_SCORE_FLOOR: u8 = 15;
/// Below this score a full-collection date is not projected.
const FULL_COLLECTION_SCORE_FLOOR: u8 = 25;

pub(crate) fn project_outlook(factors: &AccountScoringFactors, score: u8) -> CollectionOutlook {
    let full = full_collection_probability(factors, score);
    let partial = partial_collection_probability(factors, score);

    let expected_pct = (full + 0.5 * (partial - full)).round();
    let expected_amount = round_cents(factors.balance * expected_pct / 100.0).min(factors.balance);

    CollectionOutlook {
        full_collection_probability: full,
        partial_collection_probability: partial,
        expected_collection_pct: expected_pct,
        expected_collection_amount: expected_amount,
        confidence_interval: confidence_interval(expected_amount, factors.balance, score),
        estimated_days_to_payment: days_to_first_payment(score),
        estimated_days_to_full_collection: days_to_full_collection(score),
    }
}

fn full_collection_probability(factors: &AccountScoringFactors, score: u8) -> f64 {
    let mut probability = 0.7 * f64::from(score);
    if factors.payments_made_count > 0 {
        probability += 10.0;
    }
    if factors.payment_history == PaymentHistoryRating::Excellent {
        probability += 5.0;
    }
    if factors.insurance == InsuranceCategory::Insured {
        probability += 5.0;
    }
    if factors.days_past_due > 180 {
        probability -= 10.0;
    }
    if factors.broken_promises > 0 {
        probability -= 10.0;
    }
    if factors.balance > 10_000.0 {
        probability -= 5.0;
    }
    probability.clamp(FULL_PROBABILITY_FLOOR, FULL_PROBABILITY_CEILING)
}

fn partial_collection_probability(factors: &AccountScoringFactors, score: u8) -> f64 {
    let mut probability = 0.85 * f64::from(score) + 10.0;
    if factors.has_responded {
        probability += 2.0;
    }
    if factors.payments_made_count >= 2 {
        probability += 2.0;
    }
    probability.clamp(PARTIAL_PROBABILITY_FLOOR, PARTIAL_PROBABILITY_CEILING)
}

/// Interval widens as the score falls and carries more upside than downside;
/// the high bound never exceeds the outstanding balance.
fn confidence_interval(expected: f64, balance: f64, score: u8) -> ConfidenceInterval {
    let variance = (100.0 - f64::from(score)) / 100.0;
    ConfidenceInterval {
        low: round_cents(expected * (1.0 - 0.25 * variance)),
        high: round_cents((expected * (1.0 + 0.40 * variance)).min(balance)),
        confidence_pct: (95.0 - 30.0 * variance).round(),
    }
}

fn days_to_first_payment(score: u8) -> Option<u32> {
    if score < FIRST_PAYMENT_SCORE_FLOOR {
        return None;
    }
    let days = (1.2 * (100.0 - f64::from(score))).round() as u32;
    Some(days.max(7))
}

fn days_to_full_collection(score: u8) -> Option<u32> {
    if score < FULL_COLLECTION_SCORE_FLOOR {
        return None;
    }
    days_to_first_payment(score).map(|days| days * 3)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
