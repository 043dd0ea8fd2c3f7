use crate::analytics::scoring::{
    AccountScoringFactors, CollectionScorer, CollectionState, InsuranceCategory,
    PaymentHistoryRating,
};

pub(super) fn scorer() -> CollectionScorer {
    CollectionScorer::new()
}

/// Baseline: the insured, current, half-paid $1,000 account from the
/// calibration scenario. Individual tests mutate from here.
pub(super) fn baseline_factors() -> AccountScoringFactors {
    AccountScoringFactors {
        balance: 1_000.0,
        original_amount: 2_000.0,
        account_age_days: 45,
        days_past_due: 0,
        payment_history: PaymentHistoryRating::Good,
        payments_made_count: 0,
        payments_made_total: 0.0,
        insurance: InsuranceCategory::Insured,
        has_valid_phone: true,
        has_valid_email: false,
        has_responded: false,
        contact_attempts: 1,
        broken_promises: 0,
        returned_payments: 0,
        active_dispute: false,
        hardship_program: false,
        patient_age: Some(40),
        collection_state: CollectionState::Current,
    }
}

pub(super) fn distressed_factors() -> AccountScoringFactors {
    AccountScoringFactors {
        balance: 8_000.0,
        original_amount: 8_000.0,
        days_past_due: 400,
        payment_history: PaymentHistoryRating::Poor,
        insurance: InsuranceCategory::Uninsured,
        has_valid_phone: false,
        contact_attempts: 9,
        broken_promises: 3,
        returned_payments: 2,
        patient_age: Some(71),
        collection_state: CollectionState::InCollections,
        ..baseline_factors()
    }
}
