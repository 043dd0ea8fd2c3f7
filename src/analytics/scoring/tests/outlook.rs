use super::common::*;

#[test]
fn expected_collection_never_exceeds_balance() {
    let engine = scorer();
    for balance in [10.0, 99.99, 1_000.0, 2_500.0, 12_000.0, 80_000.0] {
        let mut factors = baseline_factors();
        factors.balance = balance;
        factors.original_amount = balance;

        let prediction = engine.score(&factors).expect("valid input");
        assert!(
            prediction.expected_collection_amount <= balance,
            "expected {} over balance {balance}",
            prediction.expected_collection_amount
        );
        assert!(prediction.confidence_interval.high <= balance);
        assert!(prediction.confidence_interval.low <= prediction.expected_collection_amount);
    }
}

#[test]
fn calibration_probabilities_and_interval() {
    let prediction = scorer().score(&baseline_factors()).expect("valid input");

    assert_eq!(prediction.full_collection_probability, 61.0);
    assert_eq!(prediction.partial_collection_probability, 78.0);
    assert_eq!(prediction.expected_collection_pct, 70.0);
    // variance (100-80)/100 = 0.2 gives an asymmetric band around $700.
    assert_eq!(prediction.confidence_interval.low, 665.0);
    assert_eq!(prediction.confidence_interval.high, 756.0);
    assert_eq!(prediction.confidence_interval.confidence_pct, 89.0);
}

#[test]
fn low_scores_produce_no_payment_dates() {
    let prediction = scorer().score(&distressed_factors()).expect("valid input");

    assert!(prediction.score < 15);
    assert_eq!(prediction.estimated_days_to_payment, None);
    assert_eq!(prediction.estimated_days_to_full_collection, None);
}

#[test]
fn mid_score_gets_first_payment_but_no_full_date() {
    // Engineer a score in [15, 25): start from distressed and improve contact.
    let mut factors = distressed_factors();
    factors.broken_promises = 0;
    factors.payment_history = crate::analytics::scoring::PaymentHistoryRating::Fair;
    factors.contact_attempts = 2;

    let prediction = scorer().score(&factors).expect("valid input");
    assert!(
        prediction.score >= 15 && prediction.score < 25,
        "score {} outside the window the test needs",
        prediction.score
    );
    assert!(prediction.estimated_days_to_payment.is_some());
    assert_eq!(prediction.estimated_days_to_full_collection, None);
}

#[test]
fn first_payment_estimate_floors_at_one_week() {
    let mut strong = baseline_factors();
    strong.payment_history = crate::analytics::scoring::PaymentHistoryRating::Excellent;
    strong.payments_made_count = 3;
    strong.has_valid_email = true;
    strong.has_responded = true;

    let prediction = scorer().score(&strong).expect("valid input");
    assert!(prediction.score > 90);
    let days = prediction.estimated_days_to_payment.expect("estimate");
    assert!(days >= 7);
}
