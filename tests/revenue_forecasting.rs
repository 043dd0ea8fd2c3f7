//! Integration specifications for seasonality calculation and the monthly
//! revenue forecast, exercised through the public crate surface only.

use chrono::NaiveDate;
use rcm_analytics::analytics::forecasting::{
    calculate_seasonality, MonthlyCollectionObservation, RevenueForecaster, SeasonalityModel,
    SeasonalityStore, TrendDirection,
};
use rcm_analytics::{DateRange, ValidationError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn observation(month: u32, collected: f64) -> MonthlyCollectionObservation {
    MonthlyCollectionObservation {
        period: date(2024, month, 15),
        collected,
    }
}

/// Ten months at $950 plus December at $2,000 and June at $500 puts the
/// yearly average at exactly $1,000.
fn skewed_year() -> Vec<MonthlyCollectionObservation> {
    (1..=12)
        .map(|month| match month {
            6 => observation(6, 500.0),
            12 => observation(12, 2_000.0),
            other => observation(other, 950.0),
        })
        .collect()
}

#[test]
fn seasonality_round_trip_recovers_known_factors() {
    let analysis =
        calculate_seasonality(&skewed_year(), &SeasonalityModel::neutral()).expect("valid history");

    assert!((analysis.model.month_factor(12) - 2.0).abs() < 1e-9);
    assert!((analysis.model.month_factor(6) - 0.5).abs() < 1e-9);
    assert!((analysis.model.month_factor(3) - 0.95).abs() < 1e-9);
    assert!(analysis.peak_months.contains(&12));
    assert!(analysis.low_months.contains(&6));
    assert!((analysis.cycle_strength_pct - 150.0).abs() < 1e-9);
    assert_eq!(analysis.model.version(), 1);
    assert_eq!(analysis.observation_count, 12);
}

#[test]
fn seasonality_rejects_empty_history_without_touching_the_store() {
    let store = SeasonalityStore::default();
    let before = store.load();

    let err = calculate_seasonality(&[], &before).unwrap_err();
    assert!(matches!(err, ValidationError::EmptyHistory));
    assert_eq!(store.load().version(), before.version());
}

#[test]
fn store_swap_is_last_calculation_wins() {
    let store = SeasonalityStore::default();
    assert_eq!(store.load().version(), 0);

    let first = calculate_seasonality(&skewed_year(), &store.load()).expect("valid");
    store.swap(first.model);
    let second = calculate_seasonality(&skewed_year(), &store.load()).expect("valid");
    store.swap(second.model);

    assert_eq!(store.load().version(), 2);
    assert!((store.load().month_factor(12) - 2.0).abs() < 1e-9);
}

#[test]
fn neutral_model_projects_flat_months() {
    let forecaster = RevenueForecaster::new();
    let range = DateRange::new(date(2025, 1, 1), date(2025, 3, 31)).expect("valid");

    let forecast = forecaster
        .forecast_revenue(range, 100_000.0, &SeasonalityModel::neutral())
        .expect("valid input");

    assert_eq!(forecast.periods.len(), 3);
    for period in &forecast.periods {
        assert!((period.point_forecast - 100_000.0).abs() < 0.01);
        assert_eq!(period.seasonality_factor, 1.0);
    }
    assert!((forecast.summary.total_forecast - 300_000.0).abs() < 0.01);
    assert_eq!(forecast.summary.trend, TrendDirection::Stable);

    // Confidence decays two points per month from 95.
    assert_eq!(forecast.periods[0].confidence_pct, 95.0);
    assert_eq!(forecast.periods[1].confidence_pct, 93.0);
    assert_eq!(forecast.periods[2].confidence_pct, 91.0);
}

#[test]
fn partial_months_are_prorated_by_day_count() {
    let forecaster = RevenueForecaster::new();
    let range = DateRange::new(date(2025, 1, 16), date(2025, 2, 14)).expect("valid");

    let forecast = forecaster
        .forecast_revenue(range, 100_000.0, &SeasonalityModel::neutral())
        .expect("valid input");

    assert_eq!(forecast.periods.len(), 2);
    // 16 of January's 31 days, then 14 of February's 28.
    assert!((forecast.periods[0].point_forecast - 51_612.90).abs() < 0.01);
    assert!((forecast.periods[1].point_forecast - 50_000.0).abs() < 0.01);
    assert_eq!(forecast.periods[0].start, date(2025, 1, 16));
    assert_eq!(forecast.periods[1].end, date(2025, 2, 14));
}

#[test]
fn confidence_never_drops_below_the_floor() {
    let forecaster = RevenueForecaster::new();
    let range = DateRange::new(date(2025, 1, 1), date(2026, 12, 31)).expect("valid");

    let forecast = forecaster
        .forecast_revenue(range, 50_000.0, &SeasonalityModel::neutral())
        .expect("valid input");

    assert_eq!(forecast.periods.len(), 24);
    let last = forecast.periods.last().expect("periods");
    assert_eq!(last.confidence_pct, 60.0);
    assert!(forecast
        .periods
        .iter()
        .all(|period| period.confidence_pct >= 60.0));
}

#[test]
fn rising_seasonality_classifies_as_increasing_trend() {
    let history: Vec<MonthlyCollectionObservation> = (1..=6)
        .map(|month| observation(month, if month <= 3 { 800.0 } else { 1_200.0 }))
        .collect();
    let analysis =
        calculate_seasonality(&history, &SeasonalityModel::neutral()).expect("valid history");

    let forecaster = RevenueForecaster::new();
    let range = DateRange::new(date(2025, 1, 1), date(2025, 6, 30)).expect("valid");
    let forecast = forecaster
        .forecast_revenue(range, 100_000.0, &analysis.model)
        .expect("valid input");

    assert_eq!(forecast.summary.trend, TrendDirection::Increasing);
    assert!(forecast.summary.trend_pct > 5.0);
    assert!(!forecast.opportunities.is_empty());
}

#[test]
fn negative_base_revenue_is_rejected() {
    let forecaster = RevenueForecaster::new();
    let range = DateRange::new(date(2025, 1, 1), date(2025, 3, 31)).expect("valid");

    let err = forecaster
        .forecast_revenue(range, -5.0, &SeasonalityModel::neutral())
        .unwrap_err();
    assert!(matches!(err, ValidationError::NegativeAmount { .. }));
}

#[test]
fn forecast_carries_named_assumptions() {
    let forecaster = RevenueForecaster::new();
    let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).expect("valid");

    let forecast = forecaster
        .forecast_revenue(range, 10_000.0, &SeasonalityModel::neutral())
        .expect("valid input");

    let names: Vec<&str> = forecast
        .assumptions
        .iter()
        .map(|assumption| assumption.name.as_str())
        .collect();
    assert!(names.contains(&"base-monthly-revenue"));
    assert!(names.contains(&"seasonality-model"));
}
