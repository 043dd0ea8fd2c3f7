//! Integration specifications for what-if scenario analysis over a base
//! revenue forecast.

use chrono::NaiveDate;
use rcm_analytics::analytics::forecasting::{
    ImpactBand, RevenueForecaster, ScenarioAssumption, ScenarioAssumptionKind, SeasonalityModel,
};
use rcm_analytics::{DateRange, ValidationError};

fn base_forecast(forecaster: &RevenueForecaster) -> rcm_analytics::analytics::forecasting::RevenueForecast {
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid"),
        NaiveDate::from_ymd_opt(2025, 3, 31).expect("valid"),
    )
    .expect("valid range");
    forecaster
        .forecast_revenue(range, 100_000.0, &SeasonalityModel::neutral())
        .expect("valid input")
}

fn assumption(
    name: &str,
    kind: ScenarioAssumptionKind,
    base: f64,
    scenario: f64,
) -> ScenarioAssumption {
    ScenarioAssumption {
        name: name.to_string(),
        kind,
        base_value: base,
        scenario_value: scenario,
        unit: "%".to_string(),
    }
}

#[test]
fn denial_rate_increase_reduces_the_forecast() {
    let forecaster = RevenueForecaster::new();
    let base = base_forecast(&forecaster);

    let analysis = forecaster
        .scenario_analysis(
            &base,
            &[assumption(
                "denials-worsen",
                ScenarioAssumptionKind::DenialRate,
                10.0,
                12.0,
            )],
        )
        .expect("valid input");

    // +20% denials at a -0.8 multiplier takes 16% off $300k.
    assert!((analysis.delta - -48_000.0).abs() < 0.01);
    assert!(analysis.scenario_total < analysis.base_total);
    assert_eq!(analysis.impact_band, ImpactBand::Significant);
}

#[test]
fn impacts_are_ranked_by_magnitude_with_elasticity() {
    let forecaster = RevenueForecaster::new();
    let base = base_forecast(&forecaster);

    let analysis = forecaster
        .scenario_analysis(
            &base,
            &[
                assumption(
                    "collections-improve",
                    ScenarioAssumptionKind::CollectionRate,
                    80.0,
                    84.0,
                ),
                assumption(
                    "denials-worsen",
                    ScenarioAssumptionKind::DenialRate,
                    10.0,
                    12.0,
                ),
            ],
        )
        .expect("valid input");

    assert_eq!(analysis.ranked_impacts.len(), 2);
    assert_eq!(analysis.ranked_impacts[0].name, "denials-worsen");
    assert!(
        analysis.ranked_impacts[0].impact_amount.abs()
            > analysis.ranked_impacts[1].impact_amount.abs()
    );
    // Elasticity is |multiplier / fractional change|.
    assert!((analysis.ranked_impacts[0].elasticity - 4.0).abs() < 0.1);
    assert!((analysis.ranked_impacts[1].elasticity - 20.0).abs() < 0.1);

    // -48k denials plus +15k collections nets to -33k: an 11% swing.
    assert!((analysis.delta - -33_000.0).abs() < 0.01);
    assert_eq!(analysis.impact_band, ImpactBand::Significant);
}

#[test]
fn small_moves_classify_as_negligible() {
    let forecaster = RevenueForecaster::new();
    let base = base_forecast(&forecaster);

    let analysis = forecaster
        .scenario_analysis(
            &base,
            &[assumption(
                "payer-mix-shift",
                ScenarioAssumptionKind::PayerMix,
                50.0,
                50.5,
            )],
        )
        .expect("valid input");

    assert_eq!(analysis.impact_band, ImpactBand::Negligible);
    assert!(analysis.percent_change.abs() < 1.0);
}

#[test]
fn unchanged_assumption_contributes_nothing() {
    let forecaster = RevenueForecaster::new();
    let base = base_forecast(&forecaster);

    let analysis = forecaster
        .scenario_analysis(
            &base,
            &[assumption(
                "volume-flat",
                ScenarioAssumptionKind::ClaimVolume,
                1_200.0,
                1_200.0,
            )],
        )
        .expect("valid input");

    assert_eq!(analysis.delta, 0.0);
    assert_eq!(analysis.scenario_total, analysis.base_total);
    assert_eq!(analysis.ranked_impacts[0].elasticity, 0.0);
}

#[test]
fn zero_base_value_is_rejected_by_name() {
    let forecaster = RevenueForecaster::new();
    let base = base_forecast(&forecaster);

    let err = forecaster
        .scenario_analysis(
            &base,
            &[assumption(
                "bad-input",
                ScenarioAssumptionKind::Custom,
                0.0,
                5.0,
            )],
        )
        .unwrap_err();
    assert!(matches!(err, ValidationError::ZeroBaseValue { name } if name == "bad-input"));
}
