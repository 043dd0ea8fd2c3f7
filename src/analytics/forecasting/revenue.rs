use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::domain::{
    ForecastAssumption, ForecastPeriod, ForecastSummary, RevenueForecast, TrendDirection,
};
use super::seasonality::SeasonalityModel;
use crate::error::{require_money, DateRange, ValidationError};

/// Average charge used to back a rough claim count out of a dollar forecast.
const ASSUMED_AVERAGE_CHARGE: f64 = 250.0;
/// Assumed baseline collection rate before seasonality adjustment.
const BASE_COLLECTION_RATE_PCT: f64 = 82.0;
/// Confidence starts here for the first period...
const STARTING_CONFIDENCE_PCT: f64 = 95.0;
/// ...decays this much per month out...
const CONFIDENCE_DECAY_PER_MONTH: f64 = 2.0;
/// ...and never drops below this floor.
const CONFIDENCE_FLOOR_PCT: f64 = 60.0;
/// Interval half-width for the first period; widens 2% per month out.
const BASE_SPREAD: f64 = 0.05;
const SPREAD_GROWTH_PER_MONTH: f64 = 0.02;
/// Half-over-half change beyond which the trend is not "stable".
const TREND_DEAD_BAND_PCT: f64 = 5.0;

pub(super) fn forecast_revenue(
    range: DateRange,
    base_monthly_revenue: f64,
    seasonality: &SeasonalityModel,
) -> Result<RevenueForecast, ValidationError> {
    require_money("base_monthly_revenue", base_monthly_revenue)?;

    let mut periods = Vec::new();
    let mut month_start = first_of_month(range.start());
    let mut index: u32 = 0;

    while month_start <= range.end() {
        let month_end = last_of_month(month_start);
        let window_start = range.start().max(month_start);
        let window_end = range.end().min(month_end);

        let days_in_month = (month_end - month_start).num_days() + 1;
        let days_in_window = (window_end - window_start).num_days() + 1;
        let fraction = days_in_window as f64 / days_in_month as f64;

        let factor = seasonality.month_factor(month_start.month());
        let point = round_cents(base_monthly_revenue * factor * fraction);
        let spread = BASE_SPREAD + SPREAD_GROWTH_PER_MONTH * f64::from(index);

        periods.push(ForecastPeriod {
            start: window_start,
            end: window_end,
            label: format!("{}-{:02}", month_start.year(), month_start.month()),
            point_forecast: point,
            lower_bound: round_cents(point * (1.0 - spread)),
            upper_bound: round_cents(point * (1.0 + spread)),
            confidence_pct: (STARTING_CONFIDENCE_PCT - CONFIDENCE_DECAY_PER_MONTH * f64::from(index))
                .max(CONFIDENCE_FLOOR_PCT),
            seasonality_factor: factor,
            expected_claims: (point / ASSUMED_AVERAGE_CHARGE).round() as u32,
            expected_collection_rate: (BASE_COLLECTION_RATE_PCT * factor).min(100.0),
        });

        month_start = next_month(month_start);
        index += 1;
    }

    let total: f64 = periods.iter().map(|p| p.point_forecast).sum();
    let (trend, trend_pct) = classify_trend(&periods);
    let summary = ForecastSummary {
        total_forecast: round_cents(total),
        average_monthly: if periods.is_empty() {
            0.0
        } else {
            round_cents(total / periods.len() as f64)
        },
        trend,
        trend_pct,
    };

    let assumptions = build_assumptions(base_monthly_revenue, seasonality);
    let (risks, opportunities) = qualitative_notes(&periods, trend);

    debug!(
        periods = periods.len(),
        total = summary.total_forecast,
        seasonality_version = seasonality.version(),
        "built revenue forecast"
    );

    Ok(RevenueForecast {
        range,
        periods,
        summary,
        assumptions,
        risks,
        opportunities,
    })
}

/// Compares the back half of the horizon to the front half, with a 5% dead
/// band on either side of flat.
fn classify_trend(periods: &[ForecastPeriod]) -> (TrendDirection, f64) {
    if periods.len() < 2 {
        return (TrendDirection::Stable, 0.0);
    }

    let midpoint = periods.len() / 2;
    let first_half: f64 = periods[..midpoint].iter().map(|p| p.point_forecast).sum();
    let second_half: f64 = periods[periods.len() - midpoint..]
        .iter()
        .map(|p| p.point_forecast)
        .sum();

    if first_half <= 0.0 {
        return (TrendDirection::Stable, 0.0);
    }

    let pct = (second_half - first_half) / first_half * 100.0;
    let direction = if pct > TREND_DEAD_BAND_PCT {
        TrendDirection::Increasing
    } else if pct < -TREND_DEAD_BAND_PCT {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };
    (direction, (pct * 10.0).round() / 10.0)
}

fn build_assumptions(
    base_monthly_revenue: f64,
    seasonality: &SeasonalityModel,
) -> Vec<ForecastAssumption> {
    vec![
        ForecastAssumption {
            name: "base-monthly-revenue".to_string(),
            detail: format!("${base_monthly_revenue:.2} per full calendar month"),
        },
        ForecastAssumption {
            name: "seasonality-model".to_string(),
            detail: format!("factor table version {}", seasonality.version()),
        },
        ForecastAssumption {
            name: "average-charge".to_string(),
            detail: format!("${ASSUMED_AVERAGE_CHARGE:.2} per claim"),
        },
        ForecastAssumption {
            name: "base-collection-rate".to_string(),
            detail: format!("{BASE_COLLECTION_RATE_PCT:.0}% before seasonal adjustment"),
        },
    ]
}

fn qualitative_notes(
    periods: &[ForecastPeriod],
    trend: TrendDirection,
) -> (Vec<String>, Vec<String>) {
    let mut risks = Vec::new();
    let mut opportunities = Vec::new();

    let max_factor = periods
        .iter()
        .map(|p| p.seasonality_factor)
        .fold(f64::MIN, f64::max);
    let min_factor = periods
        .iter()
        .map(|p| p.seasonality_factor)
        .fold(f64::MAX, f64::min);

    if periods.len() > 1 && max_factor - min_factor > 0.4 {
        risks.push("revenue is concentrated in seasonal peak months".to_string());
    }
    if periods.len() > 6 {
        risks.push("confidence degrades materially beyond a six-month horizon".to_string());
    }
    if trend == TrendDirection::Decreasing {
        risks.push("projected revenue declines across the horizon".to_string());
    }

    if trend == TrendDirection::Increasing {
        opportunities.push("projected revenue grows across the horizon".to_string());
    }
    if let Some(peak) = periods
        .iter()
        .max_by(|a, b| a.seasonality_factor.total_cmp(&b.seasonality_factor))
    {
        if peak.seasonality_factor > 1.1 {
            opportunities.push(format!(
                "{} is a seasonal peak; staffing ahead of it raises yield",
                peak.label
            ));
        }
    }

    (risks, opportunities)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month exists")
}

fn next_month(first: NaiveDate) -> NaiveDate {
    if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1).expect("january exists")
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1).expect("first of month exists")
    }
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    next_month(first).pred_opt().expect("month has a last day")
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
