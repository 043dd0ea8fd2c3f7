use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DateRange;

/// One month of historical paid-amount observations, bucketed by the
/// calendar month of `period`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCollectionObservation {
    pub period: NaiveDate,
    pub collected: f64,
}

/// Direction of the projected revenue curve across the forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// One calendar month (or partial month at the range edges) of projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub point_forecast: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub confidence_pct: f64,
    pub seasonality_factor: f64,
    pub expected_claims: u32,
    pub expected_collection_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_forecast: f64,
    pub average_monthly: f64,
    pub trend: TrendDirection,
    pub trend_pct: f64,
}

/// Named modeling assumption surfaced next to the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastAssumption {
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueForecast {
    pub range: DateRange,
    pub periods: Vec<ForecastPeriod>,
    pub summary: ForecastSummary,
    pub assumptions: Vec<ForecastAssumption>,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
}

/// One seven-day collection window of the cash-flow projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCashFlow {
    pub week_number: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub expected_collections: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub paying_accounts: usize,
    pub cumulative_collections: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    pub total_expected: f64,
    pub peak_week: Option<u32>,
    pub accounts_projected: usize,
    pub accounts_excluded: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    pub range: DateRange,
    pub weeks: Vec<WeeklyCashFlow>,
    pub summary: CashFlowSummary,
}

/// Assumption families recognized by scenario analysis. Denial-rate moves
/// are inverted: a higher denial rate reduces the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioAssumptionKind {
    CollectionRate,
    ClaimVolume,
    PayerMix,
    DenialRate,
    Custom,
}

/// A single what-if delta applied to the base forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAssumption {
    pub name: String,
    pub kind: ScenarioAssumptionKind,
    pub base_value: f64,
    pub scenario_value: f64,
    pub unit: String,
}

/// Contribution of one assumption to the scenario, ranked by magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssumptionImpact {
    pub name: String,
    pub kind: ScenarioAssumptionKind,
    pub percent_change: f64,
    pub impact_amount: f64,
    pub elasticity: f64,
}

/// Five-band classification of the overall scenario swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactBand {
    Negligible,
    Minor,
    Moderate,
    Significant,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAnalysis {
    pub base_total: f64,
    pub scenario_total: f64,
    pub delta: f64,
    pub percent_change: f64,
    pub impact_band: ImpactBand,
    /// Sorted by absolute impact, largest first.
    pub ranked_impacts: Vec<AssumptionImpact>,
}
