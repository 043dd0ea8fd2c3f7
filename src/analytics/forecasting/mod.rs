//! Seasonality-aware revenue projection, weekly cash flow, and what-if
//! scenario analysis.
//!
//! Forecasting reads a [`SeasonalityModel`] snapshot passed in by the
//! caller; recalculating seasonality produces a new snapshot rather than
//! mutating shared state, so concurrent forecasts never see a half-updated
//! factor table.

mod cashflow;
pub mod domain;
mod revenue;
mod scenario;
mod seasonality;

pub use domain::{
    AssumptionImpact, CashFlowProjection, CashFlowSummary, ForecastAssumption, ForecastPeriod,
    ForecastSummary, ImpactBand, MonthlyCollectionObservation, RevenueForecast, ScenarioAnalysis,
    ScenarioAssumption, ScenarioAssumptionKind, TrendDirection, WeeklyCashFlow,
};
pub use seasonality::{calculate_seasonality, SeasonalityAnalysis, SeasonalityModel, SeasonalityStore};

use chrono::NaiveDate;

use crate::analytics::scoring::CollectionScorer;
use crate::analytics::segmentation::ReceivableAccount;
use crate::error::{DateRange, ValidationError};

/// Forecasting facade. Revenue projection is pure arithmetic over the
/// supplied seasonality snapshot; cash flow additionally runs the composed
/// scorer over each account.
#[derive(Debug, Clone, Default)]
pub struct RevenueForecaster {
    scorer: CollectionScorer,
}

impl RevenueForecaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scorer(scorer: CollectionScorer) -> Self {
        Self { scorer }
    }

    /// Projects monthly revenue across every calendar month overlapping the
    /// range, prorating partial months at the edges.
    pub fn forecast_revenue(
        &self,
        range: DateRange,
        base_monthly_revenue: f64,
        seasonality: &SeasonalityModel,
    ) -> Result<RevenueForecast, ValidationError> {
        revenue::forecast_revenue(range, base_monthly_revenue, seasonality)
    }

    /// Buckets each account's predicted payment date (`today` plus its
    /// estimated days to payment) into seven-day windows inside the range.
    /// Accounts with no estimate or a likelihood under the floor are
    /// excluded, never guessed at.
    pub fn project_cash_flow(
        &self,
        accounts: &[ReceivableAccount],
        range: DateRange,
        today: NaiveDate,
    ) -> Result<CashFlowProjection, ValidationError> {
        cashflow::project_cash_flow(&self.scorer, accounts, range, today)
    }

    /// Applies named assumption deltas to a base forecast and ranks them by
    /// impact magnitude and elasticity.
    pub fn scenario_analysis(
        &self,
        base: &RevenueForecast,
        assumptions: &[ScenarioAssumption],
    ) -> Result<ScenarioAnalysis, ValidationError> {
        scenario::scenario_analysis(base, assumptions)
    }
}
