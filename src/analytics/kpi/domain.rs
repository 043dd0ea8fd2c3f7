use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DateRange;

/// One adjudicated claim as flattened by the orchestrator for KPI math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimOutcomeRecord {
    pub claim_id: String,
    pub charge_amount: f64,
    pub paid_amount: f64,
    pub contractual_adjustment: f64,
    pub write_off_amount: f64,
    pub submitted_on: NaiveDate,
    pub paid_on: Option<NaiveDate>,
    pub denied: bool,
    /// Accepted by the clearinghouse without edits or rework.
    pub clean_submission: bool,
    /// Paid on the first submission, no resubmission or appeal.
    pub paid_first_pass: bool,
    pub resolved: bool,
}

/// The nine operational metrics the dashboard reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KpiKind {
    DaysInAr,
    CleanClaimRate,
    DenialRate,
    GrossCollectionRate,
    NetCollectionRate,
    AdjustedCollectionRate,
    FirstPassYield,
    CostToCollect,
    AvgDaysToPayment,
}

impl KpiKind {
    pub fn label(&self) -> &'static str {
        match self {
            KpiKind::DaysInAr => "Days in A/R",
            KpiKind::CleanClaimRate => "Clean claim rate",
            KpiKind::DenialRate => "Denial rate",
            KpiKind::GrossCollectionRate => "Gross collection rate",
            KpiKind::NetCollectionRate => "Net collection rate",
            KpiKind::AdjustedCollectionRate => "Adjusted collection rate",
            KpiKind::FirstPassYield => "First-pass yield",
            KpiKind::CostToCollect => "Cost to collect",
            KpiKind::AvgDaysToPayment => "Average days to payment",
        }
    }

    /// Whether a smaller value is the good direction for this metric.
    pub fn lower_is_better(&self) -> bool {
        matches!(
            self,
            KpiKind::DaysInAr
                | KpiKind::DenialRate
                | KpiKind::CostToCollect
                | KpiKind::AvgDaysToPayment
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendMovement {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendFavorability {
    Favorable,
    Unfavorable,
    Neutral,
}

/// Movement versus the prior period, with the movement's favorability
/// resolved through the metric's polarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiTrend {
    pub movement: TrendMovement,
    pub change_pct: f64,
    pub favorability: TrendFavorability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceTier {
    Above,
    At,
    Below,
}

/// Comparison against the fixed industry reference bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub industry_value: f64,
    pub performance: PerformanceTier,
    /// Indicative percentile implied by the band the value falls in.
    pub percentile: u8,
}

/// One computed metric, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiResult {
    pub kind: KpiKind,
    pub value: f64,
    pub display: String,
    pub unit: &'static str,
    pub sample_size: usize,
    /// Present only for degenerate input (empty set, zero denominator).
    pub note: Option<String>,
    pub trend: Option<KpiTrend>,
    pub benchmark: Option<BenchmarkComparison>,
}

/// Prior-period values for trend attachment; omitted metrics get no trend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiPriorValues {
    pub days_in_ar: Option<f64>,
    pub clean_claim_rate: Option<f64>,
    pub denial_rate: Option<f64>,
    pub gross_collection_rate: Option<f64>,
    pub net_collection_rate: Option<f64>,
    pub adjusted_collection_rate: Option<f64>,
    pub first_pass_yield: Option<f64>,
    pub cost_to_collect: Option<f64>,
    pub avg_days_to_payment: Option<f64>,
}

/// All nine KPIs for one reporting window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiDashboard {
    pub range: DateRange,
    pub generated_at: DateTime<Utc>,
    pub days_in_ar: KpiResult,
    pub clean_claim_rate: KpiResult,
    pub denial_rate: KpiResult,
    pub gross_collection_rate: KpiResult,
    pub net_collection_rate: KpiResult,
    pub adjusted_collection_rate: KpiResult,
    pub first_pass_yield: KpiResult,
    pub cost_to_collect: KpiResult,
    pub avg_days_to_payment: KpiResult,
}
