//! Benchmarked operational KPIs with trend and percentile classification.
//!
//! Every calculator follows the same shape: guard the empty/zero-denominator
//! case with a zero-value result and an explanatory note, otherwise compute,
//! round per the metric's convention, and attach trend (only when a prior
//! value exists) and benchmark objects.

mod benchmarks;
pub mod domain;
mod metrics;

pub use domain::{
    BenchmarkComparison, ClaimOutcomeRecord, KpiDashboard, KpiKind, KpiPriorValues, KpiResult,
    KpiTrend, PerformanceTier, TrendFavorability, TrendMovement,
};
pub use metrics::{
    calculate_adjusted_collection_rate, calculate_avg_days_to_payment,
    calculate_clean_claim_rate, calculate_cost_to_collect, calculate_days_in_ar,
    calculate_denial_rate, calculate_first_pass_yield, calculate_gross_collection_rate,
    calculate_net_collection_rate, generate_kpi_dashboard,
};
