use chrono::Utc;
use tracing::debug;

use super::benchmarks;
use super::domain::{
    ClaimOutcomeRecord, KpiDashboard, KpiKind, KpiPriorValues, KpiResult, KpiTrend,
    TrendFavorability, TrendMovement,
};
use crate::error::DateRange;

/// Movement smaller than this (percent, either direction) reads as flat.
const TREND_DEAD_BAND_PCT: f64 = 2.0;

/// Days in A/R: open receivable dollars over average daily charges.
pub fn calculate_days_in_ar(
    claims: &[ClaimOutcomeRecord],
    range: DateRange,
    prior: Option<f64>,
) -> KpiResult {
    let gross_charges: f64 = claims.iter().map(|c| c.charge_amount).sum();
    if claims.is_empty() || gross_charges <= 0.0 {
        return degenerate(KpiKind::DaysInAr, "days", "no charges in period");
    }

    let open_ar: f64 = claims
        .iter()
        .filter(|c| !c.resolved)
        .map(|c| (c.charge_amount - c.paid_amount - c.contractual_adjustment).max(0.0))
        .sum();
    let daily_charges = gross_charges / range.days() as f64;
    let value = (open_ar / daily_charges).round().max(0.0);

    finish(
        KpiKind::DaysInAr,
        value,
        format!("{value:.0} days"),
        "days",
        claims.len(),
        prior,
    )
}

/// Share of claims accepted without edits or rework.
pub fn calculate_clean_claim_rate(
    claims: &[ClaimOutcomeRecord],
    prior: Option<f64>,
) -> KpiResult {
    rate_of(
        KpiKind::CleanClaimRate,
        claims,
        prior,
        "no claims in period",
        |c| c.clean_submission,
    )
}

/// Share of claims denied by the payer.
pub fn calculate_denial_rate(claims: &[ClaimOutcomeRecord], prior: Option<f64>) -> KpiResult {
    rate_of(
        KpiKind::DenialRate,
        claims,
        prior,
        "no claims in period",
        |c| c.denied,
    )
}

/// Paid dollars over gross charges.
pub fn calculate_gross_collection_rate(
    claims: &[ClaimOutcomeRecord],
    prior: Option<f64>,
) -> KpiResult {
    let charges: f64 = claims.iter().map(|c| c.charge_amount).sum();
    collection_rate(KpiKind::GrossCollectionRate, claims, charges, prior)
}

/// Paid dollars over charges net of contractual adjustments.
pub fn calculate_net_collection_rate(
    claims: &[ClaimOutcomeRecord],
    prior: Option<f64>,
) -> KpiResult {
    let denominator: f64 = claims
        .iter()
        .map(|c| c.charge_amount - c.contractual_adjustment)
        .sum();
    collection_rate(KpiKind::NetCollectionRate, claims, denominator, prior)
}

/// Paid dollars over charges net of contractual adjustments and write-offs.
pub fn calculate_adjusted_collection_rate(
    claims: &[ClaimOutcomeRecord],
    prior: Option<f64>,
) -> KpiResult {
    let denominator: f64 = claims
        .iter()
        .map(|c| c.charge_amount - c.contractual_adjustment - c.write_off_amount)
        .sum();
    collection_rate(KpiKind::AdjustedCollectionRate, claims, denominator, prior)
}

/// Share of claims paid on first submission.
pub fn calculate_first_pass_yield(
    claims: &[ClaimOutcomeRecord],
    prior: Option<f64>,
) -> KpiResult {
    rate_of(
        KpiKind::FirstPassYield,
        claims,
        prior,
        "no claims in period",
        |c| c.paid_first_pass,
    )
}

/// Collection spend as a percent of dollars collected.
pub fn calculate_cost_to_collect(
    claims: &[ClaimOutcomeRecord],
    total_collection_cost: f64,
    prior: Option<f64>,
) -> KpiResult {
    let collected: f64 = claims.iter().map(|c| c.paid_amount).sum();
    if collected <= 0.0 {
        return degenerate(KpiKind::CostToCollect, "%", "nothing collected in period");
    }

    let value = round_tenth(total_collection_cost / collected * 100.0);
    finish(
        KpiKind::CostToCollect,
        value,
        format!("{value:.1}%"),
        "%",
        claims.len(),
        prior,
    )
}

/// Mean lag from submission to payment, over paid claims only.
pub fn calculate_avg_days_to_payment(
    claims: &[ClaimOutcomeRecord],
    prior: Option<f64>,
) -> KpiResult {
    let lags: Vec<i64> = claims
        .iter()
        .filter_map(|c| c.paid_on.map(|paid| (paid - c.submitted_on).num_days()))
        .collect();
    if lags.is_empty() {
        return degenerate(KpiKind::AvgDaysToPayment, "days", "no paid claims in period");
    }

    let value = (lags.iter().sum::<i64>() as f64 / lags.len() as f64).round();
    finish(
        KpiKind::AvgDaysToPayment,
        value,
        format!("{value:.0} days"),
        "days",
        lags.len(),
        prior,
    )
}

/// Runs all nine calculators over one reporting window.
pub fn generate_kpi_dashboard(
    claims: &[ClaimOutcomeRecord],
    total_collection_cost: f64,
    range: DateRange,
    prior: Option<&KpiPriorValues>,
) -> KpiDashboard {
    let prior = prior.copied().unwrap_or_default();

    let dashboard = KpiDashboard {
        range,
        generated_at: Utc::now(),
        days_in_ar: calculate_days_in_ar(claims, range, prior.days_in_ar),
        clean_claim_rate: calculate_clean_claim_rate(claims, prior.clean_claim_rate),
        denial_rate: calculate_denial_rate(claims, prior.denial_rate),
        gross_collection_rate: calculate_gross_collection_rate(
            claims,
            prior.gross_collection_rate,
        ),
        net_collection_rate: calculate_net_collection_rate(claims, prior.net_collection_rate),
        adjusted_collection_rate: calculate_adjusted_collection_rate(
            claims,
            prior.adjusted_collection_rate,
        ),
        first_pass_yield: calculate_first_pass_yield(claims, prior.first_pass_yield),
        cost_to_collect: calculate_cost_to_collect(
            claims,
            total_collection_cost,
            prior.cost_to_collect,
        ),
        avg_days_to_payment: calculate_avg_days_to_payment(claims, prior.avg_days_to_payment),
    };

    debug!(claims = claims.len(), "generated KPI dashboard");
    dashboard
}

/// Percent-of-claims metric shared by clean-claim, denial, and first-pass.
fn rate_of(
    kind: KpiKind,
    claims: &[ClaimOutcomeRecord],
    prior: Option<f64>,
    empty_note: &str,
    predicate: fn(&ClaimOutcomeRecord) -> bool,
) -> KpiResult {
    if claims.is_empty() {
        return degenerate(kind, "%", empty_note);
    }

    let matching = claims.iter().filter(|c| predicate(c)).count();
    let value = round_tenth(matching as f64 / claims.len() as f64 * 100.0);
    finish(
        kind,
        value,
        format!("{value:.1}%"),
        "%",
        claims.len(),
        prior,
    )
}

fn collection_rate(
    kind: KpiKind,
    claims: &[ClaimOutcomeRecord],
    denominator: f64,
    prior: Option<f64>,
) -> KpiResult {
    if claims.is_empty() || denominator <= 0.0 {
        return degenerate(kind, "%", "no collectable charges in period");
    }

    let paid: f64 = claims.iter().map(|c| c.paid_amount).sum();
    let value = round_tenth(paid / denominator * 100.0);
    finish(
        kind,
        value,
        format!("{value:.1}%"),
        "%",
        claims.len(),
        prior,
    )
}

/// Zero-value result for empty/zero-denominator input. Carries the
/// explanatory note and deliberately no trend or benchmark.
fn degenerate(kind: KpiKind, unit: &'static str, note: &str) -> KpiResult {
    KpiResult {
        kind,
        value: 0.0,
        display: format!("0{}", if unit == "%" { "%" } else { " days" }),
        unit,
        sample_size: 0,
        note: Some(note.to_string()),
        trend: None,
        benchmark: None,
    }
}

fn finish(
    kind: KpiKind,
    value: f64,
    display: String,
    unit: &'static str,
    sample_size: usize,
    prior: Option<f64>,
) -> KpiResult {
    KpiResult {
        kind,
        value,
        display,
        unit,
        sample_size,
        note: None,
        trend: prior.map(|prior| trend_against(kind, value, prior)),
        benchmark: Some(benchmarks::compare(kind, value)),
    }
}

fn trend_against(kind: KpiKind, value: f64, prior: f64) -> KpiTrend {
    let change_pct = if prior == 0.0 {
        if value == 0.0 {
            0.0
        } else {
            100.0
        }
    } else {
        round_tenth((value - prior) / prior * 100.0)
    };

    let movement = if change_pct.abs() <= TREND_DEAD_BAND_PCT {
        TrendMovement::Flat
    } else if change_pct > 0.0 {
        TrendMovement::Up
    } else {
        TrendMovement::Down
    };

    let favorability = match movement {
        TrendMovement::Flat => TrendFavorability::Neutral,
        TrendMovement::Up if kind.lower_is_better() => TrendFavorability::Unfavorable,
        TrendMovement::Up => TrendFavorability::Favorable,
        TrendMovement::Down if kind.lower_is_better() => TrendFavorability::Favorable,
        TrendMovement::Down => TrendFavorability::Unfavorable,
    };

    KpiTrend {
        movement,
        change_pct,
        favorability,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
