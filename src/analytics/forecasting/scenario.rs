use tracing::debug;

use super::domain::{
    AssumptionImpact, ImpactBand, RevenueForecast, ScenarioAnalysis, ScenarioAssumption,
    ScenarioAssumptionKind,
};
use crate::error::ValidationError;

/// How strongly a percent move in each assumption family translates into
/// forecast dollars. Denial rate is negative: more denials, less revenue.
fn impact_multiplier(kind: ScenarioAssumptionKind) -> f64 {
    match kind {
        ScenarioAssumptionKind::CollectionRate => 1.0,
        ScenarioAssumptionKind::ClaimVolume => 0.9,
        ScenarioAssumptionKind::PayerMix => 0.5,
        ScenarioAssumptionKind::DenialRate => -0.8,
        ScenarioAssumptionKind::Custom => 0.6,
    }
}

pub(super) fn scenario_analysis(
    base: &RevenueForecast,
    assumptions: &[ScenarioAssumption],
) -> Result<ScenarioAnalysis, ValidationError> {
    let base_total = base.summary.total_forecast;

    let mut impacts = Vec::with_capacity(assumptions.len());
    for assumption in assumptions {
        if assumption.base_value == 0.0 {
            return Err(ValidationError::ZeroBaseValue {
                name: assumption.name.clone(),
            });
        }

        let percent_change =
            (assumption.scenario_value - assumption.base_value) / assumption.base_value * 100.0;
        let multiplier = impact_multiplier(assumption.kind);
        let impact_amount = round_cents(base_total * percent_change / 100.0 * multiplier);
        let elasticity = if percent_change == 0.0 {
            0.0
        } else {
            (multiplier / (percent_change / 100.0)).abs()
        };

        impacts.push(AssumptionImpact {
            name: assumption.name.clone(),
            kind: assumption.kind,
            percent_change: round_tenth(percent_change),
            impact_amount,
            elasticity: round_tenth(elasticity),
        });
    }

    impacts.sort_by(|a, b| b.impact_amount.abs().total_cmp(&a.impact_amount.abs()));

    let delta: f64 = impacts.iter().map(|impact| impact.impact_amount).sum();
    let scenario_total = round_cents(base_total + delta);
    let percent_change = if base_total == 0.0 {
        0.0
    } else {
        round_tenth(delta / base_total * 100.0)
    };

    let analysis = ScenarioAnalysis {
        base_total,
        scenario_total,
        delta: round_cents(delta),
        percent_change,
        impact_band: classify_impact(percent_change),
        ranked_impacts: impacts,
    };

    debug!(
        assumptions = assumptions.len(),
        delta = analysis.delta,
        band = ?analysis.impact_band,
        "ran scenario analysis"
    );

    Ok(analysis)
}

fn classify_impact(percent_change: f64) -> ImpactBand {
    let magnitude = percent_change.abs();
    if magnitude >= 20.0 {
        ImpactBand::Critical
    } else if magnitude >= 10.0 {
        ImpactBand::Significant
    } else if magnitude >= 5.0 {
        ImpactBand::Moderate
    } else if magnitude >= 1.0 {
        ImpactBand::Minor
    } else {
        ImpactBand::Negligible
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
