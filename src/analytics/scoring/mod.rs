//! Per-account collectability scoring.
//!
//! A weighted sum of six independently bounded sub-scores, flat penalties,
//! and a clamp to [0,100], followed by probability/timing projections and an
//! ordered-decision-table strategy pick. Everything is table-driven from
//! [`ScoringPolicy`] so the weights can be audited apart from the arithmetic.

mod config;
pub mod domain;
mod outlook;
mod rules;
mod strategy;

#[cfg(test)]
mod tests;

pub use config::{
    AgeStep, BalanceStep, BalanceWeights, BandThresholds, ContactWeights, DemographicWeights,
    HistoryWeights, InsuranceWeights, PenaltyWeights, ScoringPolicy,
};
pub use domain::{
    AccountScoringFactors, CollectabilityBand, CollectionPrediction, CollectionState,
    CollectionStrategy, ConfidenceInterval, FactorScore, InsuranceCategory, PaymentHistoryRating,
    ScoreFactorKind,
};

use crate::error::ValidationError;
use strategy::StrategyContext;

/// Stateless scorer applying one named [`ScoringPolicy`] to account records.
///
/// Scoring is deterministic: identical input yields identical output, so
/// independent calls may run in parallel without coordination.
#[derive(Debug, Clone)]
pub struct CollectionScorer {
    policy: ScoringPolicy,
}

impl CollectionScorer {
    pub fn new() -> Self {
        Self::with_policy(ScoringPolicy::predictive())
    }

    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Scores one account. Fails only for malformed input; every well-formed
    /// record produces a prediction.
    pub fn score(
        &self,
        factors: &AccountScoringFactors,
    ) -> Result<CollectionPrediction, ValidationError> {
        factors.validate()?;

        let outcome = rules::score_factors(factors, &self.policy);
        let outlook = outlook::project_outlook(factors, outcome.score);
        let (recommended, alternatives) = strategy::recommend(&StrategyContext {
            factors,
            score: outcome.score,
        });

        Ok(CollectionPrediction {
            score: outcome.score,
            band: self.classify(outcome.score),
            full_collection_probability: outlook.full_collection_probability,
            partial_collection_probability: outlook.partial_collection_probability,
            expected_collection_pct: outlook.expected_collection_pct,
            expected_collection_amount: outlook.expected_collection_amount,
            confidence_interval: outlook.confidence_interval,
            estimated_days_to_payment: outlook.estimated_days_to_payment,
            estimated_days_to_full_collection: outlook.estimated_days_to_full_collection,
            recommended_strategy: recommended,
            alternative_strategies: alternatives,
            risk_factors: outcome.risk_factors,
            positive_factors: outcome.positive_factors,
            breakdown: outcome.breakdown,
        })
    }

    fn classify(&self, score: u8) -> CollectabilityBand {
        let bands = &self.policy.bands;
        if score >= bands.very_high {
            CollectabilityBand::VeryHigh
        } else if score >= bands.high {
            CollectabilityBand::High
        } else if score >= bands.medium {
            CollectabilityBand::Medium
        } else if score >= bands.low {
            CollectabilityBand::Low
        } else {
            CollectabilityBand::VeryLow
        }
    }
}

impl Default for CollectionScorer {
    fn default() -> Self {
        Self::new()
    }
}
