use std::ops::RangeInclusive;

use super::domain::{AccountScoringFactors, CollectionStrategy, InsuranceCategory};

/// Inputs the decision table branches on.
pub(crate) struct StrategyContext<'a> {
    pub factors: &'a AccountScoringFactors,
    pub score: u8,
}

struct StrategyRule {
    strategy: CollectionStrategy,
    applies: fn(&StrategyContext<'_>) -> bool,
}

/// Ordered decision table; the first matching rule wins, so priority is the
/// position in this list rather than code layout.
const RULES: &[StrategyRule] = &[
    StrategyRule {
        strategy: CollectionStrategy::Hold,
        applies: |ctx| ctx.factors.active_dispute,
    },
    StrategyRule {
        strategy: CollectionStrategy::CharityScreening,
        applies: |ctx| ctx.factors.hardship_program,
    },
    StrategyRule {
        strategy: CollectionStrategy::WriteOff,
        applies: |ctx| ctx.factors.balance < 25.0,
    },
    StrategyRule {
        strategy: CollectionStrategy::CharityScreening,
        applies: |ctx| {
            ctx.factors.insurance == InsuranceCategory::Uninsured
                && ctx.factors.balance > 1_000.0
                && ctx.score < 40
        },
    },
    StrategyRule {
        strategy: CollectionStrategy::StandardDunning,
        applies: |ctx| ctx.score >= 70 && ctx.factors.days_past_due <= 60,
    },
    StrategyRule {
        strategy: CollectionStrategy::AcceleratedDunning,
        applies: |ctx| ctx.score >= 70,
    },
    StrategyRule {
        strategy: CollectionStrategy::PhoneOutreach,
        applies: |ctx| ctx.score >= 40 && ctx.factors.has_responded,
    },
    StrategyRule {
        strategy: CollectionStrategy::PaymentPlan,
        applies: |ctx| ctx.score >= 40,
    },
    StrategyRule {
        strategy: CollectionStrategy::SettlementOffer,
        applies: |ctx| ctx.score >= 20,
    },
    StrategyRule {
        strategy: CollectionStrategy::LegalReview,
        applies: |ctx| ctx.score < 20 && ctx.factors.balance > 5_000.0,
    },
];

/// Score/balance windows in which a strategy is considered workable at all;
/// used to surface alternatives next to the recommended pick.
struct EligibilityWindow {
    strategy: CollectionStrategy,
    score: RangeInclusive<u8>,
    min_balance: f64,
    max_balance: f64,
}

const ELIGIBILITY: &[EligibilityWindow] = &[
    EligibilityWindow {
        strategy: CollectionStrategy::StandardDunning,
        score: 60..=100,
        min_balance: 25.0,
        max_balance: f64::MAX,
    },
    EligibilityWindow {
        strategy: CollectionStrategy::AcceleratedDunning,
        score: 55..=100,
        min_balance: 25.0,
        max_balance: f64::MAX,
    },
    EligibilityWindow {
        strategy: CollectionStrategy::PhoneOutreach,
        score: 35..=85,
        min_balance: 100.0,
        max_balance: f64::MAX,
    },
    EligibilityWindow {
        strategy: CollectionStrategy::PaymentPlan,
        score: 30..=90,
        min_balance: 250.0,
        max_balance: f64::MAX,
    },
    EligibilityWindow {
        strategy: CollectionStrategy::SettlementOffer,
        score: 15..=60,
        min_balance: 500.0,
        max_balance: f64::MAX,
    },
    EligibilityWindow {
        strategy: CollectionStrategy::LegalReview,
        score: 0..=35,
        min_balance: 5_000.0,
        max_balance: f64::MAX,
    },
    EligibilityWindow {
        strategy: CollectionStrategy::AgencyPlacement,
        score: 0..=30,
        min_balance: 100.0,
        max_balance: f64::MAX,
    },
    EligibilityWindow {
        strategy: CollectionStrategy::CharityScreening,
        score: 0..=45,
        min_balance: 0.0,
        max_balance: f64::MAX,
    },
    EligibilityWindow {
        strategy: CollectionStrategy::WriteOff,
        score: 0..=100,
        min_balance: 0.0,
        max_balance: 25.0,
    },
];

/// Picks the recommended strategy plus up to three eligible alternatives.
pub(crate) fn recommend(
    ctx: &StrategyContext<'_>,
) -> (CollectionStrategy, Vec<CollectionStrategy>) {
    let chosen = RULES
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .map(|rule| rule.strategy)
        .unwrap_or(CollectionStrategy::AgencyPlacement);

    let alternatives = ELIGIBILITY
        .iter()
        .filter(|window| {
            window.strategy != chosen
                && window.strategy != CollectionStrategy::Hold
                && window.score.contains(&ctx.score)
                && ctx.factors.balance >= window.min_balance
                && ctx.factors.balance <= window.max_balance
        })
        .map(|window| window.strategy)
        .take(3)
        .collect();

    (chosen, alternatives)
}
