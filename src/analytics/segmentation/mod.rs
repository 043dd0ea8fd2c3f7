//! Portfolio segmentation into recovery-strategy tiers.
//!
//! Five fixed tiers partition the score range [0,100] without gap or
//! overlap; every scored account lands in exactly one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::scoring::{AccountScoringFactors, CollectionScorer, CollectionStrategy};
use crate::error::ValidationError;

/// One receivable account as identified by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivableAccount {
    pub account_id: String,
    pub factors: AccountScoringFactors,
}

/// Fixed recovery tiers, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
    Iron,
}

impl RecoveryTier {
    pub fn ordered() -> [RecoveryTier; 5] {
        [
            RecoveryTier::Platinum,
            RecoveryTier::Gold,
            RecoveryTier::Silver,
            RecoveryTier::Bronze,
            RecoveryTier::Iron,
        ]
    }

    /// Inclusive score band owned by this tier.
    pub fn score_range(&self) -> (u8, u8) {
        match self {
            RecoveryTier::Platinum => (80, 100),
            RecoveryTier::Gold => (60, 79),
            RecoveryTier::Silver => (40, 59),
            RecoveryTier::Bronze => (20, 39),
            RecoveryTier::Iron => (0, 19),
        }
    }

    /// Strategy pre-bound at the tier level.
    pub fn strategy(&self) -> CollectionStrategy {
        match self {
            RecoveryTier::Platinum => CollectionStrategy::StandardDunning,
            RecoveryTier::Gold => CollectionStrategy::AcceleratedDunning,
            RecoveryTier::Silver => CollectionStrategy::PhoneOutreach,
            RecoveryTier::Bronze => CollectionStrategy::SettlementOffer,
            RecoveryTier::Iron => CollectionStrategy::AgencyPlacement,
        }
    }

    fn for_score(score: u8) -> RecoveryTier {
        match score {
            80..=u8::MAX => RecoveryTier::Platinum,
            60..=79 => RecoveryTier::Gold,
            40..=59 => RecoveryTier::Silver,
            20..=39 => RecoveryTier::Bronze,
            _ => RecoveryTier::Iron,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecoveryTier::Platinum => "Platinum",
            RecoveryTier::Gold => "Gold",
            RecoveryTier::Silver => "Silver",
            RecoveryTier::Bronze => "Bronze",
            RecoveryTier::Iron => "Iron",
        }
    }
}

/// Aggregate economics for one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSegment {
    pub tier: RecoveryTier,
    pub score_min: u8,
    pub score_max: u8,
    pub strategy: CollectionStrategy,
    pub account_count: usize,
    pub total_balance: f64,
    pub expected_recovery: f64,
    pub account_ids: Vec<String>,
}

/// Portfolio-wide rollup across all five tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_accounts: usize,
    pub total_balance: f64,
    pub total_expected_recovery: f64,
    /// Plain average of account scores.
    pub average_likelihood: f64,
    /// Dollar-weighted average score: where the money sits, not just the
    /// account count.
    pub balance_weighted_likelihood: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationResult {
    pub segments: Vec<AccountSegment>,
    pub summary: PortfolioSummary,
}

/// Scores a portfolio and groups it into the five recovery tiers.
#[derive(Debug, Clone, Default)]
pub struct PortfolioSegmenter {
    scorer: CollectionScorer,
}

impl PortfolioSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scorer(scorer: CollectionScorer) -> Self {
        Self { scorer }
    }

    /// Empty input yields the five tiers with zero members and an all-zero
    /// summary rather than an error.
    pub fn segment(
        &self,
        accounts: &[ReceivableAccount],
    ) -> Result<SegmentationResult, ValidationError> {
        let mut segments: Vec<AccountSegment> = RecoveryTier::ordered()
            .into_iter()
            .map(|tier| {
                let (score_min, score_max) = tier.score_range();
                AccountSegment {
                    tier,
                    score_min,
                    score_max,
                    strategy: tier.strategy(),
                    account_count: 0,
                    total_balance: 0.0,
                    expected_recovery: 0.0,
                    account_ids: Vec::new(),
                }
            })
            .collect();

        let mut score_sum = 0.0;
        let mut weighted_score_sum = 0.0;
        let mut balance_sum = 0.0;
        let mut recovery_sum = 0.0;

        for account in accounts {
            let prediction = self.scorer.score(&account.factors)?;
            let tier = RecoveryTier::for_score(prediction.score);
            let index = RecoveryTier::ordered()
                .iter()
                .position(|candidate| *candidate == tier)
                .unwrap_or(4);
            let segment = &mut segments[index];

            segment.account_count += 1;
            segment.total_balance += account.factors.balance;
            segment.expected_recovery += prediction.expected_collection_amount;
            segment.account_ids.push(account.account_id.clone());

            score_sum += f64::from(prediction.score);
            weighted_score_sum += f64::from(prediction.score) * account.factors.balance;
            balance_sum += account.factors.balance;
            recovery_sum += prediction.expected_collection_amount;
        }

        let total_accounts = accounts.len();
        let summary = PortfolioSummary {
            total_accounts,
            total_balance: balance_sum,
            total_expected_recovery: recovery_sum,
            average_likelihood: if total_accounts == 0 {
                0.0
            } else {
                score_sum / total_accounts as f64
            },
            balance_weighted_likelihood: if balance_sum == 0.0 {
                0.0
            } else {
                weighted_score_sum / balance_sum
            },
        };

        debug!(
            accounts = total_accounts,
            balance = summary.total_balance,
            expected = summary.total_expected_recovery,
            "segmented portfolio"
        );

        Ok(SegmentationResult { segments, summary })
    }
}
