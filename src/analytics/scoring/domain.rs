use serde::{Deserialize, Serialize};

use crate::error::{require_money, ValidationError};

/// Snapshot of one receivable account as handed over by the orchestrator.
///
/// All enum fields are closed: an unrecognized wire value fails
/// deserialization instead of defaulting, per the intake contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountScoringFactors {
    pub balance: f64,
    pub original_amount: f64,
    pub account_age_days: u32,
    pub days_past_due: u32,
    pub payment_history: PaymentHistoryRating,
    pub payments_made_count: u32,
    pub payments_made_total: f64,
    pub insurance: InsuranceCategory,
    pub has_valid_phone: bool,
    pub has_valid_email: bool,
    pub has_responded: bool,
    pub contact_attempts: u32,
    pub broken_promises: u32,
    pub returned_payments: u32,
    pub active_dispute: bool,
    pub hardship_program: bool,
    pub patient_age: Option<u32>,
    pub collection_state: CollectionState,
}

impl AccountScoringFactors {
    /// Guard applied before any arithmetic so NaN or negative money never
    /// reaches the weighted sums.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_money("balance", self.balance)?;
        require_money("original_amount", self.original_amount)?;
        require_money("payments_made_total", self.payments_made_total)?;
        Ok(())
    }

    /// Fraction of the original charge already paid down, in [0,1].
    pub fn paid_down_fraction(&self) -> f64 {
        if self.original_amount <= 0.0 {
            return 0.0;
        }
        ((self.original_amount - self.balance) / self.original_amount).clamp(0.0, 1.0)
    }
}

/// Payment behavior rating carried over from the account's billing history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentHistoryRating {
    Excellent,
    Good,
    Fair,
    Poor,
    NoHistory,
}

/// Coverage category used to weight payer reliability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsuranceCategory {
    Insured,
    Underinsured,
    Uninsured,
    Medicaid,
    Medicare,
    DualEligible,
}

/// Where the account currently sits in the collections workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionState {
    Current,
    EarlyOut,
    InCollections,
    PaymentPlan,
    Legal,
    WriteOffReview,
}

/// Score band derived from the composite collectability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectabilityBand {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

/// Recovery strategy vocabulary shared with the collections workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionStrategy {
    Hold,
    CharityScreening,
    WriteOff,
    StandardDunning,
    AcceleratedDunning,
    PhoneOutreach,
    PaymentPlan,
    SettlementOffer,
    LegalReview,
    AgencyPlacement,
}

impl CollectionStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            CollectionStrategy::Hold => "Hold pending dispute resolution",
            CollectionStrategy::CharityScreening => "Screen for charity/hardship programs",
            CollectionStrategy::WriteOff => "Small-balance write-off",
            CollectionStrategy::StandardDunning => "Standard statement cycle",
            CollectionStrategy::AcceleratedDunning => "Accelerated statement cycle",
            CollectionStrategy::PhoneOutreach => "Direct phone outreach",
            CollectionStrategy::PaymentPlan => "Offer structured payment plan",
            CollectionStrategy::SettlementOffer => "Discounted settlement offer",
            CollectionStrategy::LegalReview => "Refer for legal review",
            CollectionStrategy::AgencyPlacement => "Place with outside agency",
        }
    }
}

/// Scored factor family, kept on each breakdown entry for transparent audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreFactorKind {
    Balance,
    Age,
    PaymentHistory,
    Insurance,
    Contactability,
    Demographic,
    Penalty,
}

/// Discrete contribution to the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: ScoreFactorKind,
    pub points: i16,
    pub note: String,
}

/// Asymmetric confidence interval around the expected collection amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
    pub confidence_pct: f64,
}

/// Immutable scoring result for a single account at a single point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPrediction {
    pub score: u8,
    pub band: CollectabilityBand,
    pub full_collection_probability: f64,
    pub partial_collection_probability: f64,
    pub expected_collection_pct: f64,
    pub expected_collection_amount: f64,
    pub confidence_interval: ConfidenceInterval,
    /// `None` means the account is not expected to pay at all.
    pub estimated_days_to_payment: Option<u32>,
    pub estimated_days_to_full_collection: Option<u32>,
    pub recommended_strategy: CollectionStrategy,
    pub alternative_strategies: Vec<CollectionStrategy>,
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
    pub breakdown: Vec<FactorScore>,
}
