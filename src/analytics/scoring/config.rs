use serde::{Deserialize, Serialize};

/// Weight and threshold tables driving the collectability score.
///
/// Every knob the scoring arithmetic consumes lives here so the decision
/// policy can be audited and tuned independently of the code that applies it.
/// Two named policies ship: [`ScoringPolicy::predictive`] backs the general
/// prediction surface, [`ScoringPolicy::collections`] the collections-module
/// worklist. They share the algorithm and differ only in penalty magnitudes
/// and band cutoffs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringPolicy {
    pub name: &'static str,
    pub balance: BalanceWeights,
    pub age_steps: Vec<AgeStep>,
    pub history: HistoryWeights,
    pub insurance: InsuranceWeights,
    pub contact: ContactWeights,
    pub demographic: DemographicWeights,
    pub penalties: PenaltyWeights,
    pub bands: BandThresholds,
}

/// Balance sub-score table (0-20 points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceWeights {
    /// Balances under this are not worth the outreach cost.
    pub minimum_viable: f64,
    pub small_balance_points: i16,
    /// Accounts at or past this paid-down fraction score
    /// `paid_down_points` regardless of size. Checked before the sweet spot.
    pub paid_down_fraction: f64,
    pub paid_down_points: i16,
    pub sweet_spot_max: f64,
    pub sweet_spot_points: i16,
    /// Ordered taper for balances above the sweet spot; first matching
    /// `up_to` wins.
    pub taper: Vec<BalanceStep>,
    pub large_balance_points: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceStep {
    pub up_to: f64,
    pub points: i16,
}

/// One step of the monotonically decreasing days-past-due table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeStep {
    pub up_to_days: u32,
    pub points: i16,
}

/// Payment-history sub-score bases and adjustments (clamped to 0-20).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryWeights {
    pub excellent: i16,
    pub good: i16,
    pub fair: i16,
    pub poor: i16,
    pub no_history: i16,
    pub per_payment_bonus: i16,
    pub payment_bonus_cap: i16,
    pub half_paid_bonus: i16,
    pub quarter_paid_bonus: i16,
    pub broken_promise_penalty: i16,
    pub returned_payment_penalty: i16,
}

/// Fixed constants by coverage category (0-15).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceWeights {
    pub insured: i16,
    pub medicare: i16,
    pub dual_eligible: i16,
    pub medicaid: i16,
    pub underinsured: i16,
    pub uninsured: i16,
}

/// Contactability sub-score (clamped to 0-15).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactWeights {
    pub valid_phone: i16,
    pub valid_email: i16,
    pub responded: i16,
    /// Applied once attempts exceed the threshold with no response.
    pub unreachable_penalty: i16,
    pub unreachable_attempts: u32,
}

/// Demographic sub-score (0-10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicWeights {
    pub neutral: i16,
    pub working_age_bonus: i16,
    pub working_age_min: u32,
    pub working_age_max: u32,
}

/// Flat penalties subtracted from the summed sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    pub active_dispute: i16,
    pub hardship_program: i16,
    /// Applied once `broken_promises >= 2`.
    pub repeat_broken_promises: i16,
    /// Applied once `returned_payments >= 2`.
    pub repeat_returned_payments: i16,
}

/// Lower bounds of the four upper classification bands; anything below
/// `low` is very-low. Bands partition [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub very_high: u8,
    pub high: u8,
    pub medium: u8,
    pub low: u8,
}

impl ScoringPolicy {
    /// Policy behind the general prediction surface.
    pub fn predictive() -> Self {
        Self {
            name: "predictive",
            penalties: PenaltyWeights {
                active_dispute: -15,
                hardship_program: -15,
                repeat_broken_promises: -8,
                repeat_returned_payments: -6,
            },
            bands: BandThresholds {
                very_high: 80,
                high: 60,
                medium: 40,
                low: 20,
            },
            ..Self::shared()
        }
    }

    /// Policy behind the collections worklist; harsher hardship penalty and
    /// tighter bands, kept as a distinct named policy rather than merged.
    pub fn collections() -> Self {
        Self {
            name: "collections",
            penalties: PenaltyWeights {
                active_dispute: -15,
                hardship_program: -20,
                repeat_broken_promises: -8,
                repeat_returned_payments: -6,
            },
            bands: BandThresholds {
                very_high: 75,
                high: 55,
                medium: 35,
                low: 15,
            },
            ..Self::shared()
        }
    }

    fn shared() -> Self {
        Self {
            name: "shared",
            balance: BalanceWeights {
                minimum_viable: 100.0,
                small_balance_points: 4,
                paid_down_fraction: 0.5,
                paid_down_points: 18,
                sweet_spot_max: 2_500.0,
                sweet_spot_points: 20,
                taper: vec![
                    BalanceStep {
                        up_to: 5_000.0,
                        points: 16,
                    },
                    BalanceStep {
                        up_to: 10_000.0,
                        points: 12,
                    },
                    BalanceStep {
                        up_to: 25_000.0,
                        points: 8,
                    },
                ],
                large_balance_points: 5,
            },
            age_steps: vec![
                AgeStep {
                    up_to_days: 0,
                    points: 20,
                },
                AgeStep {
                    up_to_days: 30,
                    points: 17,
                },
                AgeStep {
                    up_to_days: 60,
                    points: 14,
                },
                AgeStep {
                    up_to_days: 90,
                    points: 11,
                },
                AgeStep {
                    up_to_days: 120,
                    points: 8,
                },
                AgeStep {
                    up_to_days: 180,
                    points: 5,
                },
                AgeStep {
                    up_to_days: 365,
                    points: 3,
                },
            ],
            history: HistoryWeights {
                excellent: 17,
                good: 13,
                fair: 9,
                poor: 4,
                no_history: 10,
                per_payment_bonus: 1,
                payment_bonus_cap: 3,
                half_paid_bonus: 2,
                quarter_paid_bonus: 1,
                broken_promise_penalty: -3,
                returned_payment_penalty: -3,
            },
            insurance: InsuranceWeights {
                insured: 15,
                medicare: 12,
                dual_eligible: 10,
                medicaid: 8,
                underinsured: 6,
                uninsured: 3,
            },
            contact: ContactWeights {
                valid_phone: 5,
                valid_email: 4,
                responded: 5,
                unreachable_penalty: -4,
                unreachable_attempts: 5,
            },
            demographic: DemographicWeights {
                neutral: 5,
                working_age_bonus: 2,
                working_age_min: 25,
                working_age_max: 60,
            },
            penalties: PenaltyWeights {
                active_dispute: -15,
                hardship_program: -15,
                repeat_broken_promises: -8,
                repeat_returned_payments: -6,
            },
            bands: BandThresholds {
                very_high: 80,
                high: 60,
                medium: 40,
                low: 20,
            },
        }
    }

    /// Age sub-score lookup; days beyond the last step score the floor of 1.
    pub fn age_points(&self, days_past_due: u32) -> i16 {
        for step in &self.age_steps {
            if days_past_due <= step.up_to_days {
                return step.points;
            }
        }
        1
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::predictive()
    }
}
