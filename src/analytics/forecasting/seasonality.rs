use std::sync::{Arc, RwLock};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::MonthlyCollectionObservation;
use crate::error::{require_money, ValidationError};

/// Immutable snapshot of the twelve monthly seasonality multipliers.
///
/// Recalculation never mutates an existing snapshot; it produces a new one
/// with a bumped version, and callers swap it in atomically. This replaces
/// the hidden module-global factor table the product previously relied on
/// while keeping its last-calculation-wins semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityModel {
    factors: [f64; 12],
    version: u64,
}

impl SeasonalityModel {
    /// Flat model: every month at 1.0, version 0.
    pub fn neutral() -> Self {
        Self {
            factors: [1.0; 12],
            version: 0,
        }
    }

    /// Multiplier for a calendar month in 1..=12.
    pub fn month_factor(&self, month: u32) -> f64 {
        debug_assert!((1..=12).contains(&month));
        self.factors[(month.clamp(1, 12) - 1) as usize]
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn factors(&self) -> &[f64; 12] {
        &self.factors
    }
}

impl Default for SeasonalityModel {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Result of a seasonality recalculation: the fresh snapshot plus the
/// qualitative shape of the cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityAnalysis {
    pub model: SeasonalityModel,
    /// Months (1-12) with a factor within 5% of the maximum.
    pub peak_months: Vec<u32>,
    /// Months (1-12) with a factor within 5% of the minimum.
    pub low_months: Vec<u32>,
    /// Spread between the strongest and weakest month, as a percent.
    pub cycle_strength_pct: f64,
    pub observation_count: usize,
}

/// Buckets history by calendar month and derives each month's factor as its
/// average divided by the overall average. Months without observations stay
/// at 1.0. Fails atomically: on error no new snapshot exists to swap in.
pub fn calculate_seasonality(
    history: &[MonthlyCollectionObservation],
    current: &SeasonalityModel,
) -> Result<SeasonalityAnalysis, ValidationError> {
    if history.is_empty() {
        return Err(ValidationError::EmptyHistory);
    }
    for observation in history {
        require_money("collected", observation.collected)?;
    }

    let mut month_totals = [0.0_f64; 12];
    let mut month_counts = [0_u32; 12];
    for observation in history {
        let index = (observation.period.month() - 1) as usize;
        month_totals[index] += observation.collected;
        month_counts[index] += 1;
    }

    let overall_total: f64 = month_totals.iter().sum();
    let overall_count: u32 = month_counts.iter().sum();
    let overall_average = overall_total / f64::from(overall_count);

    let mut factors = [1.0_f64; 12];
    if overall_average > 0.0 {
        for month in 0..12 {
            if month_counts[month] > 0 {
                let month_average = month_totals[month] / f64::from(month_counts[month]);
                factors[month] = month_average / overall_average;
            }
        }
    }

    let observed: Vec<(u32, f64)> = (0..12)
        .filter(|&month| month_counts[month] > 0)
        .map(|month| (month as u32 + 1, factors[month]))
        .collect();

    let max_factor = observed
        .iter()
        .map(|(_, factor)| *factor)
        .fold(f64::MIN, f64::max);
    let min_factor = observed
        .iter()
        .map(|(_, factor)| *factor)
        .fold(f64::MAX, f64::min);

    let peak_months = observed
        .iter()
        .filter(|(_, factor)| *factor >= max_factor * 0.95)
        .map(|(month, _)| *month)
        .collect();
    let low_months = observed
        .iter()
        .filter(|(_, factor)| *factor <= min_factor * 1.05)
        .map(|(month, _)| *month)
        .collect();

    let model = SeasonalityModel {
        factors,
        version: current.version + 1,
    };

    debug!(
        version = model.version,
        months_observed = observed.len(),
        "recalculated seasonality model"
    );

    Ok(SeasonalityAnalysis {
        model,
        peak_months,
        low_months,
        cycle_strength_pct: ((max_factor - min_factor) * 100.0).max(0.0),
        observation_count: history.len(),
    })
}

/// Shared-service holder for the current seasonality snapshot.
///
/// Readers clone an `Arc` to the snapshot and compute against it unlocked;
/// a recalculation swaps the pointer in one write. A forecast therefore
/// never observes a half-updated factor table.
#[derive(Debug)]
pub struct SeasonalityStore {
    current: RwLock<Arc<SeasonalityModel>>,
}

impl SeasonalityStore {
    pub fn new(model: SeasonalityModel) -> Self {
        Self {
            current: RwLock::new(Arc::new(model)),
        }
    }

    pub fn load(&self) -> Arc<SeasonalityModel> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn swap(&self, model: SeasonalityModel) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(model);
    }
}

impl Default for SeasonalityStore {
    fn default() -> Self {
        Self::new(SeasonalityModel::neutral())
    }
}
