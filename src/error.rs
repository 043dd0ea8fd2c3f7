use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rejection raised at the engine boundary for malformed input records.
///
/// Engine arithmetic itself is total: once a record passes validation every
/// function returns a degenerate-but-valid result (zero values, empty lists,
/// explanatory notes) instead of failing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },
    #[error("date range end {end} precedes start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("history must contain at least one observation")]
    EmptyHistory,
    #[error("assumption '{name}' has a zero base value; percent change is undefined")]
    ZeroBaseValue { name: String },
}

/// Inclusive calendar date window used by forecasting and KPI reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, inclusive of both endpoints.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

pub(crate) fn require_money(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteAmount { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn rejects_inverted_range() {
        let err = DateRange::new(date(2025, 6, 1), date(2025, 5, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateRange { .. }));
    }

    #[test]
    fn single_day_range_is_valid() {
        let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 1)).expect("valid");
        assert_eq!(range.days(), 1);
        assert!(range.contains(date(2025, 6, 1)));
    }

    #[test]
    fn money_guard_flags_negative_and_nan() {
        assert!(require_money("balance", -1.0).is_err());
        assert!(require_money("balance", f64::NAN).is_err());
        assert!(require_money("balance", 125.50).is_ok());
    }
}
