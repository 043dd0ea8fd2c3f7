use chrono::{Duration, NaiveDate};
use tracing::debug;

use super::domain::{CashFlowProjection, CashFlowSummary, WeeklyCashFlow};
use crate::analytics::scoring::CollectionScorer;
use crate::analytics::segmentation::ReceivableAccount;
use crate::error::{DateRange, ValidationError};

/// Accounts scoring below this are treated as not paying at all.
const LIKELIHOOD_FLOOR: u8 = 10;

pub(super) fn project_cash_flow(
    scorer: &CollectionScorer,
    accounts: &[ReceivableAccount],
    range: DateRange,
    today: NaiveDate,
) -> Result<CashFlowProjection, ValidationError> {
    let week_count = ((range.days() + 6) / 7) as usize;
    let mut weeks: Vec<WeeklyCashFlow> = (0..week_count)
        .map(|index| {
            let start = range.start() + Duration::days(index as i64 * 7);
            let end = (start + Duration::days(6)).min(range.end());
            WeeklyCashFlow {
                week_number: index as u32 + 1,
                start,
                end,
                expected_collections: 0.0,
                lower_bound: 0.0,
                upper_bound: 0.0,
                paying_accounts: 0,
                cumulative_collections: 0.0,
            }
        })
        .collect();

    let mut projected = 0;
    let mut excluded = 0;

    for account in accounts {
        let prediction = scorer.score(&account.factors)?;

        let days = match prediction.estimated_days_to_payment {
            Some(days) if prediction.score >= LIKELIHOOD_FLOOR => days,
            _ => {
                excluded += 1;
                continue;
            }
        };

        let payment_date = today + Duration::days(i64::from(days));
        if !range.contains(payment_date) {
            excluded += 1;
            continue;
        }

        let index = ((payment_date - range.start()).num_days() / 7) as usize;
        let week = &mut weeks[index];
        week.expected_collections += prediction.expected_collection_amount;
        week.lower_bound += prediction.confidence_interval.low;
        week.upper_bound += prediction.confidence_interval.high;
        week.paying_accounts += 1;
        projected += 1;
    }

    let mut cumulative = 0.0;
    for week in &mut weeks {
        week.expected_collections = round_cents(week.expected_collections);
        week.lower_bound = round_cents(week.lower_bound);
        week.upper_bound = round_cents(week.upper_bound);
        cumulative += week.expected_collections;
        week.cumulative_collections = round_cents(cumulative);
    }

    let peak_week = weeks
        .iter()
        .filter(|week| week.paying_accounts > 0)
        .max_by(|a, b| a.expected_collections.total_cmp(&b.expected_collections))
        .map(|week| week.week_number);

    let summary = CashFlowSummary {
        total_expected: round_cents(cumulative),
        peak_week,
        accounts_projected: projected,
        accounts_excluded: excluded,
    };

    debug!(
        weeks = weeks.len(),
        projected,
        excluded,
        total = summary.total_expected,
        "projected weekly cash flow"
    );

    Ok(CashFlowProjection {
        range,
        weeks,
        summary,
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
