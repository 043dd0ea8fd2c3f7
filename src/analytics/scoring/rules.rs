use super::config::ScoringPolicy;
use super::domain::{
    AccountScoringFactors, FactorScore, InsuranceCategory, PaymentHistoryRating, ScoreFactorKind,
};

pub(crate) struct ScoreOutcome {
    pub score: u8,
    pub breakdown: Vec<FactorScore>,
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
}

/// Applies the six weighted sub-scores and the flat penalties, accumulating
/// the audit breakdown and narrative factors along the way.
pub(crate) fn score_factors(
    factors: &AccountScoringFactors,
    policy: &ScoringPolicy,
) -> ScoreOutcome {
    let mut breakdown = Vec::new();
    let mut risks = Vec::new();
    let mut positives = Vec::new();
    let mut total: i16 = 0;

    total += balance_points(factors, policy, &mut breakdown, &mut risks, &mut positives);
    total += age_points(factors, policy, &mut breakdown, &mut risks, &mut positives);
    total += history_points(factors, policy, &mut breakdown, &mut risks, &mut positives);
    total += insurance_points(factors, policy, &mut breakdown, &mut positives);
    total += contact_points(factors, policy, &mut breakdown, &mut risks, &mut positives);
    total += demographic_points(factors, policy, &mut breakdown);
    total += penalty_points(factors, policy, &mut breakdown, &mut risks);

    ScoreOutcome {
        score: total.clamp(0, 100) as u8,
        breakdown,
        risk_factors: risks,
        positive_factors: positives,
    }
}

fn balance_points(
    factors: &AccountScoringFactors,
    policy: &ScoringPolicy,
    breakdown: &mut Vec<FactorScore>,
    risks: &mut Vec<String>,
    positives: &mut Vec<String>,
) -> i16 {
    let weights = &policy.balance;
    let balance = factors.balance;
    let paid_down = factors.paid_down_fraction();

    // The paid-down check outranks the sweet-spot range: a large balance
    // that is mostly paid off outscores a mid balance with no history.
    let (points, note) = if balance < weights.minimum_viable {
        risks.push(format!(
            "balance ${balance:.2} below the ${:.0} collectable minimum",
            weights.minimum_viable
        ));
        (
            weights.small_balance_points,
            format!("balance ${balance:.2} too small to justify outreach"),
        )
    } else if paid_down >= weights.paid_down_fraction {
        positives.push(format!(
            "account already {:.0}% paid down",
            paid_down * 100.0
        ));
        (
            weights.paid_down_points,
            format!("{:.0}% of original charge already recovered", paid_down * 100.0),
        )
    } else if balance <= weights.sweet_spot_max {
        positives.push("balance in the high-recovery sweet spot".to_string());
        (
            weights.sweet_spot_points,
            format!("balance ${balance:.2} within collectable sweet spot"),
        )
    } else {
        let stepped = weights
            .taper
            .iter()
            .find(|step| balance <= step.up_to)
            .map(|step| step.points);
        if stepped.is_none() {
            risks.push(format!("very large balance ${balance:.2}"));
        }
        (
            stepped.unwrap_or(weights.large_balance_points),
            format!("balance ${balance:.2} above sweet spot, tapered"),
        )
    };

    breakdown.push(FactorScore {
        factor: ScoreFactorKind::Balance,
        points,
        note,
    });
    points
}

fn age_points(
    factors: &AccountScoringFactors,
    policy: &ScoringPolicy,
    breakdown: &mut Vec<FactorScore>,
    risks: &mut Vec<String>,
    positives: &mut Vec<String>,
) -> i16 {
    let points = policy.age_points(factors.days_past_due);

    if factors.days_past_due == 0 {
        positives.push("account is current".to_string());
    } else if factors.days_past_due > 180 {
        risks.push(format!("{} days past due", factors.days_past_due));
    }

    breakdown.push(FactorScore {
        factor: ScoreFactorKind::Age,
        points,
        note: format!("{} days past due", factors.days_past_due),
    });
    points
}

fn history_points(
    factors: &AccountScoringFactors,
    policy: &ScoringPolicy,
    breakdown: &mut Vec<FactorScore>,
    risks: &mut Vec<String>,
    positives: &mut Vec<String>,
) -> i16 {
    let weights = &policy.history;
    let base = match factors.payment_history {
        PaymentHistoryRating::Excellent => weights.excellent,
        PaymentHistoryRating::Good => weights.good,
        PaymentHistoryRating::Fair => weights.fair,
        PaymentHistoryRating::Poor => weights.poor,
        PaymentHistoryRating::NoHistory => weights.no_history,
    };

    // Counts are widened before multiplying so a pathological record cannot
    // wrap a penalty into a bonus.
    let payment_bonus = (i64::from(factors.payments_made_count)
        * i64::from(weights.per_payment_bonus))
    .min(i64::from(weights.payment_bonus_cap));
    let paid_down = factors.paid_down_fraction();
    let paid_bonus = if paid_down >= 0.5 {
        weights.half_paid_bonus
    } else if paid_down >= 0.25 {
        weights.quarter_paid_bonus
    } else {
        0
    };

    let promise_penalty =
        i64::from(factors.broken_promises) * i64::from(weights.broken_promise_penalty);
    let returned_penalty =
        i64::from(factors.returned_payments) * i64::from(weights.returned_payment_penalty);

    match factors.payment_history {
        PaymentHistoryRating::Excellent => {
            positives.push("excellent payment history".to_string());
        }
        PaymentHistoryRating::Poor => {
            risks.push("poor payment history".to_string());
        }
        _ => {}
    }
    if factors.broken_promises > 0 {
        risks.push(format!("{} broken payment promise(s)", factors.broken_promises));
    }
    if factors.returned_payments > 0 {
        risks.push(format!("{} returned payment(s)", factors.returned_payments));
    }

    let points = (i64::from(base) + payment_bonus + i64::from(paid_bonus) + promise_penalty
        + returned_penalty)
        .clamp(0, 20) as i16;
    breakdown.push(FactorScore {
        factor: ScoreFactorKind::PaymentHistory,
        points,
        note: format!(
            "{:?} rating, {} prior payment(s)",
            factors.payment_history, factors.payments_made_count
        ),
    });
    points
}

fn insurance_points(
    factors: &AccountScoringFactors,
    policy: &ScoringPolicy,
    breakdown: &mut Vec<FactorScore>,
    positives: &mut Vec<String>,
) -> i16 {
    let weights = &policy.insurance;
    let points = match factors.insurance {
        InsuranceCategory::Insured => weights.insured,
        InsuranceCategory::Medicare => weights.medicare,
        InsuranceCategory::DualEligible => weights.dual_eligible,
        InsuranceCategory::Medicaid => weights.medicaid,
        InsuranceCategory::Underinsured => weights.underinsured,
        InsuranceCategory::Uninsured => weights.uninsured,
    };

    if matches!(factors.insurance, InsuranceCategory::Insured) {
        positives.push("commercial coverage on file".to_string());
    }

    breakdown.push(FactorScore {
        factor: ScoreFactorKind::Insurance,
        points,
        note: format!("{:?} coverage", factors.insurance),
    });
    points
}

fn contact_points(
    factors: &AccountScoringFactors,
    policy: &ScoringPolicy,
    breakdown: &mut Vec<FactorScore>,
    risks: &mut Vec<String>,
    positives: &mut Vec<String>,
) -> i16 {
    let weights = &policy.contact;
    let mut points = 0;
    if factors.has_valid_phone {
        points += weights.valid_phone;
        positives.push("valid phone on file".to_string());
    }
    if factors.has_valid_email {
        points += weights.valid_email;
    }
    if factors.has_responded {
        points += weights.responded;
        positives.push("has responded to outreach".to_string());
    }
    if !factors.has_responded && factors.contact_attempts > weights.unreachable_attempts {
        points += weights.unreachable_penalty;
        risks.push(format!(
            "no response after {} contact attempts",
            factors.contact_attempts
        ));
    }

    let points = points.clamp(0, 15);
    breakdown.push(FactorScore {
        factor: ScoreFactorKind::Contactability,
        points,
        note: format!(
            "phone {}, email {}, {} attempt(s)",
            factors.has_valid_phone, factors.has_valid_email, factors.contact_attempts
        ),
    });
    points
}

fn demographic_points(
    factors: &AccountScoringFactors,
    policy: &ScoringPolicy,
    breakdown: &mut Vec<FactorScore>,
) -> i16 {
    let weights = &policy.demographic;
    let points = match factors.patient_age {
        Some(age) if age >= weights.working_age_min && age <= weights.working_age_max => {
            weights.neutral + weights.working_age_bonus
        }
        _ => weights.neutral,
    };

    breakdown.push(FactorScore {
        factor: ScoreFactorKind::Demographic,
        points,
        note: match factors.patient_age {
            Some(age) => format!("patient age {age}"),
            None => "patient age unknown".to_string(),
        },
    });
    points
}

fn penalty_points(
    factors: &AccountScoringFactors,
    policy: &ScoringPolicy,
    breakdown: &mut Vec<FactorScore>,
    risks: &mut Vec<String>,
) -> i16 {
    let weights = &policy.penalties;
    let mut total = 0;

    if factors.active_dispute {
        total += weights.active_dispute;
        risks.push("active dispute on file".to_string());
        breakdown.push(FactorScore {
            factor: ScoreFactorKind::Penalty,
            points: weights.active_dispute,
            note: "active dispute".to_string(),
        });
    }
    if factors.hardship_program {
        total += weights.hardship_program;
        risks.push("enrolled in hardship program".to_string());
        breakdown.push(FactorScore {
            factor: ScoreFactorKind::Penalty,
            points: weights.hardship_program,
            note: "hardship program enrollment".to_string(),
        });
    }
    if factors.broken_promises >= 2 {
        total += weights.repeat_broken_promises;
        breakdown.push(FactorScore {
            factor: ScoreFactorKind::Penalty,
            points: weights.repeat_broken_promises,
            note: format!("{} broken promises", factors.broken_promises),
        });
    }
    if factors.returned_payments >= 2 {
        total += weights.repeat_returned_payments;
        breakdown.push(FactorScore {
            factor: ScoreFactorKind::Penalty,
            points: weights.repeat_returned_payments,
            note: format!("{} returned payments", factors.returned_payments),
        });
    }

    total
}
