//! Goal-based contribution solver
//!
//! Answers "what level monthly contribution closes the gap between the
//! current balance and a target balance in the remaining months", the
//! inverse of the forward simulator.

use crate::error::EngineError;

/// Future value the current balance alone reaches after `months` months of
/// compounding at the given monthly rate (no contributions)
pub fn projected_balance(current_balance: f64, monthly_rate_percent: f64, months: u32) -> f64 {
    let rate = monthly_rate_percent / 100.0;
    current_balance * (1.0 + rate).powi(months as i32)
}

/// Minimum level monthly contribution required to reach `target_balance`
/// from `current_balance` in `months_remaining` months at the given rate.
///
/// Returns 0 when there is no time left (`months_remaining <= 0`) and when
/// organic growth of the current balance already reaches the target; the two
/// cases are deliberately not distinguished. The result is rounded to the
/// nearest cent — the one mandated rounding point in the engine, since the
/// output is a user-facing recommended action rather than an intermediate.
pub fn required_contribution(
    target_balance: f64,
    current_balance: f64,
    monthly_rate_percent: f64,
    months_remaining: i32,
) -> Result<f64, EngineError> {
    validate_inputs(target_balance, current_balance, monthly_rate_percent)?;

    // No time left: the goal is already due, nothing to recommend
    if months_remaining <= 0 {
        return Ok(0.0);
    }

    let months = months_remaining as u32;
    let rate = monthly_rate_percent / 100.0;
    let projected_current = projected_balance(current_balance, monthly_rate_percent, months);

    // Organic growth alone reaches the target
    if projected_current >= target_balance {
        return Ok(0.0);
    }

    // Level payment solving the annuity equation for the remaining gap.
    // At rate zero the annuity factor degenerates to 0/0; the limit is the
    // month count (even split of the gap, no compounding).
    let annuity_factor = if rate == 0.0 {
        months as f64
    } else {
        let growth_factor = (1.0 + rate).powi(months as i32);
        (growth_factor - 1.0) / rate
    };

    let contribution = (target_balance - projected_current) / annuity_factor;

    log::debug!(
        "gap {:.2} over {} months at {}%/month -> contribution {:.2}",
        target_balance - projected_current,
        months,
        monthly_rate_percent,
        contribution
    );

    Ok(round_to_cents(contribution.max(0.0)))
}

fn validate_inputs(
    target_balance: f64,
    current_balance: f64,
    monthly_rate_percent: f64,
) -> Result<(), EngineError> {
    if !target_balance.is_finite() {
        return Err(EngineError::InvalidParameters(format!(
            "target balance must be finite, got {}",
            target_balance
        )));
    }
    if !current_balance.is_finite() {
        return Err(EngineError::InvalidParameters(format!(
            "current balance must be finite, got {}",
            current_balance
        )));
    }
    if !monthly_rate_percent.is_finite() || monthly_rate_percent <= -100.0 {
        return Err(EngineError::InvalidParameters(format!(
            "monthly rate must be finite and above -100%, got {}",
            monthly_rate_percent
        )));
    }
    Ok(())
}

/// Round to the nearest currency unit (two decimal places)
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
