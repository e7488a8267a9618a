//! Goal planning on top of the simulator and solver
//!
//! Goal screens want one record answering "am I on track, and if not, what
//! should I put away each month" — this composes the two engine operations
//! into that record without adding any state of its own.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use super::ledger::SimulationResult;
use super::simulator::{simulate, SimulationParams};
use super::solver::{projected_balance, required_contribution};

/// A recommended savings plan toward a target balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalPlan {
    /// Target balance the plan aims for
    pub target_balance: f64,

    /// Balance the plan starts from
    pub current_balance: f64,

    /// Months left to reach the target
    pub months_remaining: i32,

    /// What the current balance alone grows to in the remaining months
    pub projected_without_contribution: f64,

    /// Recommended level monthly contribution, rounded to the cent; zero when
    /// the goal is already met organically or no time remains
    pub required_monthly: f64,

    /// True when organic growth alone covers the target
    pub on_track: bool,

    /// Month-by-month ledger at the recommended contribution; empty when no
    /// time remains
    pub projection: SimulationResult,
}

/// Build a savings plan for a target balance
///
/// Solves for the required monthly contribution, then projects the ledger the
/// caller would follow at exactly that contribution. A caller that needs to
/// tell "goal already met" apart from "no time left" reads `months_remaining`
/// and `projected_without_contribution` off the plan; `required_monthly` is 0
/// in both cases.
pub fn plan_goal(
    target_balance: f64,
    current_balance: f64,
    monthly_rate_percent: f64,
    months_remaining: i32,
) -> Result<GoalPlan, EngineError> {
    let required_monthly = required_contribution(
        target_balance,
        current_balance,
        monthly_rate_percent,
        months_remaining,
    )?;

    let months = months_remaining.max(0) as u32;
    let projected_without_contribution =
        projected_balance(current_balance, monthly_rate_percent, months);

    let projection = simulate(&SimulationParams::new(
        current_balance,
        required_monthly,
        monthly_rate_percent,
        months,
    ))?;

    Ok(GoalPlan {
        target_balance,
        current_balance,
        months_remaining,
        projected_without_contribution,
        required_monthly,
        on_track: projected_without_contribution >= target_balance,
        projection,
    })
}
