//! Ledger output structures for growth simulations

use serde::{Deserialize, Serialize};

/// A single row of simulation output for one month
///
/// Balances carry full precision; rounding for display is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationStep {
    /// Simulation month (1-indexed)
    pub month_index: u32,

    /// Balance at the start of the month
    pub opening_balance: f64,

    /// Recurring contribution added this month
    pub contribution: f64,

    /// Interest accrued on the opening balance this month
    pub interest_accrued: f64,

    /// Balance at the end of the month
    pub closing_balance: f64,
}

/// Complete simulation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Balance after the final month
    pub final_balance: f64,

    /// Initial principal plus all recurring contributions
    pub total_contributed: f64,

    /// Interest accrued across the whole run
    ///
    /// Invariant: `total_contributed + total_interest == final_balance`.
    pub total_interest: f64,

    /// Monthly ledger rows, in `month_index` order
    pub steps: Vec<SimulationStep>,
}

impl SimulationResult {
    pub fn new() -> Self {
        Self {
            final_balance: 0.0,
            total_contributed: 0.0,
            total_interest: 0.0,
            steps: Vec::new(),
        }
    }

    /// Append a ledger row
    pub fn add_step(&mut self, step: SimulationStep) {
        self.steps.push(step);
    }

    /// Get summary statistics
    pub fn summary(&self) -> SimulationSummary {
        let total_interest_accrued: f64 = self.steps.iter().map(|s| s.interest_accrued).sum();
        let total_recurring: f64 = self.steps.iter().map(|s| s.contribution).sum();

        SimulationSummary {
            total_months: self.steps.len() as u32,
            total_contributed: self.total_contributed,
            total_recurring,
            total_interest: total_interest_accrued,
            final_balance: self.final_balance,
        }
    }
}

impl Default for SimulationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_months: u32,
    pub total_contributed: f64,
    pub total_recurring: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}
