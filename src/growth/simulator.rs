//! Forward compound-growth projection over a monthly ledger

use crate::error::EngineError;
use super::ledger::{SimulationResult, SimulationStep};

/// Longest supported projection horizon (300 years of months)
///
/// Bounds ledger allocation against malformed input; real callers project
/// decades at most.
pub const MAX_SIMULATION_MONTHS: u32 = 3600;

/// Inputs for a forward projection run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    /// Starting lump sum
    pub initial_principal: f64,

    /// Fixed amount added at the end of each month
    pub monthly_contribution: f64,

    /// Growth rate per month, in percent (1.0 = 1%/month); negative rates
    /// model depreciation
    pub monthly_rate_percent: f64,

    /// Number of months to project
    pub months: u32,
}

impl SimulationParams {
    pub fn new(
        initial_principal: f64,
        monthly_contribution: f64,
        monthly_rate_percent: f64,
        months: u32,
    ) -> Self {
        Self {
            initial_principal,
            monthly_contribution,
            monthly_rate_percent,
            months,
        }
    }

    /// Check inputs against the documented domain
    fn validate(&self) -> Result<(), EngineError> {
        if !self.initial_principal.is_finite() || self.initial_principal < 0.0 {
            return Err(EngineError::InvalidParameters(format!(
                "initial principal must be finite and non-negative, got {}",
                self.initial_principal
            )));
        }
        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(EngineError::InvalidParameters(format!(
                "monthly contribution must be finite and non-negative, got {}",
                self.monthly_contribution
            )));
        }
        if !self.monthly_rate_percent.is_finite() || self.monthly_rate_percent <= -100.0 {
            return Err(EngineError::InvalidParameters(format!(
                "monthly rate must be finite and above -100%, got {}",
                self.monthly_rate_percent
            )));
        }
        if self.months > MAX_SIMULATION_MONTHS {
            return Err(EngineError::HorizonTooLong {
                months: self.months,
                max: MAX_SIMULATION_MONTHS,
            });
        }
        Ok(())
    }
}

/// Project an account balance forward month by month
///
/// Each month accrues interest on the opening balance, then adds the
/// contribution. No intermediate rounding: balances accumulate in f64 at full
/// precision, which over the capped horizon keeps the relative error near
/// 1e-12 of the balance, far below a cent for realistic amounts. Display
/// rounding belongs to the caller.
///
/// `months == 0` returns an empty ledger with `final_balance` equal to the
/// principal.
pub fn simulate(params: &SimulationParams) -> Result<SimulationResult, EngineError> {
    params.validate()?;

    let rate = params.monthly_rate_percent / 100.0;
    let mut result = SimulationResult::new();
    let mut balance = params.initial_principal;

    for month_index in 1..=params.months {
        let opening_balance = balance;
        let interest_accrued = balance * rate;
        balance = balance + interest_accrued + params.monthly_contribution;

        result.add_step(SimulationStep {
            month_index,
            opening_balance,
            contribution: params.monthly_contribution,
            interest_accrued,
            closing_balance: balance,
        });
    }

    result.total_contributed =
        params.initial_principal + params.monthly_contribution * params.months as f64;
    result.total_interest = balance - result.total_contributed;
    result.final_balance = balance;

    log::debug!(
        "simulated {} months: contributed {:.2}, interest {:.2}, final {:.2}",
        params.months,
        result.total_contributed,
        result.total_interest,
        result.final_balance
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ledger_is_contiguous() {
        let params = SimulationParams::new(1000.0, 50.0, 0.4, 36);
        let result = simulate(&params).unwrap();

        assert_eq!(result.steps.len(), 36);
        for (i, step) in result.steps.iter().enumerate() {
            assert_eq!(step.month_index, i as u32 + 1);
        }
    }

    #[test]
    fn test_totals_reconcile() {
        let params = SimulationParams::new(2500.0, 75.0, 0.8, 120);
        let result = simulate(&params).unwrap();

        assert_relative_eq!(
            result.total_contributed + result.total_interest,
            result.final_balance,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.total_contributed, 2500.0 + 75.0 * 120.0);
    }

    #[test]
    fn test_flat_when_no_growth_no_contribution() {
        for months in [0, 1, 12, 600] {
            let params = SimulationParams::new(1234.56, 0.0, 0.0, months);
            let result = simulate(&params).unwrap();
            assert_eq!(result.final_balance, 1234.56);
            assert_eq!(result.steps.len(), months as usize);
        }
    }

    #[test]
    fn test_zero_months_returns_principal() {
        let params = SimulationParams::new(800.0, 100.0, 2.0, 0);
        let result = simulate(&params).unwrap();

        assert!(result.steps.is_empty());
        assert_eq!(result.final_balance, 800.0);
        assert_eq!(result.total_contributed, 800.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_reference_scenario() {
        // 1000 principal, 100/month, 1%/month for a year
        let params = SimulationParams::new(1000.0, 100.0, 1.0, 12);
        let result = simulate(&params).unwrap();

        // Closed form: 1000 * 1.01^12 + 100 * (1.01^12 - 1) / 0.01
        assert_eq!(result.total_contributed, 2200.0);
        assert_relative_eq!(result.final_balance, 2395.075331, max_relative = 1e-8);
        assert_relative_eq!(result.total_interest, 195.075331, max_relative = 1e-6);

        // First month: interest on the principal only, contribution after
        let first = &result.steps[0];
        assert_eq!(first.opening_balance, 1000.0);
        assert_relative_eq!(first.interest_accrued, 10.0);
        assert_relative_eq!(first.closing_balance, 1110.0);
    }

    #[test]
    fn test_negative_rate_depreciates() {
        let params = SimulationParams::new(1000.0, 0.0, -1.0, 12);
        let result = simulate(&params).unwrap();

        assert_relative_eq!(
            result.final_balance,
            1000.0 * 0.99f64.powi(12),
            max_relative = 1e-12
        );
        assert!(result.total_interest < 0.0);
    }

    #[test]
    fn test_steps_chain() {
        let params = SimulationParams::new(500.0, 20.0, 0.25, 24);
        let result = simulate(&params).unwrap();

        let mut prev_close = 500.0;
        for step in &result.steps {
            assert_eq!(step.opening_balance, prev_close);
            assert_relative_eq!(
                step.closing_balance,
                step.opening_balance + step.interest_accrued + step.contribution,
                max_relative = 1e-12
            );
            prev_close = step.closing_balance;
        }
        assert_eq!(prev_close, result.final_balance);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(simulate(&SimulationParams::new(-1.0, 0.0, 0.0, 1)).is_err());
        assert!(simulate(&SimulationParams::new(0.0, -1.0, 0.0, 1)).is_err());
        assert!(simulate(&SimulationParams::new(0.0, 0.0, f64::NAN, 1)).is_err());
        assert!(simulate(&SimulationParams::new(f64::INFINITY, 0.0, 0.0, 1)).is_err());
        assert!(simulate(&SimulationParams::new(0.0, 0.0, -100.0, 1)).is_err());

        let too_long = SimulationParams::new(0.0, 0.0, 0.0, MAX_SIMULATION_MONTHS + 1);
        assert!(matches!(
            simulate(&too_long),
            Err(EngineError::HorizonTooLong { .. })
        ));
    }

    #[test]
    fn test_summary_matches_totals() {
        let params = SimulationParams::new(1000.0, 100.0, 1.0, 12);
        let result = simulate(&params).unwrap();
        let summary = result.summary();

        assert_eq!(summary.total_months, 12);
        assert_eq!(summary.total_recurring, 1200.0);
        assert_relative_eq!(summary.total_interest, result.total_interest, max_relative = 1e-9);
        assert_eq!(summary.final_balance, result.final_balance);
    }
}
