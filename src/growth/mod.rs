//! Compound growth simulation: forward projection and the reverse
//! contribution solver

mod ledger;
mod planner;
mod simulator;
mod solver;

pub use ledger::{SimulationResult, SimulationStep, SimulationSummary};
pub use planner::{plan_goal, GoalPlan};
pub use simulator::{simulate, SimulationParams, MAX_SIMULATION_MONTHS};
pub use solver::{projected_balance, required_contribution};
