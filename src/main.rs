//! Finance Engine CLI
//!
//! Demo driver: runs a savings projection, prints the ledger, and shows the
//! goal solver on the same numbers

use anyhow::Context;
use finance_engine::growth::{required_contribution, simulate, SimulationParams};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Finance Engine v0.1.0");
    println!("=====================\n");

    // Representative plan: 1,000 starting balance, 150/month, 0.5%/month
    let params = SimulationParams::new(1000.0, 150.0, 0.5, 120);

    println!("Plan:");
    println!("  Initial principal: ${:.2}", params.initial_principal);
    println!("  Monthly contribution: ${:.2}", params.monthly_contribution);
    println!("  Monthly rate: {:.3}%", params.monthly_rate_percent);
    println!("  Horizon: {} months", params.months);
    println!();

    let result = simulate(&params)?;

    // Print header
    println!("Projection Results ({} months):", result.steps.len());
    println!("{:>5} {:>14} {:>12} {:>12} {:>14}",
        "Month", "Opening", "Contrib", "Interest", "Closing");
    println!("{}", "-".repeat(62));

    // Print first 24 months to console
    for step in result.steps.iter().take(24) {
        println!("{:>5} {:>14.2} {:>12.2} {:>12.2} {:>14.2}",
            step.month_index,
            step.opening_balance,
            step.contribution,
            step.interest_accrued,
            step.closing_balance,
        );
    }

    if result.steps.len() > 24 {
        println!("... ({} more months)", result.steps.len() - 24);
    }

    // Write full ledger to CSV
    let csv_path = "projection_output.csv";
    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("unable to create {}", csv_path))?;
    for step in &result.steps {
        writer.serialize(step)?;
    }
    writer.flush()?;

    println!("\nFull ledger written to: {}", csv_path);

    // Print summary
    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Months: {}", summary.total_months);
    println!("  Total Contributed: ${:.2}", summary.total_contributed);
    println!("  Total Interest: ${:.2}", summary.total_interest);
    println!("  Final Balance: ${:.2}", summary.final_balance);

    // Worked goal example on the same balance and rate
    let target = 50_000.0;
    let needed = required_contribution(target, params.initial_principal,
        params.monthly_rate_percent, params.months as i32)?;
    println!("\nGoal check:");
    println!("  Reaching ${:.2} in {} months requires ${:.2}/month",
        target, params.months, needed);

    Ok(())
}
