//! Sweep contribution levels and growth rates over a fixed horizon
//!
//! Outputs the final balance for every rate/contribution pair, for comparing
//! savings plans side by side

use finance_engine::growth::{simulate, SimulationParams, SimulationResult};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

const HORIZON_MONTHS: u32 = 120;
const INITIAL_PRINCIPAL: f64 = 5_000.0;
const TARGET_BALANCE: f64 = 50_000.0;

/// One grid cell: a plan and where it lands
#[derive(Debug, Clone, Serialize)]
struct SweepRow {
    monthly_rate_percent: f64,
    monthly_contribution: f64,
    final_balance: f64,
    total_interest: f64,
    reaches_target: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();

    let rates: Vec<f64> = (0..=10).map(|i| i as f64 * 0.1).collect();
    let contributions: Vec<f64> = (1..=20).map(|i| i as f64 * 50.0).collect();

    let grid: Vec<SimulationParams> = rates
        .iter()
        .flat_map(|&rate| {
            contributions
                .iter()
                .map(move |&c| SimulationParams::new(INITIAL_PRINCIPAL, c, rate, HORIZON_MONTHS))
        })
        .collect();

    println!("Sweeping {} scenarios over {} months...", grid.len(), HORIZON_MONTHS);

    // Run simulations in parallel
    let results: Vec<(SimulationParams, SimulationResult)> = grid
        .par_iter()
        .map(|params| {
            let result = simulate(params).expect("sweep grid is within the valid domain");
            (params.clone(), result)
        })
        .collect();

    println!("Sweep complete in {:?}", start.elapsed());

    let rows: Vec<SweepRow> = results
        .iter()
        .map(|(params, result)| SweepRow {
            monthly_rate_percent: params.monthly_rate_percent,
            monthly_contribution: params.monthly_contribution,
            final_balance: result.final_balance,
            total_interest: result.total_interest,
            reaches_target: result.final_balance >= TARGET_BALANCE,
        })
        .collect();

    // Write grid
    let output_path = "contribution_sweep.csv";
    let mut file = File::create(output_path)?;

    writeln!(file, "RatePct,Contribution,FinalBalance,TotalInterest,ReachesTarget")?;
    for row in &rows {
        writeln!(
            file,
            "{:.1},{:.2},{:.2},{:.2},{}",
            row.monthly_rate_percent,
            row.monthly_contribution,
            row.final_balance,
            row.total_interest,
            row.reaches_target,
        )?;
    }

    println!("Grid written to {}", output_path);

    // Cheapest on-target plan per rate
    let cheapest: Vec<&SweepRow> = rates
        .iter()
        .filter_map(|&rate| {
            rows.iter()
                .filter(|r| r.monthly_rate_percent == rate && r.reaches_target)
                .min_by(|a, b| a.monthly_contribution.total_cmp(&b.monthly_contribution))
        })
        .collect();

    let json_path = "sweep_summary.json";
    serde_json::to_writer_pretty(File::create(json_path)?, &cheapest)?;
    println!("Cheapest on-target plans written to {}", json_path);

    println!("\nSweep Summary (target ${:.0}):", TARGET_BALANCE);
    for row in &cheapest {
        println!(
            "  {:.1}%/month: ${:.0}/month reaches ${:.0}",
            row.monthly_rate_percent, row.monthly_contribution, row.final_balance
        );
    }
    let on_target = rows.iter().filter(|r| r.reaches_target).count();
    println!("  {}/{} scenarios reach the target", on_target, rows.len());

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
