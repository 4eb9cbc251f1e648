//! Loan-rate sensitivity sweep over the base scenario
//!
//! Projects the scenario at evenly spaced loan rates and reports payment,
//! first-year cash flow and IRR per point.
//! Supports JSON output for API integration via --json flag
//! Accepts config via environment variables:
//!   SWEEP_MIN_RATE, SWEEP_MAX_RATE, SWEEP_STEPS (rates in percent)

use rentability_system::{InvestmentParameters, ScenarioRunner};
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct SweepResponse {
    min_rate_pct: f64,
    max_rate_pct: f64,
    steps: usize,
    points: Vec<SweepPoint>,
    execution_time_ms: u64,
}

#[derive(Serialize)]
struct SweepPoint {
    loan_rate_pct: f64,
    monthly_payment: f64,
    annual_cashflow: f64,
    irr_pct: f64,
}

fn main() {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    // Read sweep bounds from environment or use the supported rate range
    let min_rate: f64 = env::var("SWEEP_MIN_RATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.5);

    let max_rate: f64 = env::var("SWEEP_MAX_RATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(6.0);

    let steps: usize = env::var("SWEEP_STEPS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);

    let rates: Vec<f64> = if steps < 2 {
        vec![min_rate]
    } else {
        (0..steps)
            .map(|i| min_rate + (max_rate - min_rate) * i as f64 / (steps - 1) as f64)
            .collect()
    };

    // One parameter set per rate, projected in parallel
    let base = InvestmentParameters::default_scenario();
    let variants: Vec<InvestmentParameters> = rates
        .iter()
        .map(|&rate| {
            let mut params = base.clone();
            params.loan_rate_pct = rate;
            params
        })
        .collect();

    let results = ScenarioRunner::run_batch(&variants);

    let points: Vec<SweepPoint> = rates
        .iter()
        .zip(&results)
        .map(|(&rate, result)| SweepPoint {
            loan_rate_pct: rate,
            monthly_payment: result.loan.monthly_payment,
            annual_cashflow: result.annual_cashflow,
            irr_pct: result.irr_pct(),
        })
        .collect();

    let execution_time_ms = start.elapsed().as_millis() as u64;

    if json_output {
        let response = SweepResponse {
            min_rate_pct: min_rate,
            max_rate_pct: max_rate,
            steps: points.len(),
            points,
            execution_time_ms,
        };
        println!("{}", serde_json::to_string(&response).unwrap());
    } else {
        println!("Loan-rate sensitivity ({} points)", points.len());
        println!(
            "{:>8} {:>14} {:>14} {:>8}",
            "Rate %", "Payment", "Cashflow Y1", "IRR %"
        );
        println!("{}", "-".repeat(48));
        for point in &points {
            println!(
                "{:>8.2} {:>14.2} {:>14.2} {:>8.2}",
                point.loan_rate_pct,
                point.monthly_payment,
                point.annual_cashflow,
                point.irr_pct,
            );
        }
        println!("\nTotal time: {:?}", start.elapsed());
    }
}
