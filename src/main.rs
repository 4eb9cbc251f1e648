//! Rentability System CLI
//!
//! Runs a single scenario (built-in defaults) or a batch CSV of scenarios,
//! prints the headline metrics and the yearly cash-flow table, and writes
//! the spreadsheet exports on request.

use anyhow::{anyhow, Context};
use clap::Parser;
use rentability_system::export::{cashflow_table, summary_table};
use rentability_system::params::load_parameters;
use rentability_system::{InvestmentParameters, ProjectionResult, ScenarioRunner};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rentability", version, about = "Rental property investment projection system")]
struct Cli {
    /// CSV file with one scenario per row; runs the whole batch
    #[arg(long)]
    params: Option<PathBuf>,

    /// Write the cash-flow table CSV to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the parameter/result summary CSV to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Emit results as JSON instead of the console report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.params {
        Some(path) => run_batch(path, &cli),
        None => run_single(InvestmentParameters::default_scenario(), &cli),
    }
}

fn run_batch(path: &PathBuf, cli: &Cli) -> anyhow::Result<()> {
    let scenarios = load_parameters(path)
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("failed to load scenarios from {}", path.display()))?;

    let results = ScenarioRunner::run_batch(&scenarios);

    if cli.json {
        println!("{}", serde_json::to_string(&results)?);
        return Ok(());
    }

    println!("Rentability System v{}", env!("CARGO_PKG_VERSION"));
    println!("{} scenarios from {}\n", results.len(), path.display());

    println!(
        "{:>4} {:>14} {:>12} {:>14} {:>14} {:>8}",
        "#", "Investment", "Payment", "Cashflow Y1", "Sale Net", "IRR %"
    );
    println!("{}", "-".repeat(72));
    for (i, result) in results.iter().enumerate() {
        println!(
            "{:>4} {:>14.2} {:>12.2} {:>14.2} {:>14.2} {:>8.2}",
            i + 1,
            result.total_investment,
            result.loan.monthly_payment,
            result.annual_cashflow,
            result.net_sale_proceeds,
            result.irr_pct(),
        );
    }

    Ok(())
}

fn run_single(params: InvestmentParameters, cli: &Cli) -> anyhow::Result<()> {
    params.validate()?;

    let runner = ScenarioRunner::new(params.clone());
    let result = runner.run();

    if cli.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        print_report(&params, &result);
    }

    if let Some(path) = &cli.output {
        let buffer = cashflow_table(&result.series).map_err(|e| anyhow!("{e}"))?;
        fs::write(path, buffer)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nCash-flow table written to: {}", path.display());
    }

    if let Some(path) = &cli.summary {
        let buffer = summary_table(&params, &result).map_err(|e| anyhow!("{e}"))?;
        fs::write(path, buffer)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Summary table written to: {}", path.display());
    }

    Ok(())
}

fn print_report(params: &InvestmentParameters, result: &ProjectionResult) {
    println!("Rentability System v{}", env!("CARGO_PKG_VERSION"));
    println!("=======================\n");

    println!("Scenario:");
    println!("  Purchase price: {:.2}", params.purchase_price);
    println!("  Total investment: {:.2}", result.total_investment);
    println!("  Equity: {:.2}", params.equity);
    println!("  Loan principal: {:.2}", result.loan.principal);
    println!(
        "  Rate: {:.2}% + {:.2}% insurance over {} years",
        params.loan_rate_pct, params.insurance_rate_pct, params.loan_term_years
    );
    println!();

    println!("Headline metrics:");
    println!("  Monthly payment: {:.2}", result.loan.monthly_payment);
    println!("  Annual cashflow (year 1): {:.2}", result.annual_cashflow);
    println!("  IRR: {:.2} %", result.irr_pct());
    println!();

    println!("Projected cashflows ({} years):", result.rows.len());
    println!(
        "{:>4} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Year", "Gross Rent", "Revenue", "Charges", "Debt Svc", "Net CF", "Sale Net"
    );
    println!("{}", "-".repeat(84));

    for row in &result.rows {
        println!(
            "{:>4} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.year,
            row.gross_rent,
            row.effective_revenue,
            row.operating_charges,
            row.debt_service,
            row.net_cashflow,
            row.sale_proceeds,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total revenue: {:.2}", summary.total_revenue);
    println!("  Total charges: {:.2}", summary.total_charges);
    println!("  Total debt service: {:.2}", summary.total_debt_service);
    println!("  Total net cashflow: {:.2}", summary.total_net_cashflow);
    println!("  Net sale proceeds: {:.2}", summary.net_sale_proceeds);
}
