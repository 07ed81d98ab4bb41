//! Debt Payoff CLI
//!
//! Runs a single payoff plan and prints the schedule

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;

use debt_payoff::{
    debt::load_debts,
    payoff::{calendar::parse_start_month, export::write_ledger_csv, DEFAULT_MAX_MONTHS},
    plan_payoff, SimulationConfig, Strategy,
};

#[derive(Debug, Parser)]
#[command(name = "debt-payoff", version, about = "Simulate a debt payoff plan")]
struct Args {
    /// Debts file (.csv or .json)
    #[arg(long)]
    debts: PathBuf,

    /// Repayment strategy
    #[arg(long, value_enum, default_value_t = Strategy::Avalanche)]
    strategy: Strategy,

    /// Extra payment on top of the minimums every month
    #[arg(long, default_value = "0")]
    extra: Decimal,

    /// Months to simulate before reporting non-convergence (at most 1200)
    #[arg(long, default_value_t = DEFAULT_MAX_MONTHS)]
    max_months: u32,

    /// First payment month (YYYY-MM)
    #[arg(long)]
    start: Option<String>,

    /// Print the full plan as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the monthly ledger to this CSV file
    #[arg(long)]
    ledger_csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let inputs = load_debts(&args.debts)
        .with_context(|| format!("Failed to load debts from {}", args.debts.display()))?;

    let start_month = args.start.as_deref().map(parse_start_month).transpose()?;
    let config = SimulationConfig {
        extra_monthly_payment: args.extra,
        max_months: args.max_months,
        start_month,
    };

    let plan = plan_payoff(&inputs, args.strategy, &config)?;

    if let Some(path) = &args.ledger_csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_ledger_csv(&plan, file)?;
        eprintln!("Ledger written to: {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Strategy: {}  Extra/month: {:.2}", plan.strategy, config.extra_monthly_payment);
    println!("Priority: {}", plan.payoff_order.join(" -> "));
    println!();

    println!(
        "{:<16} {:>12} {:>14} {:>14} {:>10}",
        "Debt", "Payoff Mo", "Interest", "Total Paid", "Date"
    );
    println!("{}", "-".repeat(70));
    for id in &plan.payoff_order {
        let summary = &plan.per_debt[id];
        println!(
            "{:<16} {:>12} {:>14.2} {:>14.2} {:>10}",
            id,
            summary.payoff_month.map_or_else(|| "never".to_string(), |m| m.to_string()),
            summary.total_interest_paid,
            summary.total_paid,
            summary.payoff_date.map_or_else(String::new, |d| d.format("%Y-%m").to_string()),
        );
    }

    println!();
    println!("Months:         {}", plan.months);
    println!("Total interest: {:.2}", plan.total_interest);
    println!("Total paid:     {:.2}", plan.total_payment);
    if let Some(date) = plan.debt_free_date {
        println!("Debt free:      {}", date.format("%Y-%m"));
    }
    if !plan.converged {
        println!();
        println!(
            "WARNING: not paid off within {} months; {:.2} still owed. \
             Minimum payments may not cover interest.",
            args.max_months,
            plan.final_balance()
        );
    }

    Ok(())
}
