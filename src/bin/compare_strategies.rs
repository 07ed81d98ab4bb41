//! Compare avalanche, snowball and minimum-only plans for one set of debts
//!
//! Usage: cargo run --bin compare_strategies -- --debts debts.csv --extra 200 --what-if 0,100,250

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;

use debt_payoff::{
    debt::load_debts, payoff::DEFAULT_MAX_MONTHS, PayoffPlan, SimulationConfig, Strategy,
    StrategyRunner,
};

#[derive(Debug, Parser)]
#[command(about = "Compare debt payoff strategies")]
struct Args {
    /// Debts file (.csv or .json)
    #[arg(long)]
    debts: PathBuf,

    /// Extra payment on top of the minimums every month
    #[arg(long, default_value = "0")]
    extra: Decimal,

    /// Months to simulate before reporting non-convergence (at most 1200)
    #[arg(long, default_value_t = DEFAULT_MAX_MONTHS)]
    max_months: u32,

    /// Extra payment amounts to try with each strategy
    #[arg(long, value_delimiter = ',')]
    what_if: Vec<Decimal>,

    /// Print the comparison as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let inputs = load_debts(&args.debts)
        .with_context(|| format!("Failed to load debts from {}", args.debts.display()))?;
    let config = SimulationConfig {
        extra_monthly_payment: args.extra,
        max_months: args.max_months,
        start_month: None,
    };
    let runner = StrategyRunner::new(&inputs, config)?;
    let comparison = runner.compare();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("{} debts, extra {:.2}/month", runner.debts().len(), args.extra);
    println!();
    println!(
        "{:<14} {:>8} {:>14} {:>14} {:>10}",
        "Plan", "Months", "Interest", "Total Paid", "Converged"
    );
    println!("{}", "-".repeat(64));
    print_row("avalanche", &comparison.avalanche);
    print_row("snowball", &comparison.snowball);
    print_row("minimum only", &comparison.minimum_only);

    println!();
    println!(
        "Avalanche saves {:.2} interest and {} months vs snowball",
        comparison.interest_saved, comparison.months_saved
    );
    match comparison.recommended {
        Some(strategy) => println!("Recommended: {}", strategy),
        None => println!(
            "Neither strategy pays off the debts within {} months",
            args.max_months
        ),
    }

    if !args.what_if.is_empty() {
        println!();
        println!("What-if extra payments:");
        println!(
            "{:>10} {:>12} {:>14} {:>12} {:>14}",
            "Extra", "Aval Months", "Aval Interest", "Snow Months", "Snow Interest"
        );
        println!("{}", "-".repeat(66));

        let avalanche = runner.what_if_extra(Strategy::Avalanche, &args.what_if)?;
        let snowball = runner.what_if_extra(Strategy::Snowball, &args.what_if)?;
        for ((extra, a), s) in args.what_if.iter().zip(&avalanche).zip(&snowball) {
            println!(
                "{:>10.2} {:>12} {:>14.2} {:>12} {:>14.2}",
                extra,
                months_label(a),
                a.total_interest,
                months_label(s),
                s.total_interest
            );
        }
    }

    Ok(())
}

fn months_label(plan: &PayoffPlan) -> String {
    if plan.converged {
        plan.months.to_string()
    } else {
        format!(">{}", plan.months)
    }
}

fn print_row(label: &str, plan: &PayoffPlan) {
    println!(
        "{:<14} {:>8} {:>14.2} {:>14.2} {:>10}",
        label,
        months_label(plan),
        plan.total_interest,
        plan.total_payment,
        if plan.converged { "yes" } else { "no" }
    );
}
