//! Contract NPV CLI
//!
//! Evaluates one contract read from a JSON file (or stdin)

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use contract_npv::config::{DEFAULT_DAYS_PER_YEAR, DEFAULT_NPV_CALCULATION_DURATION};
use contract_npv::contract::{load_contract, load_contract_from_reader};
use contract_npv::numeric::{format_significant, to_f64};
use contract_npv::{CalculationResult, NpvConfig, NpvEngine};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "contract_npv", version, about = "NPV of a cost-sharing contract")]
struct Args {
    /// Contract JSON file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Days per year for all pro-rating
    #[arg(long, default_value_t = DEFAULT_DAYS_PER_YEAR)]
    days_per_year: u32,

    /// Calculation horizon in years
    #[arg(long = "horizon", default_value_t = DEFAULT_NPV_CALCULATION_DURATION)]
    npv_calculation_duration: u32,

    /// Print the per-period table
    #[arg(long)]
    periods: bool,

    /// Write the per-period table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// CSV row for one period
#[derive(Debug, Serialize)]
struct PeriodRecord {
    period: usize,
    year: i32,
    cost_reduction_days: u32,
    discount_days: u32,
    payment_days: u32,
    cost_reduction: f64,
    discount_rate: f64,
    discount_coefficient: f64,
    payment: f64,
    income: f64,
    discounted_income: f64,
}

fn write_csv(path: &Path, result: &CalculationResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in &result.periods {
        writer.serialize(PeriodRecord {
            period: row.period,
            year: row.year,
            cost_reduction_days: row.days.cost_reduction,
            discount_days: row.days.discount,
            payment_days: row.days.payment,
            cost_reduction: to_f64(&row.cost_reduction),
            discount_rate: to_f64(&row.discount_rate),
            discount_coefficient: to_f64(&row.discount_coefficient),
            payment: to_f64(&row.payment),
            income: to_f64(&row.income),
            discounted_income: to_f64(&row.discounted_income),
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn print_periods(result: &CalculationResult) {
    println!(
        "{:>3} {:>5} {:>5} {:>5} {:>5} {:>14} {:>10} {:>10} {:>14} {:>14} {:>14}",
        "Per", "Year", "CRd", "DRd", "Pd", "CostRed", "Rate", "Coef", "Payment", "Income", "DiscIncome"
    );
    println!("{}", "-".repeat(110));
    for row in &result.periods {
        println!(
            "{:>3} {:>5} {:>5} {:>5} {:>5} {:>14.2} {:>10.6} {:>10.6} {:>14.2} {:>14.2} {:>14.2}",
            row.period,
            row.year,
            row.days.cost_reduction,
            row.days.discount,
            row.days.payment,
            to_f64(&row.cost_reduction),
            to_f64(&row.discount_rate),
            to_f64(&row.discount_coefficient),
            to_f64(&row.payment),
            to_f64(&row.income),
            to_f64(&row.discounted_income),
        );
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let contract = match &args.input {
        Some(path) => load_contract(path).with_context(|| format!("loading {}", path.display()))?,
        None => load_contract_from_reader(io::stdin().lock()).context("reading contract from stdin")?,
    };

    let config = NpvConfig::new(args.days_per_year, args.npv_calculation_duration);
    let engine = NpvEngine::new(config);
    let result = engine.calculate(&contract).context("calculating contract NPV")?;

    if args.periods {
        print_periods(&result);
    }
    if let Some(path) = &args.csv {
        write_csv(path, &result)?;
        println!("Period table written to: {}", path.display());
    }

    let summary = result.summary();
    println!("Periods: {}  Payment days: {}", summary.period_count, summary.payment_days);
    println!("Amount of performance: {}", format_significant(&result.amount_of_performance, 15));
    println!("Amount of contract:    {}", format_significant(&result.amount_of_contract, 15));
    Ok(())
}
