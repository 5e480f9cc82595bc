//! Evaluate a JSON array of contracts in parallel
//!
//! Writes one CSV line per contract with both totals or the failure reason

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use contract_npv::config::{DEFAULT_DAYS_PER_YEAR, DEFAULT_NPV_CALCULATION_DURATION};
use contract_npv::contract::load_contracts;
use contract_npv::numeric::format_significant;
use contract_npv::{BatchRunner, NpvConfig};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "run_batch", version, about = "NPV of many cost-sharing contracts")]
struct Args {
    /// JSON file holding an array of contracts
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "batch_npv_output.csv")]
    output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_DAYS_PER_YEAR)]
    days_per_year: u32,

    #[arg(long = "horizon", default_value_t = DEFAULT_NPV_CALCULATION_DURATION)]
    npv_calculation_duration: u32,
}

#[derive(Debug, Serialize)]
struct BatchRecord {
    index: usize,
    amount_of_performance: Option<String>,
    amount_of_contract: Option<String>,
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let contracts = load_contracts(&args.input).with_context(|| format!("loading {}", args.input.display()))?;
    println!("Loaded {} contracts in {:?}", contracts.len(), start.elapsed());

    let runner = BatchRunner::new(NpvConfig::new(args.days_per_year, args.npv_calculation_duration));
    let calc_start = Instant::now();
    let results = runner.run(&contracts);
    println!("Calculations complete in {:?}", calc_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut failed = 0;
    for (index, result) in results.iter().enumerate() {
        let record = match result {
            Ok(result) => BatchRecord {
                index,
                amount_of_performance: Some(format_significant(&result.amount_of_performance, 15)),
                amount_of_contract: Some(format_significant(&result.amount_of_contract, 15)),
                error: None,
            },
            Err(err) => {
                failed += 1;
                log::warn!("Contract {index} failed: {err}");
                BatchRecord {
                    index,
                    amount_of_performance: None,
                    amount_of_contract: None,
                    error: Some(err.to_string()),
                }
            }
        };
        writer.serialize(record)?;
    }
    writer.flush()?;

    println!("Output written to {} ({} failed)", args.output.display(), failed);
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
