//! Income aggregation and the two NPV entry points

mod cashflows;
mod engine;
#[cfg(test)]
mod fixtures;

pub use cashflows::{CalculationResult, CalculationSummary, PeriodRow};
pub use engine::{income, NpvEngine};

use crate::config::NpvConfig;
use crate::contract::Contract;
use crate::error::Result;
use crate::numeric::Rational;

/// Net present value of the contract for the participant
///
/// Defaults used by callers: 365 days per year, 20-year horizon.
pub fn amount_of_performance(contract: &Contract, days_per_year: u32, npv_calculation_duration: u32) -> Result<Rational> {
    NpvEngine::new(NpvConfig::new(days_per_year, npv_calculation_duration)).amount_of_performance(contract)
}

/// Undiscounted total of payments to the participant
pub fn amount_of_contract(contract: &Contract, days_per_year: u32, npv_calculation_duration: u32) -> Result<Rational> {
    NpvEngine::new(NpvConfig::new(days_per_year, npv_calculation_duration)).amount_of_contract(contract)
}
