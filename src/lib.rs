//! Contract NPV - exact-rational valuation of cost-sharing contracts
//!
//! This library provides:
//! - Segmentation of a 20-year (configurable) horizon into accrual periods
//! - Pro-rated regulatory discount rates and compounding discount coefficients
//! - Participant payments and net income per period
//! - The two contract totals: discounted net income ("amount of performance")
//!   and undiscounted payments ("amount of contract")
//!
//! Every intermediate value is an exact fraction; floats only appear for display.

pub mod batch;
pub mod calculation;
pub mod config;
pub mod contract;
pub mod discount;
pub mod error;
pub mod numeric;
pub mod payments;
pub mod periods;

// Re-export commonly used types
pub use batch::BatchRunner;
pub use calculation::{amount_of_contract, amount_of_performance, CalculationResult, NpvEngine, PeriodRow};
pub use config::NpvConfig;
pub use contract::{Amount, Contract, ContractDuration};
pub use error::{NpvError, Result};
pub use numeric::Rational;
