//! Batch runner for evaluating many independent contracts
//!
//! Calculations share no state, so contracts are evaluated in parallel and
//! each one succeeds or fails on its own.

use rayon::prelude::*;

use crate::calculation::{CalculationResult, NpvEngine};
use crate::config::NpvConfig;
use crate::contract::Contract;
use crate::error::Result;

/// Runs one configuration over many contracts
///
/// # Example
/// ```ignore
/// let runner = BatchRunner::new(NpvConfig::default());
/// let contracts = load_contracts("contracts.json")?;
/// for (i, result) in runner.run(&contracts).iter().enumerate() {
///     println!("{i}: {:?}", result.as_ref().map(|r| r.summary()));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    engine: NpvEngine,
}

impl BatchRunner {
    pub fn new(config: NpvConfig) -> Self {
        Self {
            engine: NpvEngine::new(config),
        }
    }

    pub fn config(&self) -> &NpvConfig {
        self.engine.config()
    }

    /// Evaluate every contract, preserving input order
    pub fn run(&self, contracts: &[Contract]) -> Vec<Result<CalculationResult>> {
        let results: Vec<_> = contracts
            .par_iter()
            .map(|contract| self.engine.calculate(contract))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        log::info!("Evaluated {} contracts, {} failed", results.len(), failed);
        results
    }

    /// Evaluate one contract under several configurations
    pub fn run_configs(contract: &Contract, configs: &[NpvConfig]) -> Vec<Result<CalculationResult>> {
        configs
            .par_iter()
            .map(|config| NpvEngine::new(*config).calculate(contract))
            .collect()
    }
}
