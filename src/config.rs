//! Calculation conventions shared by every pipeline stage

use crate::error::{NpvError, Result};

/// Default day-count convention
pub const DEFAULT_DAYS_PER_YEAR: u32 = 365;

/// Default number of full years projected after the announcement year
pub const DEFAULT_NPV_CALCULATION_DURATION: u32 = 20;

/// Configuration for a calculation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpvConfig {
    /// Days in a year for every pro-rating step
    pub days_per_year: u32,

    /// Horizon length in years; the schedule has one more period than this
    pub npv_calculation_duration: u32,
}

impl Default for NpvConfig {
    fn default() -> Self {
        Self {
            days_per_year: DEFAULT_DAYS_PER_YEAR,
            npv_calculation_duration: DEFAULT_NPV_CALCULATION_DURATION,
        }
    }
}

impl NpvConfig {
    pub fn new(days_per_year: u32, npv_calculation_duration: u32) -> Self {
        Self {
            days_per_year,
            npv_calculation_duration,
        }
    }

    /// Number of accrual periods: the stub year plus one per horizon year
    pub fn period_count(&self) -> usize {
        self.npv_calculation_duration as usize + 1
    }

    /// Longest contract, in days, the horizon can represent
    pub fn horizon_days(&self) -> u64 {
        u64::from(self.npv_calculation_duration) * u64::from(self.days_per_year)
    }

    pub fn validate(&self) -> Result<()> {
        if self.days_per_year == 0 {
            return Err(NpvError::InvalidConfig("days_per_year must be positive".into()));
        }
        if self.npv_calculation_duration == 0 {
            return Err(NpvError::InvalidConfig("npv_calculation_duration must be at least one year".into()));
        }
        Ok(())
    }
}
