//! Error taxonomy for NPV calculations

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while loading or evaluating a contract
///
/// Every failure aborts the whole calculation; there is no partial result.
#[derive(Debug, Error)]
pub enum NpvError {
    /// `annualCostsReduction` must hold one entry per period of the horizon
    #[error("invalid schedule length: expected {expected} cost reduction entries, got {actual}")]
    InvalidScheduleLength { expected: usize, actual: usize },

    /// Contract is longer than the calculation horizon can represent
    #[error("contract of {contract_days} days exceeds the {horizon_days}-day calculation horizon")]
    DurationExceedsHorizon { contract_days: u64, horizon_days: u64 },

    /// A numeric input that cannot be turned into an exact fraction
    #[error("imprecise numeric input {value:?}: {reason}")]
    ImpreciseNumericInput { value: String, reason: String },

    /// Announcement date whose stub year does not fit the day-count convention
    #[error("invalid announcement date {date}: {first_year_days} days left in year, convention has {days_per_year}")]
    InvalidDate {
        date: NaiveDate,
        first_year_days: i64,
        days_per_year: u32,
    },

    /// Discount rate at or below -100% makes the discount coefficient undefined
    #[error("invalid discount rate {0}: must be greater than -1")]
    InvalidDiscountRate(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl NpvError {
    pub(crate) fn imprecise(value: impl Into<String>, reason: impl Into<String>) -> Self {
        NpvError::ImpreciseNumericInput {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NpvError>;
