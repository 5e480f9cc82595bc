//! Per-period output rows and calculation totals

use crate::numeric::{self, Rational};
use crate::periods::PeriodDays;

/// One accrual period of a calculation
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRow {
    /// Period index, 0 = stub of the announcement year
    pub period: usize,

    /// Calendar year the period falls in
    pub year: i32,

    pub days: PeriodDays,

    pub cost_reduction: Rational,
    pub discount_rate: Rational,
    pub discount_coefficient: Rational,
    pub payment: Rational,

    /// Pro-rated cost reduction net of the payment
    pub income: Rational,
    pub discounted_income: Rational,
}

/// Result of a full calculation for one contract
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub periods: Vec<PeriodRow>,

    /// Discounted total of net income (the NPV)
    pub amount_of_performance: Rational,

    /// Undiscounted total of payments
    pub amount_of_contract: Rational,
}

/// Display-only view of the totals
#[derive(Debug, Clone, Copy)]
pub struct CalculationSummary {
    pub period_count: usize,
    pub payment_days: u64,
    pub amount_of_performance: f64,
    pub amount_of_contract: f64,
}

impl CalculationResult {
    pub fn new(periods: Vec<PeriodRow>) -> Self {
        let amount_of_performance = periods.iter().map(|row| &row.discounted_income).sum();
        let amount_of_contract = periods.iter().map(|row| &row.payment).sum();
        Self {
            periods,
            amount_of_performance,
            amount_of_contract,
        }
    }

    pub fn summary(&self) -> CalculationSummary {
        CalculationSummary {
            period_count: self.periods.len(),
            payment_days: self.periods.iter().map(|row| u64::from(row.days.payment)).sum(),
            amount_of_performance: numeric::to_f64(&self.amount_of_performance),
            amount_of_contract: numeric::to_f64(&self.amount_of_contract),
        }
    }
}
