//! Calculation engine: segments the horizon, discounts income and totals it

use chrono::Datelike;
use num_traits::Zero;

use super::cashflows::{CalculationResult, PeriodRow};
use crate::config::NpvConfig;
use crate::contract::{Amount, Contract};
use crate::discount::DiscountCurve;
use crate::error::{NpvError, Result};
use crate::numeric::{self, Rational};
use crate::payments;
use crate::periods::{self, PeriodDays};

/// Share of the period's cost reduction attributable to the discount period,
/// net of the payment made for it
///
/// A stub period with no days carries no cost reduction.
pub fn income(cost_reduction: &Rational, days: &PeriodDays, payment: &Rational) -> Rational {
    let accrued = if days.cost_reduction == 0 {
        Rational::zero()
    } else {
        cost_reduction * numeric::ratio(days.discount, days.cost_reduction)
    };
    accrued - payment
}

/// NPV engine for cost-sharing contracts
#[derive(Debug, Clone, Default)]
pub struct NpvEngine {
    config: NpvConfig,
}

impl NpvEngine {
    pub fn new(config: NpvConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NpvConfig {
        &self.config
    }

    /// Discounted total of net income over the horizon
    pub fn amount_of_performance(&self, contract: &Contract) -> Result<Rational> {
        Ok(self.calculate(contract)?.amount_of_performance)
    }

    /// Undiscounted total of payments; needs neither discount rates nor income
    pub fn amount_of_contract(&self, contract: &Contract) -> Result<Rational> {
        let costs = self.cost_schedule(contract)?;
        let periods = self.segment(contract)?;
        let paid = payments::payments(contract.payments_percentage(), &costs, &periods);
        Ok(paid.iter().sum())
    }

    /// Run the whole pipeline, keeping every period's intermediate values
    pub fn calculate(&self, contract: &Contract) -> Result<CalculationResult> {
        let costs = self.cost_schedule(contract)?;
        let periods = self.segment(contract)?;

        let discount_days: Vec<u32> = periods.iter().map(|days| days.discount).collect();
        let curve = DiscountCurve::from_period_days(contract.discount_rate(), &discount_days, self.config.days_per_year)?;
        let paid = payments::payments(contract.payments_percentage(), &costs, &periods);

        let start_year = contract.announcement_date.year();
        let rows = periods
            .into_iter()
            .zip(costs)
            .zip(paid)
            .zip(curve.rates.into_iter().zip(curve.coefficients))
            .enumerate()
            .map(|(period, (((days, cost_reduction), payment), (discount_rate, discount_coefficient)))| {
                let income = income(&cost_reduction, &days, &payment);
                let discounted_income = &discount_coefficient * &income;
                PeriodRow {
                    period,
                    year: start_year + period as i32,
                    days,
                    cost_reduction,
                    discount_rate,
                    discount_coefficient,
                    payment,
                    income,
                    discounted_income,
                }
            })
            .collect();

        let result = CalculationResult::new(rows);
        log::debug!(
            "Calculated {} periods: performance {}, contract {}",
            result.periods.len(),
            numeric::format_significant(&result.amount_of_performance, 15),
            numeric::format_significant(&result.amount_of_contract, 15),
        );
        Ok(result)
    }

    /// Cost reductions as exact values, one per period
    fn cost_schedule(&self, contract: &Contract) -> Result<Vec<Rational>> {
        let expected = self.config.period_count();
        let actual = contract.annual_costs_reduction.len();
        if actual != expected {
            return Err(NpvError::InvalidScheduleLength { expected, actual });
        }
        Ok(contract
            .annual_costs_reduction
            .iter()
            .map(Amount::value)
            .cloned()
            .collect())
    }

    fn segment(&self, contract: &Contract) -> Result<Vec<PeriodDays>> {
        periods::segment(&contract.contract_duration, contract.announcement_date, &self.config)
    }
}
