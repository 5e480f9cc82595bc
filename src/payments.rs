//! Client payments to the contract participant
//!
//! The yearly payment is the agreed share of the period's cost reduction,
//! pro-rated by how much of the discount period had active payments.

use num_traits::Zero;

use crate::numeric::{self, Rational};
use crate::periods::PeriodDays;

/// Payment for one period; zero when the period has no payment days
pub fn payment(
    yearly_payments_percentage: &Rational,
    cost_reduction: &Rational,
    days_with_payments: u32,
    days_for_discount_rate: u32,
) -> Rational {
    if days_with_payments == 0 || days_for_discount_rate == 0 {
        return Rational::zero();
    }
    yearly_payments_percentage * cost_reduction * numeric::ratio(days_with_payments, days_for_discount_rate)
}

/// Payments for every period, paired positionally with the cost reductions
pub fn payments(
    yearly_payments_percentage: &Rational,
    costs_reduction: &[Rational],
    periods: &[PeriodDays],
) -> Vec<Rational> {
    periods
        .iter()
        .zip(costs_reduction)
        .map(|(days, cost)| payment(yearly_payments_percentage, cost, days.payment, days.discount))
        .collect()
}
