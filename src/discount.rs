//! Discounting of per-period income
//!
//! Each period's rate is the annual regulatory rate pro-rated by the period's
//! length (no compounding inside a period). The discount coefficient compounds
//! across periods: `coef[i] = coef[i-1] / (1 + rate[i])`, with `coef[-1] = 1`.

use num_traits::{One, Signed};

use crate::error::{NpvError, Result};
use crate::numeric::{self, Rational};

/// Rate for one period: `annual_rate * days / days_per_year`
pub fn discount_rate(days: u32, annual_rate: &Rational, days_per_year: u32) -> Rational {
    annual_rate * numeric::ratio(days, days_per_year)
}

pub fn discount_rates(days_for_discount_rate: &[u32], annual_rate: &Rational, days_per_year: u32) -> Vec<Rational> {
    days_for_discount_rate
        .iter()
        .map(|&days| discount_rate(days, annual_rate, days_per_year))
        .collect()
}

/// Running product of `1 / (1 + rate)`
pub fn discount_coefficients(rates: &[Rational]) -> Vec<Rational> {
    let one = Rational::one();
    rates
        .iter()
        .scan(Rational::one(), |coefficient, rate| {
            *coefficient = &*coefficient / (&one + rate);
            Some(coefficient.clone())
        })
        .collect()
}

/// Discount rates and cumulative coefficients for every period of a horizon
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountCurve {
    /// Annual regulatory rate
    pub annual_rate: Rational,

    /// Per-period pro-rated rate
    pub rates: Vec<Rational>,

    /// Cumulative present-value factor per period
    pub coefficients: Vec<Rational>,
}

impl DiscountCurve {
    /// Build the curve from the discount-period day counts
    pub fn from_period_days(annual_rate: &Rational, days_for_discount_rate: &[u32], days_per_year: u32) -> Result<Self> {
        if annual_rate <= &-Rational::one() {
            return Err(NpvError::InvalidDiscountRate(annual_rate.to_string()));
        }
        if annual_rate.is_negative() {
            log::warn!("Negative discount rate {annual_rate}");
        }

        let rates = discount_rates(days_for_discount_rate, annual_rate, days_per_year);
        let coefficients = discount_coefficients(&rates);
        Ok(Self {
            annual_rate: annual_rate.clone(),
            rates,
            coefficients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_traits::Zero;

    fn frac(n: i64, d: i64) -> Rational {
        Rational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_discount_rate_is_prorated() {
        let annual = frac(1, 10);
        assert_eq!(discount_rate(30, &annual, 365), frac(3, 365));
        assert_eq!(discount_rate(365, &annual, 365), frac(1, 10));
        assert_eq!(discount_rate(0, &annual, 365), Rational::zero());
    }

    #[test]
    fn test_coefficients_compound_across_periods() {
        let rates = vec![frac(3, 365), frac(1, 10), frac(67, 730)];
        let coefficients = discount_coefficients(&rates);

        assert_eq!(coefficients[0], frac(365, 368));
        assert_eq!(coefficients[1], frac(365, 368) / frac(11, 10));
        assert_eq!(coefficients[2], frac(365, 368) / frac(11, 10) / frac(797, 730));
    }

    #[test]
    fn test_zero_rate_keeps_unit_coefficients() {
        let curve = DiscountCurve::from_period_days(&Rational::zero(), &[30, 365, 335], 365).unwrap();
        assert!(curve.coefficients.iter().all(|c| c.is_one()));
        assert_eq!(curve.rates.len(), 3);
    }

    #[test]
    fn test_higher_rate_discounts_more() {
        let low = DiscountCurve::from_period_days(&frac(5, 100), &[135, 365, 230], 365).unwrap();
        let high = DiscountCurve::from_period_days(&frac(20, 100), &[135, 365, 230], 365).unwrap();

        assert_eq!(low.coefficients.len(), 3);
        for (l, h) in low.coefficients.iter().zip(&high.coefficients) {
            assert!(h < l);
        }
    }

    #[test]
    fn test_rate_at_minus_one_rejected() {
        let err = DiscountCurve::from_period_days(&frac(-1, 1), &[365], 365).unwrap_err();
        assert!(matches!(err, NpvError::InvalidDiscountRate(_)));
    }
}
