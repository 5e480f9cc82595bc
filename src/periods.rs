//! Period segmentation of the calculation horizon
//!
//! The horizon is split into `npv_calculation_duration + 1` accrual periods:
//! the stub of the announcement year followed by full years. Three day counts
//! are tracked per period:
//! - **cost reduction**: days of the calendar year eligible for cost-reduction accrual
//! - **discount**: days the discount rate accrues over; the stub is moved to the
//!   final period, which only covers what the first year left over
//! - **payment**: days with active contract payments

use chrono::{Datelike, NaiveDate};
use crate::config::NpvConfig;
use crate::contract::ContractDuration;
use crate::error::{NpvError, Result};

/// Day counts of one accrual period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodDays {
    pub cost_reduction: u32,
    pub discount: u32,
    pub payment: u32,
}

/// Days from the announcement date to Dec 31 of the same year
pub fn first_year_days(announcement_date: NaiveDate, days_per_year: u32) -> Result<u32> {
    let invalid = |first_year_days: i64| NpvError::InvalidDate {
        date: announcement_date,
        first_year_days,
        days_per_year,
    };

    let year_end = NaiveDate::from_ymd_opt(announcement_date.year(), 12, 31).ok_or_else(|| invalid(-1))?;
    let days = (year_end - announcement_date).num_days();
    if days < 0 || days > i64::from(days_per_year) {
        return Err(invalid(days));
    }
    Ok(days as u32)
}

/// `[first_year_days, days_per_year, ..]`, one entry per period
pub(crate) fn days_with_cost_reduction(first_year_days: u32, config: &NpvConfig) -> Vec<u32> {
    let mut days = Vec::with_capacity(config.period_count());
    days.push(first_year_days);
    days.extend(std::iter::repeat(config.days_per_year).take(config.npv_calculation_duration as usize));
    days
}

/// Cost-reduction days with the last period replaced by the first year's remainder
///
/// The stub must not exceed `days_per_year`; `first_year_days` enforces this.
pub(crate) fn days_for_discount_rate(days_with_cost_reduction: &[u32], days_per_year: u32) -> Vec<u32> {
    let Some((&first, _)) = days_with_cost_reduction.split_first() else {
        return Vec::new();
    };
    let mut days = days_with_cost_reduction[..days_with_cost_reduction.len() - 1].to_vec();
    days.push(days_per_year - first);
    days
}

/// Payment days: the stub, then full years, then the leftover, then empty periods
///
/// Fails when the contract does not fit in the horizon, which would otherwise
/// leave the final payment period longer than its discount period.
pub fn days_with_payments(contract_days: u64, days_for_discount_rate: &[u32], config: &NpvConfig) -> Result<Vec<u32>> {
    config.validate()?;
    let exceeds = || NpvError::DurationExceedsHorizon {
        contract_days,
        horizon_days: config.horizon_days(),
    };
    if contract_days > config.horizon_days() {
        return Err(exceeds());
    }

    let stub = days_for_discount_rate.first().copied().unwrap_or(0);
    let first_period = contract_days.min(u64::from(stub));
    let remaining = contract_days - first_period;
    let days_per_year = u64::from(config.days_per_year);
    let full_periods = (remaining / days_per_year) as usize;
    let last_period = (remaining % days_per_year) as u32;

    let mut days = Vec::with_capacity(config.period_count() + 1);
    days.push(first_period as u32);
    days.extend(std::iter::repeat(config.days_per_year).take(full_periods));
    days.push(last_period);

    // A zero stub with a full-horizon contract leaves an empty leftover slot past the end
    if days.len() > config.period_count() {
        if last_period != 0 {
            return Err(exceeds());
        }
        days.pop();
    }
    days.resize(config.period_count(), 0);
    Ok(days)
}

/// Segment the horizon into per-period day counts
pub fn segment(
    contract_duration: &ContractDuration,
    announcement_date: NaiveDate,
    config: &NpvConfig,
) -> Result<Vec<PeriodDays>> {
    config.validate()?;

    let first = first_year_days(announcement_date, config.days_per_year)?;
    if first == 0 {
        log::warn!("Announcement on {announcement_date} leaves an empty stub period");
    }

    let contract_days = contract_duration.total_days(config.days_per_year);
    let cost_reduction = days_with_cost_reduction(first, config);
    let discount = days_for_discount_rate(&cost_reduction, config.days_per_year);
    let payment = days_with_payments(contract_days, &discount, config)?;

    log::debug!(
        "Segmented {} periods: first year {} days, contract {} days",
        cost_reduction.len(),
        first,
        contract_days
    );

    Ok(cost_reduction
        .into_iter()
        .zip(discount)
        .zip(payment)
        .map(|((cost_reduction, discount), payment)| PeriodDays {
            cost_reduction,
            discount,
            payment,
        })
        .collect())
}
