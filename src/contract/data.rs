//! Contract data structures matching the calculator's JSON input format

use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::Result;
use crate::numeric::{self, Rational};

/// Contract length as whole years plus extra days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ContractDuration {
    pub years: u32,
    pub days: u32,
}

impl ContractDuration {
    pub fn new(years: u32, days: u32) -> Self {
        Self { years, days }
    }

    /// Total length in days under the given convention
    pub fn total_days(&self, days_per_year: u32) -> u64 {
        u64::from(self.years) * u64::from(days_per_year) + u64::from(self.days)
    }
}

/// Exact numeric input value
///
/// Deserializes from a JSON string holding decimal text or from a JSON number.
/// Numbers go through their shortest decimal rendering, never the binary value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(Rational);

impl Amount {
    pub fn parse(text: &str) -> Result<Self> {
        numeric::parse_decimal(text).map(Amount)
    }

    pub fn from_f64(value: f64) -> Result<Self> {
        numeric::from_f64(value).map(Amount)
    }

    pub fn value(&self) -> &Rational {
        &self.0
    }
}

impl From<Rational> for Amount {
    fn from(value: Rational) -> Self {
        Amount(value)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number or a string holding one")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Amount, E> {
        Amount::parse(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Amount, E> {
        Amount::from_f64(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Amount, E> {
        Ok(Amount(Rational::from_integer(v.into())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Amount, E> {
        Ok(Amount(Rational::from_integer(v.into())))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

/// A single cost-sharing contract to evaluate
#[derive(Debug, Clone, Deserialize)]
pub struct Contract {
    #[serde(rename = "contractDuration")]
    pub contract_duration: ContractDuration,

    /// Start of the horizon; only the days left in its calendar year matter
    #[serde(rename = "announcementDate")]
    pub announcement_date: NaiveDate,

    /// Annual regulatory discount rate (0.125 = 12.5%)
    #[serde(rename = "NBUdiscountRate")]
    pub nbu_discount_rate: Amount,

    /// Share of the cost reduction paid to the participant
    #[serde(rename = "yearlyPaymentsPercentage")]
    pub yearly_payments_percentage: Amount,

    /// Projected cost reduction per period, stub year first
    #[serde(rename = "annualCostsReduction")]
    pub annual_costs_reduction: Vec<Amount>,
}

impl Contract {
    pub fn new(
        contract_duration: ContractDuration,
        announcement_date: NaiveDate,
        nbu_discount_rate: Rational,
        yearly_payments_percentage: Rational,
        annual_costs_reduction: Vec<Rational>,
    ) -> Self {
        Self {
            contract_duration,
            announcement_date,
            nbu_discount_rate: nbu_discount_rate.into(),
            yearly_payments_percentage: yearly_payments_percentage.into(),
            annual_costs_reduction: annual_costs_reduction.into_iter().map(Amount).collect(),
        }
    }

    /// Build a contract from decimal text, as it would arrive in a request
    pub fn from_decimal_text(
        contract_duration: ContractDuration,
        announcement_date: NaiveDate,
        nbu_discount_rate: &str,
        yearly_payments_percentage: &str,
        annual_costs_reduction: &[&str],
    ) -> Result<Self> {
        Ok(Self {
            contract_duration,
            announcement_date,
            nbu_discount_rate: Amount::parse(nbu_discount_rate)?,
            yearly_payments_percentage: Amount::parse(yearly_payments_percentage)?,
            annual_costs_reduction: annual_costs_reduction
                .iter()
                .map(|text| Amount::parse(text))
                .collect::<Result<_>>()?,
        })
    }

    pub fn discount_rate(&self) -> &Rational {
        self.nbu_discount_rate.value()
    }

    pub fn payments_percentage(&self) -> &Rational {
        self.yearly_payments_percentage.value()
    }

    pub fn cost_reduction(&self, period: usize) -> Option<&Rational> {
        self.annual_costs_reduction.get(period).map(Amount::value)
    }
}
