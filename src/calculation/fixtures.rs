//! Regression fixtures: one input varied at a time against known totals

use chrono::NaiveDate;
use num_traits::{Signed, Zero};

use super::{amount_of_contract, amount_of_performance, NpvEngine};
use crate::config::{NpvConfig, DEFAULT_DAYS_PER_YEAR, DEFAULT_NPV_CALCULATION_DURATION};
use crate::contract::{Amount, Contract, ContractDuration};
use crate::numeric::format_significant;

const COSTS_REDUCTION: [&str; 21] = [
    "0", "95000", "120000.5", "135000.25", "150000", "150000", "155000.75", "160000", "160000", "162500.5",
    "165000", "165000", "170000.1", "170000.1", "172000", "175000", "175000", "178000.8", "180000", "180000",
    "181250",
];

fn base_contract() -> Contract {
    Contract::from_decimal_text(
        ContractDuration::new(2, 10),
        NaiveDate::from_ymd_opt(2017, 8, 18).unwrap(),
        "0.125",
        "0.7",
        &COSTS_REDUCTION,
    )
    .unwrap()
}

fn totals(contract: &Contract) -> (String, String) {
    let performance = amount_of_performance(contract, DEFAULT_DAYS_PER_YEAR, DEFAULT_NPV_CALCULATION_DURATION).unwrap();
    let paid = amount_of_contract(contract, DEFAULT_DAYS_PER_YEAR, DEFAULT_NPV_CALCULATION_DURATION).unwrap();
    (format_significant(&performance, 15), format_significant(&paid, 15))
}

#[test]
fn test_contract_duration_changing() {
    let cases = [
        ((0, 0), "1009358.51943161", "0.00000000000000"),
        ((0, 30), "1009358.51943161", "0.00000000000000"),
        ((1, 0), "973756.409957163", "41904.1095890411"),
        ((2, 10), "911147.034482834", "121733.106849315"),
        ((5, 100), "712977.586086406", "444932.031849315"),
        ((10, 0), "508733.665486128", "974032.221917808"),
        ((15, 200), "368365.969893352", "1634966.60849315"),
        ((20, 0), "298371.847643069", "2239127.10000000"),
    ];

    let mut contract = base_contract();
    for ((years, days), performance, paid) in cases {
        contract.contract_duration = ContractDuration::new(years, days);
        assert_eq!(totals(&contract), (performance.to_string(), paid.to_string()), "{years}y {days}d");
    }
}

#[test]
fn test_announcement_date_changing() {
    let cases = [
        ((2017, 1, 1), "874640.185767930", "69031.5173972603"),
        ((2016, 1, 1), "874488.491751852", "68801.3794520548"),
        ((2017, 6, 30), "903013.891001997", "110456.347534247"),
        ((2017, 12, 1), "929257.624058202", "145897.591095890"),
        ((2018, 3, 15), "885882.157337078", "85831.5873972603"),
    ];

    let mut contract = base_contract();
    for ((y, m, d), performance, paid) in cases {
        contract.announcement_date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(totals(&contract), (performance.to_string(), paid.to_string()), "{y}-{m}-{d}");
    }
}

#[test]
fn test_payments_percentage_changing() {
    let cases = [
        ("0", "1009358.51943161", "0.00000000000000"),
        ("0.1", "995328.307296073", "17390.4438356164"),
        ("0.35", "960252.776957224", "60866.5534246575"),
        ("0.5", "939207.458753914", "86952.2191780822"),
        ("0.7", "911147.034482834", "121733.106849315"),
        ("1", "869056.398076215", "173904.438356164"),
    ];

    let mut contract = base_contract();
    for (percentage, performance, paid) in cases {
        contract.yearly_payments_percentage = Amount::parse(percentage).unwrap();
        assert_eq!(totals(&contract), (performance.to_string(), paid.to_string()), "{percentage}");
    }
}

#[test]
fn test_discount_rate_moves_performance_only() {
    let cases = [
        ("0.05", "1754715.89377960"),
        ("0.125", "911147.034482834"),
        ("0.2", "545976.214165421"),
    ];

    let mut contract = base_contract();
    let engine = NpvEngine::new(NpvConfig::default());
    let mut previous = None;
    for (rate, performance) in cases {
        contract.nbu_discount_rate = Amount::parse(rate).unwrap();
        let result = engine.calculate(&contract).unwrap();

        assert_eq!(format_significant(&result.amount_of_performance, 15), performance);
        assert_eq!(format_significant(&result.amount_of_contract, 15), "121733.106849315");
        if let Some(previous) = previous {
            assert!(result.amount_of_performance < previous);
        }
        previous = Some(result.amount_of_performance);
    }
}

#[test]
fn test_payments_are_non_negative_and_sum_to_contract_amount() {
    let result = NpvEngine::default().calculate(&base_contract()).unwrap();

    assert!(result.periods.iter().all(|row| !row.payment.is_negative()));
    let total: crate::numeric::Rational = result.periods.iter().map(|row| &row.payment).sum();
    assert_eq!(total, result.amount_of_contract);
    assert_eq!(result.summary().payment_days, 740);
}

#[test]
fn test_zero_duration_with_zero_schedule() {
    let mut contract = base_contract();
    contract.contract_duration = ContractDuration::new(0, 0);
    contract.annual_costs_reduction = vec![Amount::parse("0").unwrap(); 21];

    let result = NpvEngine::default().calculate(&contract).unwrap();
    assert!(result.amount_of_contract.is_zero());
    assert!(result.amount_of_performance.is_zero());
}

#[test]
fn test_float_input_matches_decimal_text() {
    let json = r#"{
        "contractDuration": {"years": 2, "days": 10},
        "announcementDate": "2017-08-18",
        "NBUdiscountRate": 0.125,
        "yearlyPaymentsPercentage": 0.7,
        "annualCostsReduction": [0, 95000, 120000.5, 135000.25, 150000, 150000, 155000.75, 160000, 160000,
            162500.5, 165000, 165000, 170000.1, 170000.1, 172000, 175000, 175000, 178000.8, 180000, 180000, 181250]
    }"#;
    let from_floats: Contract = serde_json::from_str(json).unwrap();

    let engine = NpvEngine::default();
    assert_eq!(
        engine.calculate(&from_floats).unwrap(),
        engine.calculate(&base_contract()).unwrap()
    );
}
