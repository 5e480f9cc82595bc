//! Exact rational arithmetic helpers
//!
//! All rates, coefficients, payments and incomes are held as `BigRational`.
//! Floating inputs are only ever converted through their decimal text, so
//! `0.2` becomes exactly `1/5` rather than the nearest binary fraction.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::{NpvError, Result};

/// Exact fraction used throughout the pipeline
pub type Rational = BigRational;

/// Largest decimal exponent accepted in text input
const MAX_EXPONENT: u64 = 4096;

/// `numerator / denominator` as a reduced fraction; `denominator` must be non-zero
pub fn ratio(numerator: u32, denominator: u32) -> Rational {
    Rational::new(BigInt::from(numerator), BigInt::from(denominator))
}

fn pow10(exponent: u64) -> BigInt {
    num_traits::pow(BigInt::from(10), exponent as usize)
}

/// Parse decimal text such as `"0.125"`, `"-42"`, `".5"` or `"1.5e3"` exactly
pub fn parse_decimal(text: &str) -> Result<Rational> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => {
            let exponent: i64 = unsigned[pos + 1..]
                .parse()
                .map_err(|_| NpvError::imprecise(text, "malformed exponent"))?;
            (&unsigned[..pos], exponent)
        }
        None => (unsigned, 0),
    };
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return Err(NpvError::imprecise(text, "exponent out of range"));
    }

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(NpvError::imprecise(text, "no digits"));
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(NpvError::imprecise(text, "not a decimal number"));
    }

    let digits = format!("{int_part}{frac_part}");
    let mut numerator = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| NpvError::imprecise(text, "not a decimal number"))?;
    if negative {
        numerator = -numerator;
    }

    let scale = exponent - frac_part.len() as i64;
    let value = if scale >= 0 {
        Rational::from_integer(numerator * pow10(scale as u64))
    } else {
        Rational::new(numerator, pow10(scale.unsigned_abs()))
    };
    Ok(value)
}

/// Convert a binary float through its shortest round-trip decimal rendering
pub fn from_f64(value: f64) -> Result<Rational> {
    if !value.is_finite() {
        return Err(NpvError::imprecise(value.to_string(), "value is not finite"));
    }
    parse_decimal(&value.to_string())
}

/// Nearest `f64`, for display only
pub fn to_f64(value: &Rational) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Render `value` with `width` characters of integer and fraction digits
///
/// The sign counts toward the integer part. The fraction is rounded half away
/// from zero on the exact value, so the output does not depend on float rounding.
pub fn format_significant(value: &Rational, width: usize) -> String {
    let negative = value.is_negative();
    let magnitude = value.abs();

    let integer = magnitude.to_integer();
    let integer_len = integer.to_string().len() + usize::from(negative);
    let precision = width.saturating_sub(integer_len);

    let scaled = magnitude * Rational::from_integer(pow10(precision as u64));
    let mut rounded = scaled.to_integer();
    let remainder = scaled - Rational::from_integer(rounded.clone());
    if remainder * Rational::from_integer(BigInt::from(2)) >= Rational::from_integer(BigInt::from(1)) {
        rounded += 1;
    }

    let mut text = rounded.to_string();
    if precision > 0 {
        if text.len() <= precision {
            text = format!("{}{}", "0".repeat(precision + 1 - text.len()), text);
        }
        text.insert(text.len() - precision, '.');
    }
    if negative && !rounded.is_zero() {
        text.insert(0, '-');
    }
    text
}
