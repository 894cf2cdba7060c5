//! Monetary types and the micro-unit fixed-point convention.
//!
//! Amounts that cross the boundary to the matching engine are integers
//! scaled by [`MICRO_SCALE`]. This module is the only place that converts
//! between decimals and micro-units. Conversion truncates toward zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Volume represented as a Decimal for precision.
pub type Volume = Decimal;

/// Scale factor between a decimal amount and its micro-unit integer.
pub const MICRO_SCALE: u32 = 1_000_000;

/// Parse a user or upstream numeric string as a finite `f64`.
///
/// Accepts plain decimals and scientific notation, ignoring surrounding
/// whitespace. `NaN` and infinities yield `None`. Use this to decide
/// whether a value is a number at all; [`parse_decimal`] is for arithmetic.
#[must_use]
pub fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a numeric string into a `Decimal`.
///
/// Returns `None` for non-numbers and for values outside the `Decimal`
/// range (about ±7.9e28).
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
}

/// Convert a decimal amount to a micro-unit integer.
///
/// The integer and fractional parts are scaled separately in `u128`, so any
/// non-negative `Decimal` converts. Negative amounts yield `None`.
#[must_use]
pub fn to_micro(value: Decimal) -> Option<u128> {
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    let scale = Decimal::from(MICRO_SCALE);
    let whole = value.trunc().to_u128()?;
    let fraction = (value.fract() * scale).trunc().to_u128()?;
    whole
        .checked_mul(u128::from(MICRO_SCALE))?
        .checked_add(fraction)
}

/// Convert a decimal amount to a micro-unit integer string.
///
/// Negative amounts become `"0"`.
#[must_use]
pub fn to_micro_string(value: Decimal) -> String {
    match to_micro(value) {
        Some(micro) => micro.to_string(),
        None => {
            warn!(value = %value, "Amount not representable in micro-units, using 0");
            "0".to_string()
        }
    }
}

/// Convert a numeric string to a micro-unit integer string.
///
/// Values inside the `Decimal` range convert exactly. Larger finite values
/// are scaled as `f64` and carry `f64` precision. Non-numbers, non-finite
/// and negative values become `"0"`.
#[must_use]
pub fn str_to_micro_string(raw: &str) -> String {
    if let Some(value) = parse_decimal(raw) {
        return to_micro_string(value);
    }
    match parse_finite(raw) {
        Some(value) if value >= 0.0 => {
            debug!(value, "Amount outside decimal range, scaling as f64");
            format!("{:.0}", (value * f64::from(MICRO_SCALE)).trunc())
        }
        Some(value) => {
            warn!(value, "Negative amount, using 0");
            "0".to_string()
        }
        None => {
            warn!(value = raw, "Unparseable amount, using 0");
            "0".to_string()
        }
    }
}
