// Lenient numeric coercion for form-style input.
//
// Admin forms submit prices and quantities either as JSON numbers or as
// free text ("$1,200.50", "2 pcs"). Text is cleaned by dropping every
// character that is not a digit or '.', keeping only the first '.', and
// anything left unparseable becomes zero. Amounts too large for a decimal
// are rejected rather than dropped.

use rust_decimal::prelude::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{BillingError, Result};

/// Digits in the integer part of `Decimal::MAX`
const MAX_INTEGER_DIGITS: usize = 29;

/// Magnitudes below this vanish at decimal precision
const SMALLEST_REPRESENTABLE: f64 = 1e-28;

/// A number as it arrives from a form: JSON number or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Coerce to a decimal; unparseable text becomes zero
    ///
    /// Numbers outside the decimal range are an `InvalidAmount` error.
    pub fn to_decimal(&self) -> Result<Decimal> {
        match self {
            NumericInput::Number(value) => decimal_from_f64(*value),
            NumericInput::Text(text) => coerce_decimal(text),
        }
    }

    /// Coerce to a positive quantity; zero, negative or unparseable becomes 1
    pub fn to_quantity(&self) -> u32 {
        let quantity = match self {
            NumericInput::Number(value) if value.is_finite() => value.trunc(),
            NumericInput::Number(_) => 0.0,
            NumericInput::Text(text) => coerce_integer(text) as f64,
        };

        if quantity >= 1.0 && quantity <= u32::MAX as f64 {
            quantity as u32
        } else {
            1
        }
    }
}

/// Strip everything except digits and the first decimal point
pub fn sanitize_numeric(input: &str) -> String {
    let mut seen_point = false;
    input
        .chars()
        .filter(|c| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Parse free text as a decimal amount; unparseable text becomes zero
pub fn coerce_decimal(input: &str) -> Result<Decimal> {
    let cleaned = sanitize_numeric(input);
    if cleaned.is_empty() || cleaned == "." {
        return Ok(Decimal::ZERO);
    }

    match Decimal::from_str(&cleaned) {
        Ok(value) => Ok(value),
        Err(_) if exceeds_decimal_range(&cleaned) => Err(BillingError::invalid_amount(format!(
            "Amount out of range, got: {}",
            input
        ))),
        Err(_) => Ok(Decimal::ZERO),
    }
}

fn exceeds_decimal_range(cleaned: &str) -> bool {
    let whole = cleaned.split('.').next().unwrap_or_default();
    whole.trim_start_matches('0').len() >= MAX_INTEGER_DIGITS
}

/// Parse free text as a whole number, discarding any fractional part
fn coerce_integer(input: &str) -> u64 {
    let cleaned = sanitize_numeric(input);
    let whole = cleaned.split('.').next().unwrap_or_default();
    whole.parse().unwrap_or(0)
}

fn decimal_from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(BillingError::invalid_amount(format!(
            "Amount must be a finite number, got: {}",
            value
        )));
    }
    if value.abs() < SMALLEST_REPRESENTABLE {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .ok_or_else(|| {
            BillingError::invalid_amount(format!("Amount out of range, got: {}", value))
        })
}

/// serde helper: coerce a number-or-text field into a decimal
pub fn deserialize_decimal<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    NumericInput::deserialize(deserializer)?
        .to_decimal()
        .map_err(D::Error::custom)
}

/// serde helper: coerce a number-or-text field into a positive quantity
pub fn deserialize_quantity<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<NumericInput>::deserialize(deserializer)?;
    Ok(input.map(|value| value.to_quantity()).unwrap_or(1))
}
