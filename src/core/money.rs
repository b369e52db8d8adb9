use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{BillingError, Result};

/// Number of decimal places for every user-facing figure
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a decimal to currency precision using round-half-up
///
/// Midpoints move away from zero, so 1.005 becomes 1.01 and -1.005 becomes -1.01.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// A currency amount held at full precision
///
/// Arithmetic never rounds. Call [`Money::rounded`] only when producing a
/// figure for display or storage, so accumulated sums do not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create a non-negative amount
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(BillingError::invalid_amount(format!(
                "Amount must be non-negative, got: {}",
                amount
            )));
        }

        Ok(Self(amount))
    }

    /// Create an amount that may be negative (balances, credits)
    pub fn signed(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a non-negative amount from a float
    ///
    /// Goes through the shortest decimal representation of the float, so
    /// `10.1` becomes exactly `10.1` rather than its binary expansion.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(BillingError::invalid_amount(format!(
                "Amount must be a finite number, got: {}",
                value
            )));
        }

        let amount = Decimal::from_str(&value.to_string())
            .or_else(|_| Decimal::from_scientific(&format!("{:e}", value)))
            .map_err(|_| {
                BillingError::invalid_amount(format!("Amount out of range, got: {}", value))
            })?;

        Self::new(amount)
    }

    /// Raw, unrounded amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Amount rounded to currency precision
    pub fn rounded(&self) -> Decimal {
        round_currency(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Checked addition; overflow is an `InvalidAmount` error
    pub fn add(self, other: Money) -> Result<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| out_of_range(self.0, "+", other.0))
    }

    /// Unclamped subtraction
    pub fn subtract(self, other: Money) -> Result<Money> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or_else(|| out_of_range(self.0, "-", other.0))
    }

    /// Subtraction clamped so the result never drops below `floor`
    pub fn subtract_floored(self, other: Money, floor: Money) -> Result<Money> {
        Ok(self.subtract(other)?.max(floor))
    }

    pub fn multiply(self, factor: Decimal) -> Result<Money> {
        self.0
            .checked_mul(factor)
            .map(Money)
            .ok_or_else(|| out_of_range(self.0, "*", factor))
    }

    /// `percent` per cent of this amount (8.5 means 8.5%)
    ///
    /// The rate is scaled down first so large amounts do not overflow
    /// before the division.
    pub fn percent(self, percent: Decimal) -> Result<Money> {
        let fraction = percent
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or_else(|| out_of_range(percent, "/", Decimal::ONE_HUNDRED))?;
        self.multiply(fraction)
    }

    /// Sum of `amounts`, failing on the first overflow
    pub fn checked_sum<I>(amounts: I) -> Result<Money>
    where
        I: IntoIterator<Item = Result<Money>>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |total, amount| total.add(amount?))
    }
}

fn out_of_range(lhs: Decimal, op: &str, rhs: Decimal) -> BillingError {
    BillingError::invalid_amount(format!(
        "Amount out of range computing {} {} {}",
        lhs, op, rhs
    ))
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}
