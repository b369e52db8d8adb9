// Subscription plan and duration models
//
// A plan carries the base (monthly) price. A duration carries the discount
// granted for committing to it, plus a cycle length stored either in months
// or in days depending on which admin screen created it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::billing_frequency::BillingFrequency;
use crate::core::{BillingError, Money, Result};

/// Length of one billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "unit", content = "count")]
pub enum CycleLength {
    Days(u32),
    Months(u32),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,

    /// Discount for this duration, 0-100
    #[serde(default)]
    pub discount_percent: Decimal,
}

impl SubscriptionDuration {
    pub fn months(months: u32, discount_percent: Decimal) -> Self {
        Self {
            months: Some(months),
            days: None,
            discount_percent,
        }
    }

    pub fn days(days: u32, discount_percent: Decimal) -> Self {
        Self {
            months: None,
            days: Some(days),
            discount_percent,
        }
    }

    /// Cycle length with days taking precedence over months
    ///
    /// Zero counts are treated as absent.
    pub fn cycle_length(&self) -> Option<CycleLength> {
        match (self.days, self.months) {
            (Some(days), _) if days > 0 => Some(CycleLength::Days(days)),
            (_, Some(months)) if months > 0 => Some(CycleLength::Months(months)),
            _ => None,
        }
    }

    /// Billing frequency implied by a month-based cycle
    pub fn billing_frequency(&self) -> Result<BillingFrequency> {
        match self.cycle_length() {
            Some(CycleLength::Months(months)) => BillingFrequency::from_months(months),
            Some(CycleLength::Days(days)) => Err(BillingError::invalid_billing_frequency(
                format!("A {}-day cycle has no billing frequency", days),
            )),
            None => Err(BillingError::invalid_billing_frequency(
                "Duration has no cycle length",
            )),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_discount_percent(self.discount_percent)
    }
}

pub(crate) fn validate_discount_percent(discount_percent: Decimal) -> Result<()> {
    if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
        return Err(BillingError::invalid_discount_value(format!(
            "Duration discount must be between 0 and 100, got: {}",
            discount_percent
        )));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Canonical monthly price
    pub base_price: Decimal,
}

impl SubscriptionPlan {
    pub fn new(base_price: Decimal) -> Result<Self> {
        Money::new(base_price)?;

        Ok(Self {
            name: None,
            base_price,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn base_price(&self) -> Result<Money> {
        Money::new(self.base_price)
    }
}

/// Recurring price for a plan at a given duration and frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionQuote {
    pub frequency: BillingFrequency,
    /// Discounted base-cycle price, rounded
    pub effective_price: Decimal,
    /// Amount charged each cycle, rounded
    pub billed_amount: Decimal,
}
