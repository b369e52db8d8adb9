// Discount model with validity window and derived state
//
// A discount is either a percentage of the subtotal or a flat amount.
// Status is stored; scheduled/expired/active is derived from the validity
// window at read time and never persisted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{BillingError, Result};

/// How a discount value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountKind {
    /// `value` is a percentage of the subtotal, 0-100
    Percentage,
    /// `value` is a flat amount
    FixedAmount,
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountKind::Percentage => write!(f, "percentage"),
            DiscountKind::FixedAmount => write!(f, "fixedAmount"),
        }
    }
}

/// Stored on/off switch set by an admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiscountStatus {
    #[default]
    Active,
    Inactive,
}

/// State derived from status and validity window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountState {
    /// Switched off, never applicable
    Inactive,
    /// `valid_from` is still in the future
    Scheduled,
    /// `valid_until` has passed
    Expired,
    /// Applicable right now
    Active,
}

impl std::fmt::Display for DiscountState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountState::Inactive => write!(f, "inactive"),
            DiscountState::Scheduled => write!(f, "scheduled"),
            DiscountState::Expired => write!(f, "expired"),
            DiscountState::Active => write!(f, "active"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    /// Redemption code shown to patients (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub kind: DiscountKind,

    pub value: Decimal,

    #[serde(default)]
    pub status: DiscountStatus,

    /// Missing means the discount has always been valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,

    /// Missing means the discount never expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

impl Discount {
    /// Active percentage discount with no validity window
    pub fn percentage(value: Decimal) -> Result<Self> {
        let discount = Self::unbounded(DiscountKind::Percentage, value);
        discount.validate()?;
        Ok(discount)
    }

    /// Active flat-amount discount with no validity window
    pub fn fixed_amount(value: Decimal) -> Result<Self> {
        let discount = Self::unbounded(DiscountKind::FixedAmount, value);
        discount.validate()?;
        Ok(discount)
    }

    fn unbounded(kind: DiscountKind, value: Decimal) -> Self {
        Self {
            code: None,
            kind,
            value,
            status: DiscountStatus::Active,
            valid_from: None,
            valid_until: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: DiscountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_window(
        mut self,
        valid_from: Option<DateTime<Utc>>,
        valid_until: Option<DateTime<Utc>>,
    ) -> Self {
        self.valid_from = valid_from;
        self.valid_until = valid_until;
        self
    }

    /// Check value range and window ordering
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            DiscountKind::Percentage => {
                if self.value < Decimal::ZERO || self.value > Decimal::ONE_HUNDRED {
                    return Err(BillingError::invalid_discount_value(format!(
                        "Percentage discount must be between 0 and 100, got: {}",
                        self.value
                    )));
                }
            }
            DiscountKind::FixedAmount => {
                if self.value < Decimal::ZERO {
                    return Err(BillingError::invalid_discount_value(format!(
                        "Fixed discount amount must be non-negative, got: {}",
                        self.value
                    )));
                }
            }
        }

        if let (Some(from), Some(until)) = (self.valid_from, self.valid_until) {
            if from > until {
                return Err(BillingError::invalid_discount_value(format!(
                    "Discount window starts ({}) after it ends ({})",
                    from.to_rfc3339(),
                    until.to_rfc3339()
                )));
            }
        }

        Ok(())
    }

    /// Derive the discount's state at `now`
    ///
    /// Both window bounds are inclusive.
    pub fn state(&self, now: DateTime<Utc>) -> DiscountState {
        if self.status == DiscountStatus::Inactive {
            return DiscountState::Inactive;
        }

        match (self.valid_from, self.valid_until) {
            (Some(from), _) if now < from => DiscountState::Scheduled,
            (_, Some(until)) if now > until => DiscountState::Expired,
            _ => DiscountState::Active,
        }
    }

    pub fn is_applicable(&self, now: DateTime<Utc>) -> bool {
        self.state(now) == DiscountState::Active
    }
}
