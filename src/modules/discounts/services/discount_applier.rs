use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::{Money, Result};
use crate::modules::discounts::models::{Discount, DiscountKind};

/// Resolves a discount into the flat amount it takes off a subtotal
///
/// The result is NOT clamped to the subtotal. Clamping belongs to the
/// invoice, since the same discount may exceed one invoice and not another.
pub struct DiscountApplier;

impl DiscountApplier {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `discount` against `subtotal` at `now`
    ///
    /// Absent, inactive, scheduled and expired discounts resolve to zero.
    /// An applicable discount with an out-of-range value is an error.
    pub fn resolve_discount_amount(
        &self,
        discount: Option<&Discount>,
        subtotal: Money,
        now: DateTime<Utc>,
    ) -> Result<Money> {
        let Some(discount) = discount else {
            return Ok(Money::ZERO);
        };

        let state = discount.state(now);
        if !discount.is_applicable(now) {
            debug!(code = ?discount.code, %state, "Discount not applicable, resolving to zero");
            return Ok(Money::ZERO);
        }

        if let Err(err) = discount.validate() {
            warn!(code = ?discount.code, error = %err, "Rejecting discount");
            return Err(err);
        }

        let amount = match discount.kind {
            DiscountKind::Percentage => subtotal.percent(discount.value)?,
            DiscountKind::FixedAmount => Money::new(discount.value)?,
        };

        debug!(
            code = ?discount.code,
            kind = %discount.kind,
            value = %discount.value,
            subtotal = %subtotal.amount(),
            resolved = %amount.amount(),
            "Resolved discount amount"
        );

        Ok(amount)
    }
}

impl Default for DiscountApplier {
    fn default() -> Self {
        Self::new()
    }
}
