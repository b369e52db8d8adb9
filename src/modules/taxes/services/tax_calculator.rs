use rust_decimal::Decimal;
use tracing::warn;

use crate::core::{BillingError, Money, Result};

/// TaxCalculator applies a percentage tax rate to a post-discount amount
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate tax on the discounted amount
    ///
    /// `tax_rate_percent` is a percentage, so 8.5 means 8.5%.
    /// A zero rate is valid and yields zero tax; hiding a zero tax line is
    /// left to the caller.
    pub fn compute_tax(&self, after_discount: Money, tax_rate_percent: Decimal) -> Result<Money> {
        self.validate_tax_rate(tax_rate_percent)?;

        after_discount.percent(tax_rate_percent)
    }

    /// Tax rate must be non-negative; there is no upper bound
    pub fn validate_tax_rate(&self, tax_rate_percent: Decimal) -> Result<()> {
        if tax_rate_percent < Decimal::ZERO {
            warn!(%tax_rate_percent, "Rejecting negative tax rate");
            return Err(BillingError::invalid_tax_rate(format!(
                "Tax rate cannot be negative, got: {}",
                tax_rate_percent
            )));
        }

        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
