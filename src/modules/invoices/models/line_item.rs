// LineItem model with line total calculation
//
// A line item is one priced row of an invoice draft. Quantity and unit
// price arrive from forms as numbers or text and are coerced on the way
// in. Description and product reference are display-only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::numeric::{deserialize_decimal, deserialize_quantity};
use crate::core::{BillingError, Money, Result};

/// Represents a single line item in an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Description of the product or service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Product or service the row was created from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_reference: Option<String>,

    /// Quantity of units, at least 1
    #[serde(default = "default_quantity", deserialize_with = "deserialize_quantity")]
    pub quantity: u32,

    /// Price per unit
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub unit_price: Decimal,
}

fn default_quantity() -> u32 {
    1
}

impl LineItem {
    /// Create a new line item with validation
    ///
    /// A zero quantity is coerced to 1, matching form behaviour.
    pub fn new(quantity: u32, unit_price: Decimal) -> Result<Self> {
        Self::validate_unit_price(unit_price)?;

        Ok(Self {
            description: None,
            product_reference: None,
            quantity: quantity.max(1),
            unit_price,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_product_reference(mut self, reference: impl Into<String>) -> Self {
        self.product_reference = Some(reference.into());
        self
    }

    /// Whether the row has a price yet
    pub fn is_priced(&self) -> bool {
        self.unit_price > Decimal::ZERO
    }

    /// quantity × unit_price, unrounded
    ///
    /// Rows without a positive unit price are not yet priced and count as zero.
    pub fn line_total(&self) -> Result<Money> {
        if !self.is_priced() {
            return Ok(Money::ZERO);
        }

        Money::new(self.unit_price)?.multiply(Decimal::from(self.quantity.max(1)))
    }

    fn validate_unit_price(unit_price: Decimal) -> Result<()> {
        if unit_price < Decimal::ZERO {
            return Err(BillingError::invalid_amount(format!(
                "Unit price must be non-negative, got: {}",
                unit_price
            )));
        }

        Ok(())
    }
}
