// Invoice draft input and composed totals
//
// A draft is what the invoice screens hand to the engine: line items, an
// optional discount (fresh or already resolved), a tax rate and what has
// been paid so far. Totals are derived and never stored by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use crate::modules::discounts::Discount;

/// Discount attached to an invoice
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DiscountInput {
    #[default]
    None,
    /// Flat amount already resolved, as stored on an issued invoice
    Resolved(Decimal),
    /// Discount to resolve against the subtotal at composition time
    Fresh(Discount),
}

/// Invoice draft as submitted by the invoice screens
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    #[serde(default)]
    pub line_items: Vec<LineItem>,

    /// Discount to resolve fresh (new invoices)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,

    /// Already-resolved discount amount (editing issued invoices)
    ///
    /// Takes precedence over `discount` when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Decimal>,

    /// Tax rate as a percentage; falls back to the composer's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate_percent: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<Decimal>,
}

impl InvoiceDraft {
    pub fn new(line_items: Vec<LineItem>) -> Self {
        Self {
            line_items,
            ..Default::default()
        }
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_discount_amount(mut self, amount: Decimal) -> Self {
        self.discount_amount = Some(amount);
        self
    }

    pub fn with_tax_rate(mut self, tax_rate_percent: Decimal) -> Self {
        self.tax_rate_percent = Some(tax_rate_percent);
        self
    }

    pub fn with_amount_paid(mut self, amount_paid: Decimal) -> Self {
        self.amount_paid = Some(amount_paid);
        self
    }

    /// Which discount path this draft takes
    pub fn discount_input(&self) -> DiscountInput {
        match (&self.discount_amount, &self.discount) {
            (Some(amount), _) => DiscountInput::Resolved(*amount),
            (None, Some(discount)) => DiscountInput::Fresh(discount.clone()),
            (None, None) => DiscountInput::None,
        }
    }
}

/// Where an invoice stands against payments received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
    /// More was paid than the total; balance due is negative
    Overpaid,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Unpaid => write!(f, "unpaid"),
            PaymentStatus::PartiallyPaid => write!(f, "partially_paid"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Overpaid => write!(f, "overpaid"),
        }
    }
}

/// Fully itemized invoice figures, each rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    /// Discount actually applied, after clamping to the subtotal
    pub discount_amount: Decimal,
    pub after_discount: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub amount_paid: Decimal,
    /// total - amount_paid; negative when overpaid
    pub balance_due: Decimal,
}

impl InvoiceTotals {
    pub fn payment_status(&self) -> PaymentStatus {
        if self.balance_due < Decimal::ZERO {
            PaymentStatus::Overpaid
        } else if self.balance_due.is_zero() {
            PaymentStatus::Paid
        } else if self.amount_paid.is_zero() {
            PaymentStatus::Unpaid
        } else {
            PaymentStatus::PartiallyPaid
        }
    }

    /// Whether a tax line should be shown at all
    pub fn has_tax(&self) -> bool {
        !self.tax_amount.is_zero()
    }
}
