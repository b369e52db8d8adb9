use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::{BillingError, Money, Result};
use crate::modules::discounts::DiscountApplier;
use crate::modules::invoices::models::{DiscountInput, InvoiceDraft, InvoiceTotals, LineItem};
use crate::modules::invoices::services::LineItemTotaler;
use crate::modules::taxes::TaxCalculator;

/// Composes subtotal, discount, tax, total and balance for an invoice
///
/// Every screen that shows invoice figures goes through here. Stages run
/// in a fixed order:
///
/// 1. subtotal = sum of priced line totals
/// 2. discount = min(resolved discount, subtotal)
/// 3. after_discount = subtotal - discount
/// 4. tax = after_discount × rate / 100
/// 5. total = after_discount + tax
/// 6. balance_due = total - amount_paid
///
/// Intermediate values keep full precision; only the returned figures are
/// rounded. The balance is taken from the rounded total and payment, so
/// paying the displayed total always leaves exactly zero.
///
/// Any stage that overflows the decimal range fails the whole composition
/// with `InvalidAmount`.
pub struct InvoiceComposer {
    totaler: LineItemTotaler,
    discount_applier: DiscountApplier,
    tax_calculator: TaxCalculator,
    default_tax_rate_percent: Decimal,
}

impl InvoiceComposer {
    pub fn new() -> Self {
        Self {
            totaler: LineItemTotaler::new(),
            discount_applier: DiscountApplier::new(),
            tax_calculator: TaxCalculator::new(),
            default_tax_rate_percent: Decimal::ZERO,
        }
    }

    /// Tax rate used for drafts that do not carry their own
    pub fn with_default_tax_rate(mut self, tax_rate_percent: Decimal) -> Result<Self> {
        self.tax_calculator.validate_tax_rate(tax_rate_percent)?;
        self.default_tax_rate_percent = tax_rate_percent;
        Ok(self)
    }

    pub fn default_tax_rate_percent(&self) -> Decimal {
        self.default_tax_rate_percent
    }

    /// Compose a draft at `now`
    pub fn compose(&self, draft: &InvoiceDraft, now: DateTime<Utc>) -> Result<InvoiceTotals> {
        self.compose_invoice(
            &draft.line_items,
            &draft.discount_input(),
            draft
                .tax_rate_percent
                .unwrap_or(self.default_tax_rate_percent),
            draft.amount_paid.unwrap_or(Decimal::ZERO),
            now,
        )
    }

    /// Compose invoice figures from their parts
    ///
    /// A resolved discount amount and a fresh discount that resolves to the
    /// same amount produce identical totals.
    pub fn compose_invoice(
        &self,
        line_items: &[LineItem],
        discount: &DiscountInput,
        tax_rate_percent: Decimal,
        amount_paid: Decimal,
        now: DateTime<Utc>,
    ) -> Result<InvoiceTotals> {
        let amount_paid = Money::new(amount_paid).map_err(|_| {
            BillingError::invalid_amount(format!(
                "Amount paid must be non-negative, got: {}",
                amount_paid
            ))
        })?;

        let subtotal = self.totaler.compute_subtotal(line_items)?;

        let resolved = self.resolve_discount(discount, subtotal, now)?;
        let discount_amount = resolved.min(subtotal);
        if discount_amount < resolved {
            debug!(
                resolved = %resolved.amount(),
                subtotal = %subtotal.amount(),
                "Discount exceeds subtotal, clamping"
            );
        }

        let after_discount = subtotal.subtract_floored(discount_amount, Money::ZERO)?;
        let tax_amount = self
            .tax_calculator
            .compute_tax(after_discount, tax_rate_percent)?;
        let total = after_discount.add(tax_amount)?;
        let balance_due =
            Money::signed(total.rounded()).subtract(Money::signed(amount_paid.rounded()))?;

        debug!(
            line_items = line_items.len(),
            priced = self.totaler.priced_count(line_items),
            subtotal = %subtotal.amount(),
            discount = %discount_amount.amount(),
            tax = %tax_amount.amount(),
            total = %total.amount(),
            balance_due = %balance_due.amount(),
            "Composed invoice"
        );

        Ok(InvoiceTotals {
            subtotal: subtotal.rounded(),
            discount_amount: discount_amount.rounded(),
            after_discount: after_discount.rounded(),
            tax_amount: tax_amount.rounded(),
            total: total.rounded(),
            amount_paid: amount_paid.rounded(),
            balance_due: balance_due.amount(),
        })
    }

    fn resolve_discount(
        &self,
        discount: &DiscountInput,
        subtotal: Money,
        now: DateTime<Utc>,
    ) -> Result<Money> {
        match discount {
            DiscountInput::None => Ok(Money::ZERO),
            DiscountInput::Resolved(amount) => Money::new(*amount).map_err(|_| {
                warn!(%amount, "Rejecting negative resolved discount");
                BillingError::invalid_discount_value(format!(
                    "Discount amount must be non-negative, got: {}",
                    amount
                ))
            }),
            DiscountInput::Fresh(discount) => {
                self.discount_applier
                    .resolve_discount_amount(Some(discount), subtotal, now)
            }
        }
    }
}

impl Default for InvoiceComposer {
    fn default() -> Self {
        Self::new()
    }
}
