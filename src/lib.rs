//! Telebill Billing Computation Engine
//!
//! Pure, deterministic pricing for the telehealth admin and patient portals:
//! invoice subtotal → discount → tax → total → balance due, and subscription
//! base price → duration discount → per-cycle billed amount.
//!
//! Nothing in this crate performs I/O. Every screen that shows billing
//! figures should route through [`InvoiceComposer`] or
//! [`SubscriptionPriceComposer`] instead of re-deriving the arithmetic.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{BillingError, Money, Result};
pub use modules::discounts::{Discount, DiscountApplier, DiscountKind, DiscountState, DiscountStatus};
pub use modules::invoices::{
    DiscountInput, InvoiceComposer, InvoiceDraft, InvoiceTotals, LineItem, LineItemTotaler,
    PaymentStatus,
};
pub use modules::subscriptions::{
    BillingFrequency, SubscriptionDuration, SubscriptionPlan, SubscriptionPriceComposer,
    SubscriptionQuote,
};
pub use modules::taxes::TaxCalculator;
