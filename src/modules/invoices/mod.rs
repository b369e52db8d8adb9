// Invoices module

pub mod models;
pub mod services;

pub use models::{DiscountInput, InvoiceDraft, InvoiceTotals, LineItem, PaymentStatus};
pub use services::{InvoiceComposer, LineItemTotaler};
