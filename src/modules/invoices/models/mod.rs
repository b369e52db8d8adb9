mod invoice;
mod line_item;

pub use invoice::{DiscountInput, InvoiceDraft, InvoiceTotals, PaymentStatus};
pub use line_item::LineItem;
