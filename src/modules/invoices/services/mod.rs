pub mod invoice_composer;
pub mod line_item_totaler;

pub use invoice_composer::InvoiceComposer;
pub use line_item_totaler::LineItemTotaler;
