use crate::core::{Money, Result};
use crate::modules::invoices::models::LineItem;

/// Reduces line items to an unrounded subtotal
pub struct LineItemTotaler;

impl LineItemTotaler {
    pub fn new() -> Self {
        Self
    }

    /// Sum of all line totals; unpriced rows contribute zero
    pub fn compute_subtotal(&self, line_items: &[LineItem]) -> Result<Money> {
        Money::checked_sum(line_items.iter().map(LineItem::line_total))
    }

    /// Rows counted towards the subtotal
    pub fn priced_count(&self, line_items: &[LineItem]) -> usize {
        line_items.iter().filter(|item| item.is_priced()).count()
    }
}

impl Default for LineItemTotaler {
    fn default() -> Self {
        Self::new()
    }
}
