pub mod discounts;
pub mod invoices;
pub mod subscriptions;
pub mod taxes;
