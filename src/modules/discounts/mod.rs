pub mod models;
pub mod services;

pub use models::{Discount, DiscountKind, DiscountState, DiscountStatus};
pub use services::DiscountApplier;
