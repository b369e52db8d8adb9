mod discount;

pub use discount::{Discount, DiscountKind, DiscountState, DiscountStatus};
