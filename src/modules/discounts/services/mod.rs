pub mod discount_applier;

pub use discount_applier::DiscountApplier;
