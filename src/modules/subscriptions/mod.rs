pub mod models;
pub mod services;

pub use models::{
    BillingFrequency, CycleLength, SubscriptionDuration, SubscriptionPlan, SubscriptionQuote,
    BILLING_FREQUENCIES,
};
pub use services::SubscriptionPriceComposer;
