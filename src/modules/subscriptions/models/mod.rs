mod billing_frequency;
mod subscription;

pub use billing_frequency::{BillingFrequency, FrequencyEntry, BILLING_FREQUENCIES};
pub(crate) use subscription::validate_discount_percent;
pub use subscription::{CycleLength, SubscriptionDuration, SubscriptionPlan, SubscriptionQuote};
