pub mod subscription_price_composer;

pub use subscription_price_composer::SubscriptionPriceComposer;
