use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::{Money, Result};
use crate::modules::subscriptions::models::{
    validate_discount_percent, BillingFrequency, SubscriptionDuration, SubscriptionPlan,
    SubscriptionQuote,
};

/// Turns a plan's base price and a duration discount into recurring prices
pub struct SubscriptionPriceComposer;

impl SubscriptionPriceComposer {
    pub fn new() -> Self {
        Self
    }

    /// base_price × (1 - discount_percent / 100), unrounded
    pub fn compose_effective_price(
        &self,
        base_price: Money,
        discount_percent: Decimal,
    ) -> Result<Money> {
        if let Err(err) = validate_discount_percent(discount_percent) {
            warn!(%discount_percent, "Rejecting duration discount");
            return Err(err);
        }

        let discount = base_price.percent(discount_percent)?;
        base_price.subtract_floored(discount, Money::ZERO)
    }

    /// Effective price times the frequency's cycle multiplier, unrounded
    pub fn compose_billed_amount(
        &self,
        effective_price: Money,
        billing_frequency: BillingFrequency,
    ) -> Result<Money> {
        effective_price.multiply(Decimal::from(billing_frequency.cycle_multiplier()))
    }

    /// Same as [`compose_billed_amount`](Self::compose_billed_amount) for a frequency key
    pub fn compose_billed_amount_for_key(
        &self,
        effective_price: Money,
        billing_frequency: &str,
    ) -> Result<Money> {
        let frequency: BillingFrequency = billing_frequency.parse()?;
        self.compose_billed_amount(effective_price, frequency)
    }

    /// Rounded effective and billed prices for a plan
    pub fn quote(
        &self,
        plan: &SubscriptionPlan,
        duration: &SubscriptionDuration,
        billing_frequency: BillingFrequency,
    ) -> Result<SubscriptionQuote> {
        let effective_price =
            self.compose_effective_price(plan.base_price()?, duration.discount_percent)?;
        let billed_amount = self.compose_billed_amount(effective_price, billing_frequency)?;

        debug!(
            plan = ?plan.name,
            base_price = %plan.base_price,
            discount_percent = %duration.discount_percent,
            frequency = %billing_frequency,
            effective_price = %effective_price.amount(),
            billed_amount = %billed_amount.amount(),
            "Quoted subscription"
        );

        Ok(SubscriptionQuote {
            frequency: billing_frequency,
            effective_price: effective_price.rounded(),
            billed_amount: billed_amount.rounded(),
        })
    }

    /// Quote using the frequency implied by a month-based duration
    pub fn quote_for_duration(
        &self,
        plan: &SubscriptionPlan,
        duration: &SubscriptionDuration,
    ) -> Result<SubscriptionQuote> {
        let frequency = duration.billing_frequency()?;
        self.quote(plan, duration, frequency)
    }
}

impl Default for SubscriptionPriceComposer {
    fn default() -> Self {
        Self::new()
    }
}
