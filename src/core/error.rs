/// Engine-wide Result type
pub type Result<T> = std::result::Result<T, BillingError>;

/// Billing engine error type
///
/// Every variant is a local validation failure. Nothing here is transient,
/// so callers should surface these to the user rather than retry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// Non-finite, non-numeric, or disallowed-negative money input
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Percentage outside [0, 100] or negative flat discount
    #[error("Invalid discount value: {0}")]
    InvalidDiscountValue(String),

    /// Negative tax rate
    #[error("Invalid tax rate: {0}")]
    InvalidTaxRate(String),

    /// Unrecognized billing frequency key or cycle length
    #[error("Invalid billing frequency: {0}")]
    InvalidBillingFrequency(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BillingError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        BillingError::InvalidAmount(msg.into())
    }

    pub fn invalid_discount_value(msg: impl Into<String>) -> Self {
        BillingError::InvalidDiscountValue(msg.into())
    }

    pub fn invalid_tax_rate(msg: impl Into<String>) -> Self {
        BillingError::InvalidTaxRate(msg.into())
    }

    pub fn invalid_billing_frequency(msg: impl Into<String>) -> Self {
        BillingError::InvalidBillingFrequency(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        BillingError::Configuration(msg.into())
    }
}
