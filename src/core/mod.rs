pub mod error;
pub mod money;
pub mod numeric;

pub use error::{BillingError, Result};
pub use money::{round_currency, Money, CURRENCY_SCALE};
pub use numeric::NumericInput;
