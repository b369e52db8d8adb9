use crate::core::{BillingError, Result};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub logging: LoggingConfig,
    pub billing: BillingConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(BillingError::configuration(format!(
                "Invalid LOG_FORMAT: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Applied to drafts that carry no tax rate
    pub default_tax_rate_percent: Decimal,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            },
            logging: LoggingConfig {
                level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                format: lookup("LOG_FORMAT")
                    .unwrap_or_else(|| "pretty".to_string())
                    .parse()?,
            },
            billing: BillingConfig {
                default_tax_rate_percent: lookup("DEFAULT_TAX_RATE_PERCENT")
                    .unwrap_or_else(|| "0".to_string())
                    .trim()
                    .parse()
                    .map_err(|_| {
                        BillingError::configuration("Invalid DEFAULT_TAX_RATE_PERCENT")
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.billing.default_tax_rate_percent < Decimal::ZERO {
            return Err(BillingError::configuration(
                "DEFAULT_TAX_RATE_PERCENT cannot be negative",
            ));
        }

        Ok(())
    }
}
