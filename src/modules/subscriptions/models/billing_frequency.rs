use serde::{Deserialize, Serialize};

use crate::core::{BillingError, Result};

/// How often a subscription is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingFrequency {
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

/// One row of the frequency table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub frequency: BillingFrequency,
    pub key: &'static str,
    pub label: &'static str,
    /// Base-cycle (monthly) prices billed per cycle
    pub multiplier: u32,
}

/// Single source of truth for keys, labels and cycle multipliers
pub static BILLING_FREQUENCIES: [FrequencyEntry; 4] = [
    FrequencyEntry {
        frequency: BillingFrequency::Monthly,
        key: "monthly",
        label: "Monthly",
        multiplier: 1,
    },
    FrequencyEntry {
        frequency: BillingFrequency::Quarterly,
        key: "quarterly",
        label: "Quarterly",
        multiplier: 3,
    },
    FrequencyEntry {
        frequency: BillingFrequency::Biannually,
        key: "biannually",
        label: "Every 6 months",
        multiplier: 6,
    },
    FrequencyEntry {
        frequency: BillingFrequency::Annually,
        key: "annually",
        label: "Annually",
        multiplier: 12,
    },
];

impl BillingFrequency {
    fn entry(&self) -> &'static FrequencyEntry {
        // Table covers every variant
        match self {
            BillingFrequency::Monthly => &BILLING_FREQUENCIES[0],
            BillingFrequency::Quarterly => &BILLING_FREQUENCIES[1],
            BillingFrequency::Biannually => &BILLING_FREQUENCIES[2],
            BillingFrequency::Annually => &BILLING_FREQUENCIES[3],
        }
    }

    pub fn key(&self) -> &'static str {
        self.entry().key
    }

    pub fn label(&self) -> &'static str {
        self.entry().label
    }

    pub fn cycle_multiplier(&self) -> u32 {
        self.entry().multiplier
    }

    /// Frequency billed every `months` months
    pub fn from_months(months: u32) -> Result<Self> {
        BILLING_FREQUENCIES
            .iter()
            .find(|entry| entry.multiplier == months)
            .map(|entry| entry.frequency)
            .ok_or_else(|| {
                BillingError::invalid_billing_frequency(format!(
                    "No billing frequency spans {} months",
                    months
                ))
            })
    }
}

impl std::fmt::Display for BillingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for BillingFrequency {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        BILLING_FREQUENCIES
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.frequency)
            .ok_or_else(|| {
                BillingError::invalid_billing_frequency(format!(
                    "Unknown billing frequency: {}",
                    s
                ))
            })
    }
}

impl TryFrom<&str> for BillingFrequency {
    type Error = BillingError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}
