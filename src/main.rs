use std::fs;

use anyhow::{bail, Context};
use chrono::Utc;
use telebill::config::{Config, LogFormat};
use telebill::{InvoiceComposer, InvoiceDraft};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting Telebill billing engine");
    tracing::info!("Environment: {}", config.app.env);

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: telebill <invoice-draft.json>");
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read invoice draft {}", path))?;
    let draft: InvoiceDraft = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse invoice draft {}", path))?;

    let composer = InvoiceComposer::new()
        .with_default_tax_rate(config.billing.default_tax_rate_percent)
        .context("Invalid default tax rate")?;

    let totals = composer
        .compose(&draft, Utc::now())
        .context("Failed to compose invoice")?;

    tracing::info!(
        total = %totals.total,
        balance_due = %totals.balance_due,
        status = %totals.payment_status(),
        "Invoice composed"
    );

    let output = serde_json::json!({
        "totals": totals,
        "paymentStatus": totals.payment_status(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("telebill={}", config.logging.level).into());

    // Logs go to stderr so stdout stays machine-readable
    match config.logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
