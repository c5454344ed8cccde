//! Configuration loading from environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use remittance_types::TransactionProperties;
use rust_decimal::Decimal;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub data_service_url: String,
    pub data_service_timeout: Duration,
    pub properties: TransactionProperties,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// every optional key.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = parse_or(&lookup, "PORT", 3000)?;

        let data_service_url = lookup("TRANSACTION_DATA_SERVICE_URL").ok_or_else(|| {
            anyhow::anyhow!("TRANSACTION_DATA_SERVICE_URL environment variable is required")
        })?;

        let timeout_secs: u64 = parse_or(&lookup, "TRANSACTION_DATA_SERVICE_TIMEOUT_SECS", 10)?;

        let defaults = TransactionProperties::default();
        let properties = TransactionProperties {
            max_transaction_value: parse_or(
                &lookup,
                "TRANSACTION_MAX_TRANSACTION_VALUE",
                defaults.max_transaction_value,
            )?,
            min_fee: parse_or(&lookup, "TRANSACTION_MIN_FEE", defaults.min_fee)?,
            max_open_transactions: parse_or(
                &lookup,
                "TRANSACTION_MAX_OPEN_TRANSACTIONS",
                defaults.max_open_transactions,
            )?,
            max_transaction_by_period: parse_or(
                &lookup,
                "TRANSACTION_MAX_TRANSACTION_BY_PERIOD",
                defaults.max_transaction_by_period,
            )?,
            days_limit_by_period: parse_or(
                &lookup,
                "TRANSACTION_DAYS_LIMIT_BY_PERIOD",
                defaults.days_limit_by_period,
            )?,
            agent_commission: parse_or::<Decimal>(
                &lookup,
                "TRANSACTION_AGENT_COMMISSION",
                defaults.agent_commission,
            )?,
        };
        properties.validate()?;

        Ok(Self {
            port,
            data_service_url,
            data_service_timeout: Duration::from_secs(timeout_secs),
            properties,
        })
    }
}

fn parse_or<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        None => Ok(default),
    }
}
