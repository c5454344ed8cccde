//! Tunable thresholds for compliance and pricing.
//!
//! Built once at startup and shared read-only by every validator and by
//! pricing.

use rust_decimal::Decimal;

use crate::error::ConfigError;

/// Compliance and pricing configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionProperties {
    /// Largest sending principal accepted in a single transaction
    pub max_transaction_value: Decimal,
    /// Smallest fee (sending minus payout) accepted
    pub min_fee: Decimal,
    /// Number of `NEW` transactions a sender may hold at once
    pub max_open_transactions: usize,
    /// Largest cumulative sending principal per sender within the period
    pub max_transaction_by_period: Decimal,
    /// Length of the rolling period, in days
    pub days_limit_by_period: u32,
    /// Ratio of the fees allocated to the agent, in `[0, 1]`
    pub agent_commission: Decimal,
}

impl Default for TransactionProperties {
    fn default() -> Self {
        Self {
            max_transaction_value: Decimal::new(3000, 0),
            min_fee: Decimal::ONE,
            max_open_transactions: 5,
            max_transaction_by_period: Decimal::new(5000, 0),
            days_limit_by_period: 30,
            agent_commission: Decimal::new(2, 1),
        }
    }
}

impl TransactionProperties {
    /// Checks the thresholds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("max_transaction_value", self.max_transaction_value)?;
        non_negative("min_fee", self.min_fee)?;
        non_negative("max_transaction_by_period", self.max_transaction_by_period)?;

        if self.days_limit_by_period == 0 {
            return Err(ConfigError::InvalidProperty {
                name: "days_limit_by_period",
                reason: "must be at least one day".into(),
            });
        }

        if self.agent_commission < Decimal::ZERO || self.agent_commission > Decimal::ONE {
            return Err(ConfigError::InvalidProperty {
                name: "agent_commission",
                reason: format!("{} is outside [0, 1]", self.agent_commission),
            });
        }

        Ok(())
    }
}

fn non_negative(name: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ConfigError::InvalidProperty {
            name,
            reason: format!("{} is negative", value),
        });
    }
    Ok(())
}
