//! Minimum fee per transaction.

use std::sync::Arc;

use remittance_types::{Transaction, TransactionError, TransactionProperties};

use super::TransactionValidator;
use crate::Pricing;

/// Rejects transactions whose fee is below `min_fee`.
///
/// Uses the pure fee calculation; the transaction is not priced here.
pub struct FeeMinimumValidator {
    properties: Arc<TransactionProperties>,
    pricing: Pricing,
}

impl FeeMinimumValidator {
    pub fn new(properties: Arc<TransactionProperties>, pricing: Pricing) -> Self {
        Self {
            properties,
            pricing,
        }
    }
}

#[async_trait::async_trait]
impl TransactionValidator for FeeMinimumValidator {
    fn name(&self) -> &'static str {
        "fee_minimum"
    }

    async fn validate(&self, transaction: &Transaction) -> Result<(), TransactionError> {
        if self.pricing.calculate_fee(transaction) < self.properties.min_fee {
            return Err(TransactionError::MinFeeTooSmall {
                sending_principal: transaction.sending_principal,
                payout_principal: transaction.payout_principal,
                min_fee: self.properties.min_fee,
            });
        }
        Ok(())
    }
}
