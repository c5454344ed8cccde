//! Single-transaction amount cap.

use std::sync::Arc;

use remittance_types::{Transaction, TransactionError, TransactionProperties};

use super::TransactionValidator;

/// Rejects a sending principal above `max_transaction_value`.
pub struct AmountLimitValidator {
    properties: Arc<TransactionProperties>,
}

impl AmountLimitValidator {
    pub fn new(properties: Arc<TransactionProperties>) -> Self {
        Self { properties }
    }
}

#[async_trait::async_trait]
impl TransactionValidator for AmountLimitValidator {
    fn name(&self) -> &'static str {
        "amount_limit"
    }

    async fn validate(&self, transaction: &Transaction) -> Result<(), TransactionError> {
        if transaction.sending_principal > self.properties.max_transaction_value {
            return Err(TransactionError::ExceedsSendingLimit {
                sending_principal: transaction.sending_principal,
            });
        }
        Ok(())
    }
}
