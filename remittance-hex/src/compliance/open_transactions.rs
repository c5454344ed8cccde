//! Cap on transactions still waiting for payout.

use std::sync::Arc;

use remittance_types::{
    Transaction, TransactionDataClient, TransactionError, TransactionProperties,
    TransactionStatus,
};

use super::TransactionValidator;

/// Rejects a transaction when the sender already holds
/// `max_open_transactions` transactions in `NEW`.
///
/// Same check-then-act gap as the period limit: the count is read before
/// the create call and is not re-checked.
pub struct OpenTransactionsValidator<C> {
    properties: Arc<TransactionProperties>,
    client: Arc<C>,
}

impl<C: TransactionDataClient> OpenTransactionsValidator<C> {
    pub fn new(properties: Arc<TransactionProperties>, client: Arc<C>) -> Self {
        Self { properties, client }
    }
}

#[async_trait::async_trait]
impl<C: TransactionDataClient> TransactionValidator for OpenTransactionsValidator<C> {
    fn name(&self) -> &'static str {
        "open_transactions"
    }

    async fn validate(&self, transaction: &Transaction) -> Result<(), TransactionError> {
        let open = self
            .client
            .get_open_transactions_by_sender(transaction.sender_id, TransactionStatus::New)
            .await?;

        if open.len() >= self.properties.max_open_transactions {
            return Err(TransactionError::ExceedsOpenTransactions {
                max_open: self.properties.max_open_transactions,
            });
        }
        Ok(())
    }
}
