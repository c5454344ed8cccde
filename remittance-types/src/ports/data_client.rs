//! Transaction-data store port.
//!
//! The store owns persistence; this service only reads from it and asks it
//! to write. The HTTP adapter lives in `remittance-data-client`.

use crate::domain::{ClientId, Transaction, TransactionId, TransactionStatus};
use crate::error::DataClientError;

/// The port through which the service reaches the transaction-data store.
///
/// The store offers no compare-and-set primitive: a read followed by a
/// create is not isolated from concurrent requests.
#[async_trait::async_trait]
pub trait TransactionDataClient: Send + Sync + 'static {
    /// Gets a transaction by ID.
    async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, DataClientError>;

    /// Persists a priced transaction; the store assigns its id.
    async fn create_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Transaction, DataClientError>;

    /// Lists the sender's transactions currently in `status`.
    async fn get_open_transactions_by_sender(
        &self,
        sender_id: ClientId,
        status: TransactionStatus,
    ) -> Result<Vec<Transaction>, DataClientError>;

    /// Lists the sender's transactions created within the last `days` days.
    async fn get_transactions_by_sender_within_period(
        &self,
        sender_id: ClientId,
        days: u32,
    ) -> Result<Vec<Transaction>, DataClientError>;

    /// Stores the paid-out state of a transaction.
    async fn payout(
        &self,
        id: TransactionId,
        transaction: &Transaction,
    ) -> Result<Transaction, DataClientError>;
}
