//! Transaction Application Service
//!
//! Orchestrates compliance, pricing and the status lifecycle through the
//! data-client port. Contains NO infrastructure logic.

use std::sync::Arc;

use remittance_types::{
    CreateTransactionRequest, DataClientError, Transaction, TransactionDataClient,
    TransactionError, TransactionId, TransactionProperties,
};

use crate::{ComplianceChain, Pricing};

/// Application service for transaction operations.
///
/// Generic over `C: TransactionDataClient` - the adapter is injected at
/// compile time. Holds no per-request state and is shared across requests.
pub struct TransactionService<C: TransactionDataClient> {
    client: Arc<C>,
    pricing: Pricing,
    compliance: ComplianceChain,
}

impl<C: TransactionDataClient> TransactionService<C> {
    /// Creates a service running the standard compliance chain.
    pub fn new(client: C, properties: TransactionProperties) -> Self {
        let client = Arc::new(client);
        let properties = Arc::new(properties);

        Self {
            pricing: Pricing::new(properties.clone()),
            compliance: ComplianceChain::standard(properties, client.clone()),
            client,
        }
    }

    /// Creates a service with a custom compliance chain.
    pub fn with_compliance(
        client: Arc<C>,
        pricing: Pricing,
        compliance: ComplianceChain,
    ) -> Self {
        Self {
            client,
            pricing,
            compliance,
        }
    }

    /// Returns a reference to the underlying data client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Gets a transaction by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_transaction(
        &self,
        id: TransactionId,
    ) -> Result<Transaction, TransactionError> {
        self.client
            .get_transaction(id)
            .await
            .map_err(|err| not_found_as(id, err))
    }

    /// Validates, prices and persists a new transaction.
    ///
    /// Returns the record stored by the transaction-data service.
    #[tracing::instrument(
        skip(self, request),
        fields(sender_id = %request.sender_id, sending = %request.sending_principal)
    )]
    pub async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, TransactionError> {
        let mut transaction = Transaction::from(request);

        self.compliance.check(&transaction).await?;
        self.pricing.set_calculated_fields(&mut transaction);

        let created = self.client.create_transaction(&transaction).await?;

        tracing::info!(
            transaction_id = ?created.transaction_id,
            fees = ?created.fees,
            "Transaction created"
        );
        Ok(created)
    }

    /// Moves a transaction from `NEW` to `PAY_OUT`.
    ///
    /// Not re-entrant: a transaction already paid out is rejected.
    #[tracing::instrument(skip(self))]
    pub async fn change_status_payout(
        &self,
        id: TransactionId,
    ) -> Result<Transaction, TransactionError> {
        let mut transaction = self.get_transaction(id).await?;

        transaction
            .mark_paid_out()
            .map_err(|_| TransactionError::AlreadyPaidOut { id })?;

        let paid = self
            .client
            .payout(id, &transaction)
            .await
            .map_err(|err| not_found_as(id, err))?;

        tracing::info!(transaction_id = %id, "Transaction paid out");
        Ok(paid)
    }
}

fn not_found_as(id: TransactionId, err: DataClientError) -> TransactionError {
    match err {
        DataClientError::NotFound => TransactionError::NotFound { id },
        other => TransactionError::DataService(other),
    }
}
