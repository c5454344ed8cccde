//! Compliance checks run before a transaction is priced and persisted.
//!
//! Validators run in the order they appear in the chain and the first
//! failure aborts the request. Cheap local checks come first; checks that
//! query the transaction-data store come last.

mod amount_limit;
mod fee_minimum;
mod open_transactions;
mod period_limit;
mod sending_covers_payout;

use std::sync::Arc;

use remittance_types::{
    Transaction, TransactionDataClient, TransactionError, TransactionProperties,
};

use crate::Pricing;

pub use amount_limit::AmountLimitValidator;
pub use fee_minimum::FeeMinimumValidator;
pub use open_transactions::OpenTransactionsValidator;
pub use period_limit::SenderPeriodLimitValidator;
pub use sending_covers_payout::SendingCoversPayoutValidator;

/// A single business rule a new transaction must satisfy.
#[async_trait::async_trait]
pub trait TransactionValidator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the rule's issue when the transaction breaks it.
    async fn validate(&self, transaction: &Transaction) -> Result<(), TransactionError>;
}

/// Ordered list of validators.
pub struct ComplianceChain {
    validators: Vec<Box<dyn TransactionValidator>>,
}

impl ComplianceChain {
    /// Creates a chain that runs `validators` in the given order.
    pub fn new(validators: Vec<Box<dyn TransactionValidator>>) -> Self {
        Self { validators }
    }

    /// The production chain.
    pub fn standard<C: TransactionDataClient>(
        properties: Arc<TransactionProperties>,
        client: Arc<C>,
    ) -> Self {
        let pricing = Pricing::new(properties.clone());

        Self::new(vec![
            Box::new(AmountLimitValidator::new(properties.clone())),
            Box::new(SendingCoversPayoutValidator),
            Box::new(FeeMinimumValidator::new(properties.clone(), pricing)),
            Box::new(SenderPeriodLimitValidator::new(
                properties.clone(),
                client.clone(),
            )),
            Box::new(OpenTransactionsValidator::new(properties, client)),
        ])
    }

    /// Validator names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Runs every validator in order, stopping at the first failure.
    pub async fn check(&self, transaction: &Transaction) -> Result<(), TransactionError> {
        for validator in &self.validators {
            if let Err(err) = validator.validate(transaction).await {
                tracing::warn!(
                    validator = validator.name(),
                    code = err.code(),
                    sender_id = %transaction.sender_id,
                    "Transaction rejected: {}",
                    err
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service_tests::tests::{MockDataClient, transaction};
    use rust_decimal_macros::dec;

    fn standard_chain(client: MockDataClient) -> (ComplianceChain, Arc<MockDataClient>) {
        let client = Arc::new(client);
        let chain = ComplianceChain::standard(
            Arc::new(TransactionProperties::default()),
            client.clone(),
        );
        (chain, client)
    }

    #[test]
    fn test_standard_order() {
        let (chain, _) = standard_chain(MockDataClient::new());

        assert_eq!(
            chain.names(),
            vec![
                "amount_limit",
                "sending_covers_payout",
                "fee_minimum",
                "sender_period_limit",
                "open_transactions",
            ]
        );
    }

    #[tokio::test]
    async fn test_valid_transaction_passes_every_check() {
        let (chain, client) = standard_chain(MockDataClient::new());

        chain
            .check(&transaction(dec!(100.0), dec!(98.0)))
            .await
            .unwrap();

        assert_eq!(client.query_calls(), 2);
    }

    #[tokio::test]
    async fn test_local_failure_skips_remote_checks() {
        let client = MockDataClient::new().with_open_transactions(3, 5);
        let (chain, client) = standard_chain(client);

        let err = chain
            .check(&transaction(dec!(3001.0), dec!(2990.0)))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "TRANSACTION_EXCEEDS_SENDING_LIMIT");
        assert_eq!(client.query_calls(), 0);
    }

    #[tokio::test]
    async fn test_period_limit_runs_before_open_transactions() {
        let client = MockDataClient::new()
            .with_open_transactions(3, 5)
            .with_sent_in_period(3, &[dec!(4950)]);
        let (chain, _) = standard_chain(client);

        let err = chain
            .check(&transaction(dec!(100.0), dec!(98.0)))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "CLIENT_EXCEED_LIMIT_TO_SEND_IN_PERIOD");
    }

    #[tokio::test]
    async fn test_empty_chain_accepts_anything() {
        let chain = ComplianceChain::new(Vec::new());

        assert!(
            chain
                .check(&transaction(dec!(1.0), dec!(5.0)))
                .await
                .is_ok()
        );
    }
}
