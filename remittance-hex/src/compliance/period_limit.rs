//! Cumulative sending cap over a rolling period.

use std::sync::Arc;

use rust_decimal::Decimal;

use remittance_types::{
    DataClientError, Transaction, TransactionDataClient, TransactionError, TransactionProperties,
};

use super::TransactionValidator;

/// Rejects a transaction that would take the sender's total over
/// `max_transaction_by_period` within the last `days_limit_by_period` days.
///
/// Reads the store before the create call writes, with no isolation in
/// between: concurrent requests from one sender can jointly exceed the cap.
pub struct SenderPeriodLimitValidator<C> {
    properties: Arc<TransactionProperties>,
    client: Arc<C>,
}

impl<C: TransactionDataClient> SenderPeriodLimitValidator<C> {
    pub fn new(properties: Arc<TransactionProperties>, client: Arc<C>) -> Self {
        Self { properties, client }
    }

    async fn total_sent_in_period(
        &self,
        transaction: &Transaction,
    ) -> Result<Decimal, TransactionError> {
        let days = self.properties.days_limit_by_period;
        let history = self
            .client
            .get_transactions_by_sender_within_period(transaction.sender_id, days)
            .await?;

        tracing::debug!(
            sender_id = %transaction.sender_id,
            days,
            count = history.len(),
            "Fetched sender history"
        );

        history
            .iter()
            .map(|t| t.sending_principal)
            .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
            .ok_or_else(|| overflow(transaction))
    }
}

fn overflow(transaction: &Transaction) -> TransactionError {
    TransactionError::DataService(DataClientError::Transport(format!(
        "Sender {} history total overflows",
        transaction.sender_id
    )))
}

#[async_trait::async_trait]
impl<C: TransactionDataClient> TransactionValidator for SenderPeriodLimitValidator<C> {
    fn name(&self) -> &'static str {
        "sender_period_limit"
    }

    async fn validate(&self, transaction: &Transaction) -> Result<(), TransactionError> {
        let total = self
            .total_sent_in_period(transaction)
            .await?
            .checked_add(transaction.sending_principal)
            .ok_or_else(|| overflow(transaction))?;

        if total > self.properties.max_transaction_by_period {
            return Err(TransactionError::ExceedsLimitInPeriod {
                max_amount: self.properties.max_transaction_by_period,
                days: self.properties.days_limit_by_period,
                total,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service_tests::tests::{MockDataClient, transaction};
    use rust_decimal_macros::dec;

    fn validator(client: MockDataClient) -> SenderPeriodLimitValidator<MockDataClient> {
        SenderPeriodLimitValidator::new(
            Arc::new(TransactionProperties {
                max_transaction_by_period: dec!(5000.0),
                days_limit_by_period: 30,
                ..Default::default()
            }),
            Arc::new(client),
        )
    }

    #[tokio::test]
    async fn test_total_below_limit_passes() {
        let client = MockDataClient::new().with_sent_in_period(3, &[dec!(2400), dec!(2400)]);

        assert!(
            validator(client)
                .validate(&transaction(dec!(100.0), dec!(98.0)))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_total_equal_to_limit_passes() {
        let client = MockDataClient::new().with_sent_in_period(3, &[dec!(2450), dec!(2450)]);

        assert!(
            validator(client)
                .validate(&transaction(dec!(100.0), dec!(98.0)))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_total_one_unit_over_limit_fails() {
        let client = MockDataClient::new().with_sent_in_period(3, &[dec!(2450), dec!(2451)]);

        let err = validator(client)
            .validate(&transaction(dec!(100.0), dec!(98.0)))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "CLIENT_EXCEED_LIMIT_TO_SEND_IN_PERIOD");
    }

    #[tokio::test]
    async fn test_message_reports_prospective_total() {
        let client = MockDataClient::new().with_sent_in_period(3, &[dec!(2499), dec!(2499)]);

        let err = validator(client)
            .validate(&transaction(dec!(100.0), dec!(98.0)))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Client cannot has more than 5,000$ in a given 30 days period. Now sender would has 5,098$"
        );
    }

    #[tokio::test]
    async fn test_other_senders_are_not_counted() {
        let client = MockDataClient::new().with_sent_in_period(9, &[dec!(4950)]);

        assert!(
            validator(client)
                .validate(&transaction(dec!(100.0), dec!(98.0)))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let client = MockDataClient::new()
            .failing_with(DataClientError::Transport("connection refused".into()));

        let err = validator(client)
            .validate(&transaction(dec!(100.0), dec!(98.0)))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TransactionError::DataService(DataClientError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_overflowing_history_is_a_data_service_error() {
        let client =
            MockDataClient::new().with_sent_in_period(3, &[Decimal::MAX, Decimal::MAX]);

        let err = validator(client)
            .validate(&transaction(dec!(100.0), dec!(98.0)))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "TRANSACTION_DATA_SERVICE_ERROR");
        assert!(matches!(
            err,
            TransactionError::DataService(DataClientError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_history_at_max_plus_new_amount_is_a_data_service_error() {
        let client = MockDataClient::new().with_sent_in_period(3, &[Decimal::MAX]);

        let err = validator(client)
            .validate(&transaction(dec!(100.0), dec!(98.0)))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "TRANSACTION_DATA_SERVICE_ERROR");
    }
}
