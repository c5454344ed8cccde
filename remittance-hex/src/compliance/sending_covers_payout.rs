//! Sending principal must cover the payout, and both must be positive.

use rust_decimal::Decimal;

use remittance_types::{Transaction, TransactionError};

use super::TransactionValidator;

/// Rejects transactions that pay out more than they take in, or that carry
/// a zero or negative principal.
pub struct SendingCoversPayoutValidator;

#[async_trait::async_trait]
impl TransactionValidator for SendingCoversPayoutValidator {
    fn name(&self) -> &'static str {
        "sending_covers_payout"
    }

    async fn validate(&self, transaction: &Transaction) -> Result<(), TransactionError> {
        if transaction.sending_principal <= Decimal::ZERO
            || transaction.payout_principal <= Decimal::ZERO
        {
            return Err(TransactionError::NonPositivePrincipal {
                sending_principal: transaction.sending_principal,
                payout_principal: transaction.payout_principal,
            });
        }
        if transaction.sending_principal < transaction.payout_principal {
            return Err(TransactionError::SendingLessThanPayout {
                sending_principal: transaction.sending_principal,
                payout_principal: transaction.payout_principal,
            });
        }
        Ok(())
    }
}
