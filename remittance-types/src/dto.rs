//! Data Transfer Objects (DTOs) for requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ClientId, Transaction};

/// Request to create a new transaction.
///
/// Only caller-supplied fields; fees, commissions and status are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Amount paid in by the sender
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 100.0)]
    pub sending_principal: Decimal,
    /// Amount disbursed to the beneficiary
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 98.0)]
    pub payout_principal: Decimal,
    #[schema(example = 3)]
    pub sender_id: ClientId,
    #[schema(example = 4)]
    pub beneficiary_id: ClientId,
}

impl From<CreateTransactionRequest> for Transaction {
    fn from(req: CreateTransactionRequest) -> Self {
        Transaction::new(
            req.sending_principal,
            req.payout_principal,
            req.sender_id,
            req.beneficiary_id,
        )
    }
}

/// Error body returned by the HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Issue kind
    #[schema(example = "TRANSACTION_NOT_FOUND")]
    pub code: String,
    /// Rendered message
    #[schema(example = "Transaction with id 55 could be not found.")]
    pub message: String,
    /// HTTP status code
    #[schema(example = 404)]
    pub status: u16,
}
