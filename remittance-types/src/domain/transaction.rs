//! Transaction domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StatusTransitionError;

/// Identifier assigned to a Transaction by the transaction-data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Creates a TransactionId from a raw store identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Identifier of a sender or beneficiary held by an external client registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ClientId(i64);

impl ClientId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a transaction.
///
/// The only legal transition is `NEW -> PAY_OUT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Priced and persisted, waiting to be paid out
    New,
    /// Disbursed to the beneficiary
    PayOut,
}

impl TransactionStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::New => "NEW",
            TransactionStatus::PayOut => "PAY_OUT",
        }
    }

    /// Returns true if moving from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: TransactionStatus) -> bool {
        matches!(
            (self, next),
            (TransactionStatus::New, TransactionStatus::PayOut)
        )
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A money transfer between a sender and a beneficiary.
///
/// `fees`, `commission`, `agent_commission` and `status` are derived by
/// pricing and stay `None` until then. `transaction_id` is assigned by the
/// transaction-data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Store-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<TransactionId>,
    /// Amount paid in by the sender
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 100.0)]
    pub sending_principal: Decimal,
    /// Amount disbursed to the beneficiary
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(example = 98.0)]
    pub payout_principal: Decimal,
    /// Sending minus payout principal
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = 2.0)]
    pub fees: Option<Decimal>,
    /// Share of the fees kept by the service
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = 1.6)]
    pub commission: Option<Decimal>,
    /// Share of the fees allocated to the originating agent
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = 0.4)]
    pub agent_commission: Option<Decimal>,
    pub sender_id: ClientId,
    pub beneficiary_id: ClientId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
}

impl Transaction {
    /// Creates an unpriced, unpersisted transaction.
    pub fn new(
        sending_principal: Decimal,
        payout_principal: Decimal,
        sender_id: ClientId,
        beneficiary_id: ClientId,
    ) -> Self {
        Self {
            transaction_id: None,
            sending_principal,
            payout_principal,
            fees: None,
            commission: None,
            agent_commission: None,
            sender_id,
            beneficiary_id,
            status: None,
        }
    }

    /// Returns true once the transaction reached `PAY_OUT`.
    pub fn is_paid_out(&self) -> bool {
        self.status == Some(TransactionStatus::PayOut)
    }

    /// Advances the transaction to `PAY_OUT`.
    ///
    /// A record without a status is treated as `NEW`.
    pub fn mark_paid_out(&mut self) -> Result<(), StatusTransitionError> {
        let current = self.status.unwrap_or(TransactionStatus::New);
        if !current.can_transition_to(TransactionStatus::PayOut) {
            return Err(StatusTransitionError {
                from: current,
                to: TransactionStatus::PayOut,
            });
        }
        self.status = Some(TransactionStatus::PayOut);
        Ok(())
    }
}
