//! Error types for the remittance service.

use rust_decimal::Decimal;

use crate::domain::{Grouped, TransactionId, TransactionStatus};

/// Category a business issue is surfaced as.
///
/// The inbound adapter turns this into a transport status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    NotFound,
    RequestError,
    Conflict,
    ServerError,
}

/// Data-client errors (failures reported by the transaction-data store).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataClientError {
    #[error("Entity not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Rejected lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Cannot move transaction from {from} to {to}")]
pub struct StatusTransitionError {
    pub from: TransactionStatus,
    pub to: TransactionStatus,
}

/// Business-rule failures raised by the transaction pipeline.
///
/// Each variant carries the parameters of its message template.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionError {
    #[error("Transaction with id {id} could be not found.")]
    NotFound { id: TransactionId },

    #[error(
        "Sending principal amount: {} exceeds limit in single operation.",
        Grouped(.sending_principal)
    )]
    ExceedsSendingLimit { sending_principal: Decimal },

    #[error(
        "Sending principal ({}) cannot be less than payout principal ({}).",
        Grouped(.sending_principal),
        Grouped(.payout_principal)
    )]
    SendingLessThanPayout {
        sending_principal: Decimal,
        payout_principal: Decimal,
    },

    #[error(
        "Sending ({}) and payout ({}) principals must be greater than zero.",
        Grouped(.sending_principal),
        Grouped(.payout_principal)
    )]
    NonPositivePrincipal {
        sending_principal: Decimal,
        payout_principal: Decimal,
    },

    #[error(
        "The difference between sending ({}) and payout ({}) must be at least {}$",
        Grouped(.sending_principal),
        Grouped(.payout_principal),
        Grouped(.min_fee)
    )]
    MinFeeTooSmall {
        sending_principal: Decimal,
        payout_principal: Decimal,
        min_fee: Decimal,
    },

    #[error(
        "Client cannot has more than {}$ in a given {days} days period. Now sender would has {}$",
        Grouped(.max_amount),
        Grouped(.total)
    )]
    ExceedsLimitInPeriod {
        max_amount: Decimal,
        days: u32,
        total: Decimal,
    },

    #[error("Client cannot has more than {max_open} transactions in progress")]
    ExceedsOpenTransactions { max_open: usize },

    #[error("Transaction with id {id} was already payout.")]
    AlreadyPaidOut { id: TransactionId },

    #[error("Transaction data service error: {0}")]
    DataService(#[from] DataClientError),
}

impl TransactionError {
    /// Stable machine-readable kind of the issue.
    pub fn code(&self) -> &'static str {
        match self {
            TransactionError::NotFound { .. } => "TRANSACTION_NOT_FOUND",
            TransactionError::ExceedsSendingLimit { .. } => "TRANSACTION_EXCEEDS_SENDING_LIMIT",
            TransactionError::SendingLessThanPayout { .. } => {
                "TRANSACTION_SENDING_IS_LESS_THAN_PAYOUT"
            }
            TransactionError::NonPositivePrincipal { .. } => "TRANSACTION_PRINCIPAL_NOT_POSITIVE",
            TransactionError::MinFeeTooSmall { .. } => "MIN_FEE_IS_TOO_SMALL",
            TransactionError::ExceedsLimitInPeriod { .. } => "CLIENT_EXCEED_LIMIT_TO_SEND_IN_PERIOD",
            TransactionError::ExceedsOpenTransactions { .. } => {
                "CLIENT_EXCEED_LIMIT_OPEN_TRANSACTIONS"
            }
            TransactionError::AlreadyPaidOut { .. } => "TRANSACTION_WAS_PAYOUT",
            TransactionError::DataService(_) => "TRANSACTION_DATA_SERVICE_ERROR",
        }
    }

    /// Category the issue is surfaced as.
    pub fn issue_type(&self) -> IssueType {
        match self {
            TransactionError::NotFound { .. } => IssueType::NotFound,
            TransactionError::AlreadyPaidOut { .. } => IssueType::Conflict,
            TransactionError::DataService(_) => IssueType::ServerError,
            _ => IssueType::RequestError,
        }
    }
}

/// Invalid startup configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidProperty { name: &'static str, reason: String },
}

/// Application-level errors (for HTTP responses).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Transaction(err) => err.code(),
        }
    }

    pub fn issue_type(&self) -> IssueType {
        match self {
            AppError::BadRequest(_) => IssueType::RequestError,
            AppError::Transaction(err) => err.issue_type(),
        }
    }
}

impl From<DataClientError> for AppError {
    fn from(err: DataClientError) -> Self {
        AppError::Transaction(err.into())
    }
}
