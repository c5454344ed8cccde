//! Domain models for the remittance service.

pub mod money;
pub mod transaction;

pub use money::Grouped;
pub use transaction::{ClientId, Transaction, TransactionId, TransactionStatus};
