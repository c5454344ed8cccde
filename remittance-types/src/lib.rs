//! # Remittance Types
//!
//! Domain types and port traits for the remittance transaction service.
//! This crate has ZERO IO dependencies - only data structures,
//! configuration, error taxonomy, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Transaction, status, identifiers, amounts)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Business issues, data-client and application errors
//! - `properties/` - Tunable compliance and pricing thresholds

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;
pub mod properties;

// Re-export commonly used types
pub use domain::{ClientId, Grouped, Transaction, TransactionId, TransactionStatus};
pub use dto::*;
pub use error::{
    AppError, ConfigError, DataClientError, IssueType, StatusTransitionError, TransactionError,
};
pub use ports::TransactionDataClient;
pub use properties::TransactionProperties;
