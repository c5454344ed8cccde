//! # Remittance Hex
//!
//! Business-rule pipeline, application service and HTTP adapter for the
//! remittance service.
//!
//! ## Architecture
//!
//! - `pricing/` - Fee and commission calculation
//! - `compliance/` - Ordered chain of transaction validators
//! - `service/` - Application service (validation, pricing, lifecycle)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `C: TransactionDataClient`, allowing
//! different data-store adapters to be injected.

pub mod compliance;
pub mod inbound;
pub mod openapi;
pub mod pricing;
pub mod service;


pub use compliance::{ComplianceChain, TransactionValidator};
pub use pricing::Pricing;
pub use service::TransactionService;
