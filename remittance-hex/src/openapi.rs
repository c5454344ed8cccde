//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use remittance_types::domain::{ClientId, Transaction, TransactionId, TransactionStatus};
use remittance_types::dto::{CreateTransactionRequest, ErrorResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Get a transaction by ID
#[utoipa::path(
    get,
    path = "/transactions/{id}",
    tag = "transactions",
    params(
        ("id" = i64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction found", body = Transaction),
        (status = 400, description = "Malformed transaction ID", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Transaction data service failure", body = ErrorResponse)
    )
)]
async fn get_transaction() {}

/// Create a transaction
///
/// Runs the compliance checks in order (amount limit, sending covers payout,
/// minimum fee, rolling-period limit, open transactions), prices the
/// transaction and persists it with status `NEW`.
#[utoipa::path(
    post,
    path = "/transactions",
    tag = "transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction created", body = Transaction),
        (status = 400, description = "Compliance check failed or malformed body", body = ErrorResponse),
        (status = 500, description = "Transaction data service failure", body = ErrorResponse)
    )
)]
async fn create_transaction() {}

/// Pay out a transaction
#[utoipa::path(
    post,
    path = "/transactions/{id}/payout",
    tag = "transactions",
    params(
        ("id" = i64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction paid out", body = Transaction),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 422, description = "Transaction was already paid out", body = ErrorResponse),
        (status = 500, description = "Transaction data service failure", body = ErrorResponse)
    )
)]
async fn payout() {}

/// OpenAPI documentation for the Remittance API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Remittance Transaction Service API",
        version = "1.0.0",
        description = "Validates, prices and pays out money-transfer transactions. Persistence is delegated to the transaction-data service.",
        license(name = "MIT"),
    ),
    paths(health, get_transaction, create_transaction, payout),
    components(
        schemas(
            Transaction,
            TransactionId,
            TransactionStatus,
            ClientId,
            CreateTransactionRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "transactions", description = "Transaction creation and payout"),
    )
)]
pub struct ApiDoc;
