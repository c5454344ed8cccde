//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use remittance_types::{
    AppError, CreateTransactionRequest, ErrorResponse, IssueType, TransactionDataClient,
    TransactionError, TransactionId,
};

use crate::TransactionService;

/// Application state shared across handlers.
pub struct AppState<C: TransactionDataClient> {
    pub service: TransactionService<C>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<TransactionError> for ApiError {
    fn from(err: TransactionError) -> Self {
        ApiError(AppError::Transaction(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.issue_type() {
            IssueType::NotFound => StatusCode::NOT_FOUND,
            IssueType::RequestError => StatusCode::BAD_REQUEST,
            IssueType::Conflict => StatusCode::UNPROCESSABLE_ENTITY,
            IssueType::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = ErrorResponse {
            code: self.0.code().to_string(),
            message: self.0.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

fn parse_transaction_id(id: &str) -> Result<TransactionId, ApiError> {
    id.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid transaction ID: {}", id)).into())
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Get transaction by ID.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn get_transaction<C: TransactionDataClient>(
    State(state): State<Arc<AppState<C>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction_id = parse_transaction_id(&id)?;

    let transaction = state.service.get_transaction(transaction_id).await?;
    Ok(Json(transaction))
}

/// Validate, price and persist a new transaction.
#[tracing::instrument(skip_all)]
pub async fn create_transaction<C: TransactionDataClient>(
    State(state): State<Arc<AppState<C>>>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let transaction = state.service.create_transaction(req).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Pay out a transaction.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn payout<C: TransactionDataClient>(
    State(state): State<Arc<AppState<C>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction_id = parse_transaction_id(&id)?;

    let transaction = state.service.change_status_payout(transaction_id).await?;
    Ok(Json(transaction))
}
