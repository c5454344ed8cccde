//! # Remittance Client SDK
//!
//! A typed Rust client for the remittance API.

use remittance_types::{
    ClientId, CreateTransactionRequest, ErrorResponse, Transaction, TransactionId,
};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} {code} - {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Issue kind reported by the API, if the server answered with one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Remittance API client.
pub struct RemittanceClient {
    base_url: String,
    http: Client,
}

impl RemittanceClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Gets a transaction by ID.
    pub async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, ClientError> {
        self.get(&format!("/transactions/{}", id)).await
    }

    /// Creates a transaction; the server prices it and runs compliance.
    pub async fn create_transaction(
        &self,
        sending_principal: Decimal,
        payout_principal: Decimal,
        sender_id: ClientId,
        beneficiary_id: ClientId,
    ) -> Result<Transaction, ClientError> {
        let req = CreateTransactionRequest {
            sending_principal,
            payout_principal,
            sender_id,
            beneficiary_id,
        };
        self.post("/transactions", Some(&req)).await
    }

    /// Marks a transaction as paid out.
    pub async fn payout(&self, id: TransactionId) -> Result<Transaction, ClientError> {
        self.post::<_, ()>(&format!("/transactions/{}/payout", id), None)
            .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let mut req = self.http.post(format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let (code, message) = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err) => (err.code, err.message),
                Err(_) => ("UNKNOWN".to_string(), body),
            };
            Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
            })
        }
    }
}
