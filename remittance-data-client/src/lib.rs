//! # Remittance Data Client
//!
//! HTTP adapter implementing the `TransactionDataClient` port against the
//! remote transaction-data service.
//!
//! | Operation | Request |
//! |---|---|
//! | get | `GET /transactions/{id}` |
//! | create | `POST /transactions` |
//! | open by sender | `GET /transactions?senderId={id}&status={STATUS}` |
//! | sender history | `GET /transactions?senderId={id}&days={n}` |
//! | payout | `PUT /transactions/{id}/payout` |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use remittance_types::{
    ClientId, DataClientError, Transaction, TransactionDataClient, TransactionId,
    TransactionStatus,
};

/// Build a data client for the service at `base_url`.
///
/// Every request is bounded by `timeout`.
pub fn build_data_client(
    base_url: &str,
    timeout: Duration,
) -> anyhow::Result<HttpTransactionDataClient> {
    let http = Client::builder().timeout(timeout).build()?;
    Ok(HttpTransactionDataClient::with_client(base_url, http))
}

/// reqwest-backed transaction-data client.
#[derive(Debug, Clone)]
pub struct HttpTransactionDataClient {
    base_url: String,
    http: Client,
}

impl HttpTransactionDataClient {
    /// Creates a client with default reqwest settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Creates a client reusing an existing reqwest client.
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Base URL of the transaction-data service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, DataClientError> {
        let resp = req
            .send()
            .await
            .map_err(|e| DataClientError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DataClientError::Transport(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| {
                DataClientError::Transport(format!("Invalid response body: {}", e))
            });
        }

        tracing::debug!(status = status.as_u16(), "Transaction data service returned an error");
        Err(match status {
            StatusCode::NOT_FOUND => DataClientError::NotFound,
            StatusCode::BAD_REQUEST => DataClientError::BadRequest(body),
            _ => DataClientError::Server {
                status: status.as_u16(),
                message: body,
            },
        })
    }
}

#[async_trait]
impl TransactionDataClient for HttpTransactionDataClient {
    #[tracing::instrument(skip(self))]
    async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, DataClientError> {
        self.send(self.http.get(self.url(&format!("/transactions/{}", id))))
            .await
    }

    #[tracing::instrument(skip_all, fields(sender_id = %transaction.sender_id))]
    async fn create_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Transaction, DataClientError> {
        self.send(self.http.post(self.url("/transactions")).json(transaction))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_open_transactions_by_sender(
        &self,
        sender_id: ClientId,
        status: TransactionStatus,
    ) -> Result<Vec<Transaction>, DataClientError> {
        let req = self.http.get(self.url("/transactions")).query(&[
            ("senderId", sender_id.to_string()),
            ("status", status.as_str().to_string()),
        ]);
        self.send(req).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_transactions_by_sender_within_period(
        &self,
        sender_id: ClientId,
        days: u32,
    ) -> Result<Vec<Transaction>, DataClientError> {
        let req = self
            .http
            .get(self.url("/transactions"))
            .query(&[("senderId", sender_id.to_string()), ("days", days.to_string())]);
        self.send(req).await
    }

    #[tracing::instrument(skip(self, transaction))]
    async fn payout(
        &self,
        id: TransactionId,
        transaction: &Transaction,
    ) -> Result<Transaction, DataClientError> {
        let req = self
            .http
            .put(self.url(&format!("/transactions/{}/payout", id)))
            .json(transaction);
        self.send(req).await
    }
}
