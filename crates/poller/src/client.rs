//! Practicum homework-status API client.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use homework_common::error::BotError;

/// Source of homework-status updates.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch every status change since the Unix timestamp `since`.
    ///
    /// Returns the decoded body as-is; shape checks happen downstream.
    async fn get_status_update(&self, since: i64) -> Result<Value, BotError>;
}

/// HTTP client for the single homework-status endpoint.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, token)
    }

    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn get_status_update(&self, since: i64) -> Result<Value, BotError> {
        tracing::debug!(endpoint = %self.endpoint, from_date = since, "Requesting homework statuses");

        let resp = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", since)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Homework API request failed");
                BotError::RequestFailure(e)
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::error!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "Homework API endpoint unavailable"
            );
            return Err(BotError::UnexpectedStatus {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let text = resp.text().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read homework API response body");
            BotError::RequestFailure(e)
        })?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(error = %e, "Homework API response is not valid JSON");
            BotError::MalformedResponse(e)
        })
    }
}
