use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use homework_common::config::AppConfig;
use homework_common::error::CycleError;

/// HTTP client for the homework statuses endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    authorization: String,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: &str, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
            authorization: format!("OAuth {token}"),
        })
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Self::new(
            config.practicum_endpoint.clone(),
            &config.practicum_token,
            config.http_timeout,
        )
    }

    /// Fetch homework statuses updated since `from_date` (unix seconds).
    pub async fn get_api_answer(&self, from_date: i64) -> Result<Value, CycleError> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let resp = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| CycleError::ApiCall(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(CycleError::UnexpectedStatus(status.as_u16()));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| CycleError::ApiCall(format!("invalid JSON body: {e}")))
    }
}
