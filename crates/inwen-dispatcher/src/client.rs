use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::error::LookupError;

/// Body POSTed to an explanation webhook
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub word: String,
    pub context: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// ISO 8601, UTC, millisecond precision
    pub timestamp: String,
}

impl WebhookPayload {
    pub fn now(
        word: impl Into<String>,
        context: impl Into<String>,
        source: impl Into<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            word: word.into(),
            context: context.into(),
            source: source.into(),
            language,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Clone, Default)]
pub struct WebhookClient {
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// POST `payload` as JSON and return the decoded response body
    pub async fn post(
        &self,
        endpoint: &Url,
        payload: &WebhookPayload,
        timeout: Duration,
    ) -> Result<Value, LookupError> {
        let response = self
            .client
            .post(endpoint.clone())
            .timeout(timeout)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Webhook responded with {}", status);
        if !status.is_success() {
            return Err(LookupError::http_status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Webhook body is not JSON ({} bytes): {}", body.len(), e);
            LookupError::MalformedResponse(format!("Response body is not JSON: {e}"))
        })
    }
}
