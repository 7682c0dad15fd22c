//! reqwest-based stock API client
//!
//! Direct implementation of the `StockApi` trait. Every request is logged at
//! debug level; non-success statuses are turned into `ApiError::Status`
//! with the server's error message when one can be found in the body.

use crate::client::StockApi;
use crate::error::ApiError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// HTTP client for the stock API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message: error_message(&body, status),
            });
        }

        Ok(response)
    }

    async fn read_json(url: &str, response: Response) -> Result<Value, ApiError> {
        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl StockApi for HttpClient {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.send(&url, self.client.get(&url)).await?;
        Self::read_json(&url, response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.send(&url, self.client.post(&url).json(body)).await?;
        Self::read_json(&url, response).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self.send(&url, self.client.put(&url).json(body)).await?;
        Self::read_json(&url, response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!("DELETE {}", url);
        self.send(&url, self.client.delete(&url)).await?;
        Ok(())
    }
}

/// Join a base URL and a relative path with exactly one slash
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Pick a human readable message out of an error response body
///
/// Looks for `message`, `title` or `error` in a JSON body, then falls back
/// to the raw text and finally to the status reason phrase.
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "title", "error"] {
            if let Some(Value::String(message)) = fields.get(key) {
                if !message.is_empty() {
                    return message.clone();
                }
            }
        }
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}
