//! Transport trait for the stock API
//!
//! `StockApi` speaks untyped JSON so that one object-safe trait covers every
//! resource. Implementations can hit the network ([`HttpClient`]) or serve
//! canned responses in tests.
//!
//! [`HttpClient`]: crate::HttpClient

use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Stock API transport
///
/// Paths are relative to the API base URL, e.g. `product` or
/// `product/search`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so effects can share one client
/// across async tasks.
#[async_trait]
pub trait StockApi: Send + Sync {
    /// `GET {path}`
    async fn get(&self, path: &str) -> Result<Value, ApiError>;

    /// `POST {path}` with a JSON body
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// `PUT {path}` with a JSON body
    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// `DELETE {path}`; any response body is discarded
    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}
