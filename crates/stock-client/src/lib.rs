//! REST client for the stock management API
//!
//! The API is a plain JSON-over-HTTP surface with one collection per
//! resource:
//!
//! ```text
//! GET    /{resource}           list all records
//! GET    /{resource}/{id}      fetch one record
//! POST   /{resource}/search    list records matching a filter object
//! POST   /{resource}           create a record
//! PUT    /{resource}/{id}      replace a record
//! DELETE /{resource}/{id}      remove a record
//! ```
//!
//! [`StockApi`] is the untyped transport seam (JSON in, JSON out), so it can
//! be mocked in tests. [`Resource`] layers typed access on top of it.
//!
//! # Example
//!
//! ```rust,no_run
//! use stock_client::{HttpClient, Resource};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), stock_client::ApiError> {
//! let client = HttpClient::new("http://localhost:5000/api", Duration::from_secs(30))?;
//! let products: Vec<serde_json::Value> = Resource::new(&client, "product").list().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod filters;
pub mod http_client;
pub mod resource;

pub use client::StockApi;
pub use error::ApiError;
pub use filters::prune_filters;
pub use http_client::HttpClient;
pub use resource::Resource;
