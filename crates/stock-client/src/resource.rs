//! Typed access to one API resource

use crate::client::StockApi;
use crate::error::ApiError;
use crate::filters::prune_filters;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Display;

/// A single REST resource (e.g. `product`) on top of a [`StockApi`]
///
/// Decodes responses into the caller's record type.
pub struct Resource<'a> {
    api: &'a dyn StockApi,
    path: &'a str,
}

impl<'a> Resource<'a> {
    pub fn new(api: &'a dyn StockApi, path: &'a str) -> Self {
        Self { api, path }
    }

    /// `GET /{resource}`
    pub async fn list<R: DeserializeOwned>(&self) -> Result<Vec<R>, ApiError> {
        let body = self.api.get(self.path).await?;
        self.decode(body)
    }

    /// `GET /{resource}/{id}`
    pub async fn get<R: DeserializeOwned>(&self, id: impl Display) -> Result<R, ApiError> {
        let body = self.api.get(&self.item_path(id)).await?;
        self.decode(body)
    }

    /// `POST /{resource}/search` with empty filters pruned
    pub async fn search<R: DeserializeOwned>(
        &self,
        filters: Map<String, Value>,
    ) -> Result<Vec<R>, ApiError> {
        let body = Value::Object(prune_filters(filters));
        let response = self
            .api
            .post(&format!("{}/search", self.path), &body)
            .await?;
        self.decode(response)
    }

    /// `POST /{resource}`, returning the record as stored by the server
    pub async fn create<R: Serialize + DeserializeOwned>(&self, record: &R) -> Result<R, ApiError> {
        let body = serde_json::to_value(record).map_err(ApiError::Encode)?;
        let response = self.api.post(self.path, &body).await?;
        self.decode_or(response, record)
    }

    /// `PUT /{resource}/{id}`, returning the record as stored by the server
    pub async fn update<R: Serialize + DeserializeOwned>(
        &self,
        id: impl Display,
        record: &R,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(record).map_err(ApiError::Encode)?;
        let response = self.api.put(&self.item_path(id), &body).await?;
        self.decode_or(response, record)
    }

    /// `DELETE /{resource}/{id}`
    pub async fn remove(&self, id: impl Display) -> Result<(), ApiError> {
        self.api.delete(&self.item_path(id)).await
    }

    fn item_path(&self, id: impl Display) -> String {
        format!("{}/{}", self.path, id)
    }

    fn decode<R: DeserializeOwned>(&self, body: Value) -> Result<R, ApiError> {
        serde_json::from_value(body).map_err(|source| ApiError::Decode {
            url: self.path.to_string(),
            source,
        })
    }

    /// Servers answering a write with `204 No Content` echo nothing back;
    /// the submitted record is then the stored one.
    fn decode_or<R: Serialize + DeserializeOwned>(
        &self,
        body: Value,
        submitted: &R,
    ) -> Result<R, ApiError> {
        if body.is_null() {
            let echo = serde_json::to_value(submitted).map_err(ApiError::Encode)?;
            return self.decode(echo);
        }
        self.decode(body)
    }
}
