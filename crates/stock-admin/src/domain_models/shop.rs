use super::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stock_store::Record;

/// A physical store (shop) stock is held at
///
/// Served by the API under `/store`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Record for Shop {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
