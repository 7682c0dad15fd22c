use super::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stock_store::Record;

/// Category a product belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub id: RecordId,
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Record for ProductType {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
