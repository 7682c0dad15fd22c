use super::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stock_store::Record;

/// A product held in stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<RecordId>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Record for Product {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
