use super::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stock_store::Record;

/// Supplier products are bought from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Record for Provider {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
