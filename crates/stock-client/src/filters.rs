//! Search filter preparation

use serde_json::{Map, Value};

/// Drop filter entries that carry no value
///
/// Before a search is sent, keys whose value is falsy (`null`, `""`,
/// `false` or `0`) are removed. Everything else is sent as-is, including
/// blank strings, empty arrays and empty objects.
pub fn prune_filters(filters: Map<String, Value>) -> Map<String, Value> {
    filters
        .into_iter()
        .filter(|(key, value)| {
            let keep = has_value(value);
            if !keep {
                log::trace!("Dropping empty filter '{}'", key);
            }
            keep
        })
        .collect()
}

fn has_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
