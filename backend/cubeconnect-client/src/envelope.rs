//! Response envelope: `{ "data": {...}, "error": {...} }`, both optional.

use serde_json::{Map, Value};

pub(crate) const DATA_KEY: &str = "data";
pub(crate) const ERROR_KEY: &str = "error";

/// A body that is not JSON reads as an empty envelope.
pub(crate) fn parse(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

pub(crate) fn field<'a>(envelope: &'a Value, key: &str) -> Option<&'a Value> {
    envelope.get(key).filter(|v| !v.is_null())
}

/// `data`, or an empty mapping when absent.
pub(crate) fn data(envelope: &Value) -> Value {
    field(envelope, DATA_KEY)
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}
