//! Result of a successful send call.

use crate::models::lenient;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const QUEUED_STATUS: &str = "queued";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: String,
    pub message_log_id: i64,
    pub conversation_category: String,
    pub cost: f64,
}

impl MessageResponse {
    /// Builds the response from the envelope's `data` object.
    ///
    /// Parsing is lenient: missing or mistyped fields default to zero or
    /// empty, and numeric strings such as `"42"` are accepted.
    pub fn from_data(data: &Value) -> Self {
        Self {
            status: lenient::string(data.get("status")),
            message_log_id: lenient::int(data.get("message_log_id")),
            conversation_category: lenient::string(data.get("conversation_category")),
            cost: lenient::float(data.get("cost")),
        }
    }

    /// Whether the API accepted the message for delivery.
    pub fn queued(&self) -> bool {
        self.status == QUEUED_STATUS
    }

    /// Plain mapping with the four wire fields.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("status".to_string(), Value::from(self.status.as_str()));
        map.insert("message_log_id".to_string(), Value::from(self.message_log_id));
        map.insert(
            "conversation_category".to_string(),
            Value::from(self.conversation_category.as_str()),
        );
        map.insert("cost".to_string(), Value::from(self.cost));
        map
    }
}
