//! Platform health as reported by `GET /api/health`.

use crate::models::lenient;

use serde::Serialize;
use serde_json::{Map, Value};

const APP_KEY: &str = "app";
const DATABASE_KEY: &str = "database";
const CACHE_KEY: &str = "cache";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HealthChecks {
    pub app: bool,
    pub database: bool,
    pub cache: bool,
    /// Checks beyond the three known ones, kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: HealthChecks,
    pub timestamp: String,
    /// Top-level keys beyond `status`, `checks` and `timestamp`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthChecks {
    fn from_value(checks: Option<&Value>) -> Self {
        let mut extra = match checks {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };

        Self {
            app: lenient::boolean(extra.remove(APP_KEY).as_ref()),
            database: lenient::boolean(extra.remove(DATABASE_KEY).as_ref()),
            cache: lenient::boolean(extra.remove(CACHE_KEY).as_ref()),
            extra,
        }
    }
}

impl HealthStatus {
    /// Reads each field on its own, so one mistyped value never blanks the rest.
    pub fn from_data(data: Value) -> Self {
        let mut extra = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Self {
            status: lenient::string(extra.remove("status").as_ref()),
            checks: HealthChecks::from_value(extra.remove("checks").as_ref()),
            timestamp: lenient::string(extra.remove("timestamp").as_ref()),
            extra,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.app && self.checks.database && self.checks.cache
    }
}
