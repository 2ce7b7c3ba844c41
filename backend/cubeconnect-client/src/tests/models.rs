// Unit tests for response models
// Success bodies are parsed leniently: missing fields default, never fail

use crate::models::{HealthChecks, HealthStatus, MessageResponse};

use serde_json::{Value, json};

/// **VALUE**: Verifies `queued()` is true exactly when status is "queued".
///
/// **BUG THIS CATCHES**: Would catch a case-insensitive or prefix comparison.
#[test]
fn given_status_values_when_queued_checked_then_only_exact_match_is_true() {
    for (status, expected) in [
        ("queued", true),
        ("Queued", false),
        ("failed", false),
        ("", false),
    ] {
        let response = MessageResponse::from_data(&json!({ "status": status }));
        assert_eq!(response.queued(), expected, "status {status:?}");
    }
}

#[test]
fn given_full_data_when_parsed_then_fields_are_read() {
    let response = MessageResponse::from_data(&json!({
        "status": "queued",
        "message_log_id": 9876,
        "conversation_category": "marketing",
        "cost": 0.0625
    }));

    assert_eq!(response.status, "queued");
    assert_eq!(response.message_log_id, 9876);
    assert_eq!(response.conversation_category, "marketing");
    assert_eq!(response.cost, 0.0625);
}

/// **VALUE**: Verifies missing and string-typed fields are tolerated.
///
/// **WHY THIS MATTERS**: A message that was accepted must not surface as an error
/// just because the API returned `"cost": "0.05"` or left a field out.
#[test]
fn given_sparse_or_stringly_data_when_parsed_then_defaults_apply() {
    let empty = MessageResponse::from_data(&json!({}));
    assert_eq!(empty.status, "");
    assert_eq!(empty.message_log_id, 0);
    assert_eq!(empty.conversation_category, "");
    assert_eq!(empty.cost, 0.0);

    let stringly = MessageResponse::from_data(&json!({
        "status": "queued",
        "message_log_id": "42",
        "cost": "0.05"
    }));
    assert_eq!(stringly.message_log_id, 42);
    assert_eq!(stringly.cost, 0.05);

    let null_data = MessageResponse::from_data(&Value::Null);
    assert!(!null_data.queued());
}

/// **VALUE**: Verifies the response maps back to the same four fields and types.
///
/// **BUG THIS CATCHES**: Would catch `message_log_id` emitted as a float or `cost`
/// truncated to an integer.
#[test]
fn given_response_when_converted_to_map_then_reproduces_wire_fields() {
    let data = json!({
        "status": "queued",
        "message_log_id": 31337,
        "conversation_category": "utility",
        "cost": 0.25
    });

    let response = MessageResponse::from_data(&data);
    let map = Value::Object(response.to_map());

    assert_eq!(map, data);
    assert!(map["message_log_id"].is_i64());
    assert!(map["cost"].is_f64());
    assert_eq!(serde_json::to_value(&response).unwrap(), data);
}

#[test]
fn given_health_data_when_parsed_then_returned_unchanged() {
    let data = json!({
        "status": "ok",
        "checks": { "app": true, "database": true, "cache": false },
        "timestamp": "2026-10-18T09:30:00Z"
    });

    let health = HealthStatus::from_data(data.clone());

    assert_eq!(health.status, "ok");
    assert!(health.checks.app);
    assert!(!health.checks.cache);
    assert!(!health.is_healthy());
    assert_eq!(serde_json::to_value(&health).unwrap(), data);
}

#[test]
fn given_empty_health_data_when_parsed_then_defaults() {
    assert_eq!(HealthStatus::from_data(json!({})), HealthStatus::default());
}

/// **VALUE**: Verifies one mistyped field does not blank the rest of the health data.
///
/// **WHY THIS MATTERS**: A numeric timestamp from the platform used to turn a real
/// `"ok"` into `""` with every check false, reporting an outage that wasn't there.
///
/// **BUG THIS CATCHES**: Would catch health parsing going back to all-or-nothing
/// deserialization.
#[test]
fn given_mistyped_health_fields_when_parsed_then_other_fields_kept() {
    let health = HealthStatus::from_data(json!({
        "status": "ok",
        "checks": { "app": true, "database": "1", "cache": 1 },
        "timestamp": 1760000000
    }));

    assert_eq!(health.status, "ok");
    assert!(health.checks.app);
    assert!(health.checks.database);
    assert!(health.checks.cache);
    assert_eq!(health.timestamp, "1760000000");
}

#[test]
fn given_null_checks_when_parsed_then_status_kept_and_checks_false() {
    let health = HealthStatus::from_data(json!({
        "status": "degraded",
        "checks": null,
        "timestamp": "2026-10-18T09:30:00Z"
    }));

    assert_eq!(health.status, "degraded");
    assert_eq!(health.checks, HealthChecks::default());
    assert_eq!(health.timestamp, "2026-10-18T09:30:00Z");
}

/// **VALUE**: Verifies unknown keys survive parsing and serialize back unchanged.
#[test]
fn given_extra_health_keys_when_parsed_then_round_trip_unchanged() {
    let data = json!({
        "status": "ok",
        "checks": { "app": true, "database": true, "cache": true, "queue": false },
        "timestamp": "2026-10-18T09:30:00Z",
        "version": "2.4.1"
    });

    let health = HealthStatus::from_data(data.clone());

    assert!(health.is_healthy());
    assert_eq!(health.extra["version"], "2.4.1");
    assert_eq!(health.checks.extra["queue"], false);
    assert_eq!(serde_json::to_value(&health).unwrap(), data);
}
