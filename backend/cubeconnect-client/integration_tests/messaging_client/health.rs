use crate::helpers::{client_for, test_config, unreachable_config};

use cubeconnect_client::{CubeConnectConfig, ErrorKind, HealthChecks, HealthStatus};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies health returns the `data` object as-is, without auth headers.
///
/// **WHY THIS MATTERS**: The health endpoint is public; sending the key there
/// exposes it to whatever sits in front of the status page.
#[tokio::test]
async fn given_healthy_platform_when_checked_then_returns_data_without_auth() {
    // GIVEN: A healthy platform response
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "status": "ok",
                "checks": { "app": true, "database": true, "cache": false },
                "timestamp": "2026-10-18T09:30:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server).with_tenant_id("tenant-1"));

    // WHEN: Checking health
    let health = client.health().await.unwrap();

    // THEN: The data is returned unchanged
    assert_eq!(
        health,
        HealthStatus {
            status: "ok".to_string(),
            checks: HealthChecks {
                app: true,
                database: true,
                cache: false,
                ..Default::default()
            },
            timestamp: "2026-10-18T09:30:00Z".to_string(),
            ..Default::default()
        }
    );

    // AND: No credentials were sent
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert!(requests[0].headers.get("x-tenant-id").is_none());
}

/// **VALUE**: Verifies health works without an API key configured.
#[tokio::test]
async fn given_no_api_key_when_health_checked_then_still_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&CubeConnectConfig::default().with_base_url(server.uri()));

    let health = client.health().await.unwrap();

    assert_eq!(health, HealthStatus::default());
}

/// **VALUE**: Verifies health failures are generic server errors, even for 401.
#[tokio::test]
async fn given_health_failure_when_checked_then_server_error_with_body_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": { "code": "MAINTENANCE", "message": "Back soon" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server));

    let err = client.health().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status_code(), 503);
    assert_eq!(err.error_code(), "MAINTENANCE");
    assert_eq!(err.message(), "Back soon");
}

#[tokio::test]
async fn given_health_401_when_checked_then_not_classified_as_authentication() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server));

    let err = client.health().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.error_code(), "SERVER_ERROR");
}

#[tokio::test]
async fn given_unreachable_host_when_health_checked_then_connection_failed() {
    let client = client_for(&unreachable_config());

    let err = client.health().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConnectionFailed);
}
