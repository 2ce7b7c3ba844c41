use crate::helpers::{TEST_PHONE, client_for, test_config, unreachable_config};

use cubeconnect_client::{AuthFailure, CubeConnectConfig, CubeConnectError, ErrorKind, TemplateMessage};

use std::error::Error;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_responding(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// **VALUE**: Verifies a 401 body's code and message surface on the error.
#[tokio::test]
async fn given_401_with_error_body_when_sent_then_authentication_error() {
    let server =
        server_responding(401, json!({"error": {"code": "BAD_KEY", "message": "nope"}})).await;
    let client = client_for(&test_config(&server));

    let err = client.send_text(TEST_PHONE, "hi").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.auth_failure(), Some(AuthFailure::InvalidKey));
    assert_eq!(err.status_code(), 401);
    assert_eq!(err.error_code(), "BAD_KEY");
    assert_eq!(err.message(), "nope");
}

#[tokio::test]
async fn given_403_when_sent_then_forbidden_authentication_error() {
    let server = server_responding(403, json!({})).await;
    let client = client_for(&test_config(&server));

    let err = client.send_text(TEST_PHONE, "hi").await.unwrap_err();

    assert_eq!(err.auth_failure(), Some(AuthFailure::Forbidden));
    assert_eq!(err.error_code(), "FORBIDDEN");
    assert_eq!(err.status_code(), 403);
}

/// **VALUE**: Verifies 422 validation details reach the caller.
#[tokio::test]
async fn given_422_with_details_when_sent_then_validation_error_with_details() {
    let server = server_responding(
        422,
        json!({"error": {"code": "", "message": "", "details": {"phone": ["invalid"]}}}),
    )
    .await;
    let client = client_for(&test_config(&server));

    let err = client.send_text("not-a-phone", "hi").await.unwrap_err();

    match &err {
        CubeConnectError::Validation {
            error_code,
            details,
            ..
        } => {
            assert_eq!(error_code, "VALIDATION_ERROR");
            assert_eq!(details["phone"], vec!["invalid".to_string()]);
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn given_404_when_template_sent_then_not_found_error() {
    let server = server_responding(
        404,
        json!({"error": {"code": "TEMPLATE_NOT_FOUND", "message": "No such template"}}),
    )
    .await;
    let client = client_for(&test_config(&server));

    let err = client
        .send_template(TEST_PHONE, &TemplateMessage::new("missing"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.error_code(), "TEMPLATE_NOT_FOUND");
    assert_eq!(err.message(), "No such template");
}

#[tokio::test]
async fn given_429_when_sent_then_rate_limit_error() {
    let server = server_responding(429, json!({})).await;
    let client = client_for(&test_config(&server));

    let err = client.send_text(TEST_PHONE, "hi").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RateLimit);
    assert_eq!(err.error_code(), "RATE_LIMIT_EXCEEDED");
    assert_eq!(err.message(), "Rate limit exceeded for your current plan.");
}

/// **VALUE**: Verifies unexpected statuses with a non-JSON body fall to the catch-all.
#[tokio::test]
async fn given_502_html_body_when_sent_then_server_error_with_default_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    let client = client_for(&test_config(&server));

    let err = client.send_text(TEST_PHONE, "hi").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status_code(), 502);
    assert_eq!(err.error_code(), "SERVER_ERROR");
    assert_eq!(
        err.message(),
        "CubeConnect API returned an unexpected response [502]."
    );
}

/// **VALUE**: Verifies a refused connection is CONNECTION_FAILED with the cause kept.
///
/// **WHY THIS MATTERS**: Operators need the underlying reqwest error (DNS, refused,
/// TLS) to diagnose outages; swallowing it leaves only a generic message.
///
/// **BUG THIS CATCHES**: Would catch the `#[source]` attribute being dropped or the
/// transport error being mapped to a Server error with a fake status.
#[tokio::test]
async fn given_connection_refused_when_sent_then_connection_failed_with_source() {
    let client = client_for(&unreachable_config());

    let err = client.send_text(TEST_PHONE, "hi").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConnectionFailed);
    assert_eq!(err.error_code(), "CONNECTION_FAILED");
    assert_eq!(err.status_code(), 0);

    let source = err.source().expect("Transport error should be chained");
    let reqwest_err = source
        .downcast_ref::<reqwest::Error>()
        .expect("Source should be the reqwest error");
    assert!(reqwest_err.is_connect());
}

/// **VALUE**: Verifies a response slower than the timeout is CONNECTION_FAILED.
#[tokio::test]
async fn given_slow_server_when_timeout_expires_then_connection_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    let client = client_for(&test_config(&server).with_timeout_seconds(1));

    let err = client.send_text(TEST_PHONE, "hi").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConnectionFailed);
    assert_eq!(err.status_code(), 0);
}

/// **VALUE**: Verifies a missing key fails locally, with no request sent.
///
/// **BUG THIS CATCHES**: Would catch the client sending `Authorization: Bearer `
/// and relying on the server's 401.
#[tokio::test]
async fn given_missing_api_key_when_sent_then_fails_without_request() {
    let server = MockServer::start().await;
    let config = CubeConnectConfig::default().with_base_url(server.uri());
    let client = client_for(&config);

    let err = client.send_text(TEST_PHONE, "hi").await.unwrap_err();

    assert_eq!(err.auth_failure(), Some(AuthFailure::MissingKey));
    assert_eq!(err.error_code(), "AUTHENTICATION_REQUIRED");
    assert!(server.received_requests().await.unwrap().is_empty());
}
