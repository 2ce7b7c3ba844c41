use crate::helpers::{TEST_API_KEY, TEST_PHONE, client_for, test_config};

use cubeconnect_client::{Messaging, TemplateMessage};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn queued_body() -> serde_json::Value {
    json!({
        "data": {
            "status": "queued",
            "message_log_id": 501,
            "conversation_category": "service",
            "cost": 0.0
        }
    })
}

/// **VALUE**: Verifies send_text posts the text payload with auth headers.
///
/// **WHY THIS MATTERS**: Without the bearer token and Accept header the API
/// answers 401 or HTML; this pins the full request contract.
#[tokio::test]
async fn given_text_message_when_sent_then_posts_authenticated_payload() {
    // GIVEN: A server expecting the exact text payload and headers
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .and(header("authorization", format!("Bearer {TEST_API_KEY}").as_str()))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "phone": TEST_PHONE,
            "message_type": "text",
            "data": { "text": "Your order shipped" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(queued_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server));

    // WHEN: Sending a text
    let response = client.send_text(TEST_PHONE, "Your order shipped").await.unwrap();

    // THEN: The parsed response is returned
    assert!(response.queued());
    assert_eq!(response.message_log_id, 501);
    assert_eq!(response.conversation_category, "service");
}

/// **VALUE**: Verifies the tenant header is attached when configured.
#[tokio::test]
async fn given_tenant_configured_when_sent_then_tenant_header_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .and(header("x-tenant-id", "tenant-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queued_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server).with_tenant_id("tenant-42"));

    let response = client.send_text(TEST_PHONE, "hi").await.unwrap();

    assert!(response.queued());
}

/// **VALUE**: Verifies no tenant header is sent without a tenant id.
#[tokio::test]
async fn given_no_tenant_when_sent_then_tenant_header_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queued_body()))
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server));
    client.send_text(TEST_PHONE, "hi").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-tenant-id").is_none());
}

/// **VALUE**: Verifies template params reach the wire as one ordered body component.
#[tokio::test]
async fn given_template_with_params_when_sent_then_components_posted_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .and(body_json(json!({
            "phone": TEST_PHONE,
            "message_type": "template",
            "data": {
                "name": "order_update",
                "language_code": "en_US",
                "components": [{
                    "type": "body",
                    "parameters": [
                        { "type": "text", "text": "Alice" },
                        { "type": "text", "text": "42" }
                    ]
                }]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(queued_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server));
    let template = TemplateMessage::new("order_update").with_params(["Alice", "42"]);

    let response = client.send_template(TEST_PHONE, &template).await.unwrap();

    assert!(response.queued());
}

/// **VALUE**: Verifies an empty param list sends no `components` key.
#[tokio::test]
async fn given_template_without_params_when_sent_then_components_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queued_body()))
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server));
    client
        .send_template(TEST_PHONE, &TemplateMessage::new("welcome").with_language("ar"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["data"]["language_code"], "ar");
    assert!(body["data"].get("components").is_none());
}

/// **VALUE**: Verifies trailing slashes on the base URL don't produce `//api`.
#[tokio::test]
async fn given_base_url_with_trailing_slash_when_sent_then_path_is_clean() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queued_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server).with_base_url(format!("{}//", server.uri()));
    let client = client_for(&config);

    assert_eq!(client.base_url(), server.uri());
    client.send_text(TEST_PHONE, "hi").await.unwrap();
}

/// **VALUE**: Verifies a 2xx with no `data` yields the lenient empty response.
#[tokio::test]
async fn given_success_without_data_when_sent_then_defaults_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .respond_with(ResponseTemplate::new(201).set_body_string("accepted"))
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server));

    let response = client.send_text(TEST_PHONE, "hi").await.unwrap();

    assert!(!response.queued());
    assert_eq!(response.message_log_id, 0);
    assert_eq!(response.cost, 0.0);
}

/// **VALUE**: Verifies the client works through the `Messaging` trait object.
#[tokio::test]
async fn given_client_as_trait_object_when_sent_then_delegates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/messages/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queued_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&test_config(&server));
    let messaging: &dyn Messaging = &client;

    let response = messaging.send_text(TEST_PHONE, "hi").await.unwrap();

    assert_eq!(response.message_log_id, 501);
}
