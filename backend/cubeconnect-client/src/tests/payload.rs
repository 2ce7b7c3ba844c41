// Unit tests for outbound request bodies
// The remote API is strict about key presence and parameter order

use crate::payload::{SendRequest, TemplateMessage};

use serde_json::json;

/// **VALUE**: Verifies the exact wire shape of a text message.
///
/// **BUG THIS CATCHES**: Would catch a renamed field or `message_type` serialized
/// as `"Text"` instead of `"text"`.
#[test]
fn given_text_message_when_serialized_then_matches_wire_shape() {
    // GIVEN: A text request
    let request = SendRequest::text("+15550001111", "Hello there");

    // WHEN: Serializing
    let value = serde_json::to_value(&request).unwrap();

    // THEN: Matches the documented payload exactly
    assert_eq!(
        value,
        json!({
            "phone": "+15550001111",
            "message_type": "text",
            "data": { "text": "Hello there" }
        })
    );
}

/// **VALUE**: Verifies template params become one body component, in input order.
///
/// **WHY THIS MATTERS**: Params map positionally onto `{{1}}, {{2}}, ...`. Reordering
/// them silently sends the wrong name/amount to a customer.
///
/// **BUG THIS CATCHES**: Would catch params collected through an unordered container
/// or split into several components.
#[test]
fn given_template_with_params_when_serialized_then_single_body_component_in_order() {
    // GIVEN: A template with two params
    let template = TemplateMessage::new("order_update").with_params(["Alice", "42"]);

    // WHEN: Building and serializing the request
    let value = serde_json::to_value(SendRequest::template("+15550001111", &template)).unwrap();

    // THEN: One body component with text parameters in order
    assert_eq!(
        value,
        json!({
            "phone": "+15550001111",
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
        })
    );
}

/// **VALUE**: Verifies an empty param list omits `components` entirely.
///
/// **WHY THIS MATTERS**: The API treats `"components": []` differently from an
/// absent key and rejects templates without placeholders sent with an empty list.
///
/// **BUG THIS CATCHES**: Would catch `skip_serializing_if` being dropped.
#[test]
fn given_template_without_params_when_serialized_then_components_key_absent() {
    let template = TemplateMessage::new("welcome");

    let value = serde_json::to_value(SendRequest::template("+15550001111", &template)).unwrap();

    let data = value.get("data").unwrap().as_object().unwrap();
    assert!(!data.contains_key("components"));
    assert_eq!(data.get("name").unwrap(), "welcome");
    assert_eq!(data.get("language_code").unwrap(), "en_US");
}

#[test]
fn given_non_string_params_when_built_then_values_are_stringified() {
    let template = TemplateMessage::new("invoice")
        .with_param(7)
        .with_param(12.5)
        .with_param("EUR")
        .with_language("de_DE");

    assert_eq!(template.params(), ["7", "12.5", "EUR"]);
    assert_eq!(template.language_code(), "de_DE");

    let value = serde_json::to_value(SendRequest::template("+4915100000", &template)).unwrap();
    assert_eq!(value["data"]["language_code"], "de_DE");
    assert_eq!(value["data"]["components"][0]["parameters"][1]["text"], "12.5");
}
