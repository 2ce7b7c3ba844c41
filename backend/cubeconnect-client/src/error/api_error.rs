//! Normalized failure body and the status-to-kind dispatch.

use crate::envelope;
use crate::error::cubeconnect::CubeConnectError;
use crate::models::lenient;

use common::HttpStatusCode;

use std::collections::HashMap;

use serde_json::Value;

/// Field name to the validation messages reported for it.
pub type ValidationDetails = HashMap<String, Vec<String>>;

/// The `error` object of a failed response, with absent fields defaulted to empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status_code: HttpStatusCode,
    pub error_code: String,
    pub message: String,
    pub details: ValidationDetails,
}

impl ApiError {
    pub fn from_envelope(status_code: impl Into<HttpStatusCode>, envelope: &Value) -> Self {
        let error = envelope::field(envelope, envelope::ERROR_KEY);

        Self {
            status_code: status_code.into(),
            error_code: string_field(error, "code"),
            message: string_field(error, "message"),
            details: error.map(parse_details).unwrap_or_default(),
        }
    }

    /// Maps the status code to its error kind. First match wins:
    /// 401, 403, 404, 422, 429, then everything else as a server error.
    #[track_caller]
    pub fn into_error(self) -> CubeConnectError {
        let ApiError {
            status_code,
            error_code,
            message,
            details,
        } = self;

        match status_code {
            HttpStatusCode::UNAUTHORIZED => CubeConnectError::invalid_key(error_code, message),
            HttpStatusCode::FORBIDDEN => CubeConnectError::forbidden(error_code, message),
            HttpStatusCode::NOT_FOUND => CubeConnectError::not_found(error_code, message),
            HttpStatusCode::UNPROCESSABLE_ENTITY => {
                CubeConnectError::validation(error_code, message, details)
            }
            HttpStatusCode::TOO_MANY_REQUESTS => {
                CubeConnectError::rate_limited(error_code, message)
            }
            other => CubeConnectError::server(other, error_code, message),
        }
    }

    /// Health checks skip the dispatch table: every failure is a server error.
    #[track_caller]
    pub fn into_server_error(self) -> CubeConnectError {
        CubeConnectError::server(self.status_code, self.error_code, self.message)
    }
}

/// Numeric codes such as `1001` are kept as their decimal text.
fn string_field(error: Option<&Value>, key: &str) -> String {
    lenient::string(error.and_then(|e| e.get(key)))
}

/// Accepts `{"field": ["msg", ...]}` and tolerates a bare string per field.
fn parse_details(error: &Value) -> ValidationDetails {
    let Some(Value::Object(details)) = error.get("details") else {
        return ValidationDetails::new();
    };

    details
        .iter()
        .filter_map(|(field, messages)| {
            let messages = match messages {
                Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
                Value::String(s) => vec![s.clone()],
                _ => return None,
            };
            Some((field.clone(), messages))
        })
        .collect()
}
