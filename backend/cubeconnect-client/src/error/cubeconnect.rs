//! Error taxonomy for CubeConnect API calls.
//!
//! Every failure reaches the caller as one [`CubeConnectError`] variant:
//! - HTTP status codes are stored directly, never parsed from messages
//! - body-supplied `error.code` / `error.message` override the defaults
//! - all variants carry an [`ErrorLocation`] captured via `#[track_caller]`

use crate::error::api_error::ValidationDetails;

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

pub const INVALID_API_KEY: &str = "INVALID_API_KEY";
pub const FORBIDDEN: &str = "FORBIDDEN";
pub const AUTHENTICATION_REQUIRED: &str = "AUTHENTICATION_REQUIRED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";
pub const SERVER_ERROR: &str = "SERVER_ERROR";
pub const CONNECTION_FAILED: &str = "CONNECTION_FAILED";

const INVALID_API_KEY_MESSAGE: &str = "The provided API key is invalid.";
const FORBIDDEN_MESSAGE: &str = "The API key does not have access to this resource.";
const MISSING_KEY_MESSAGE: &str =
    "An API key is required. Set CUBECONNECT_API_KEY in your environment.";
const NOT_FOUND_MESSAGE: &str = "The requested resource was not found.";
const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded for your current plan.";
const CONNECTION_FAILED_MESSAGE: &str = "Unable to connect to CubeConnect API.";

/// Discriminant shared by all error variants, for catch-by-kind handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Authentication,
    Validation,
    RateLimit,
    NotFound,
    Server,
    ConnectionFailed,
}

/// Why an [`CubeConnectError::Authentication`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// HTTP 401.
    InvalidKey,
    /// HTTP 403: the key is valid but lacks access.
    Forbidden,
    /// No key configured; raised before any request is sent.
    MissingKey,
}

#[derive(Debug, ThisError)]
pub enum CubeConnectError {
    #[error("Authentication Error: HTTP {status_code} - {message} [{error_code}] {location}")]
    Authentication {
        failure: AuthFailure,
        status_code: HttpStatusCode,
        error_code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation Error: {message} [{error_code}] {location}")]
    Validation {
        error_code: String,
        message: String,
        details: ValidationDetails,
        location: ErrorLocation,
    },

    #[error("Rate Limit Error: {message} [{error_code}] {location}")]
    RateLimit {
        error_code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Not Found Error: {message} [{error_code}] {location}")]
    NotFound {
        error_code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status_code} - {message} [{error_code}] {location}")]
    Server {
        status_code: HttpStatusCode,
        error_code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Connection Error: {message} {location}")]
    ConnectionFailed {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

/// Empty body values fall back to the kind's default.
fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

impl CubeConnectError {
    #[track_caller]
    pub fn invalid_key(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        CubeConnectError::Authentication {
            failure: AuthFailure::InvalidKey,
            status_code: HttpStatusCode::UNAUTHORIZED,
            error_code: or_default(error_code.into(), INVALID_API_KEY),
            message: or_default(message.into(), INVALID_API_KEY_MESSAGE),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn forbidden(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        CubeConnectError::Authentication {
            failure: AuthFailure::Forbidden,
            status_code: HttpStatusCode::FORBIDDEN,
            error_code: or_default(error_code.into(), FORBIDDEN),
            message: or_default(message.into(), FORBIDDEN_MESSAGE),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn missing_key() -> Self {
        CubeConnectError::Authentication {
            failure: AuthFailure::MissingKey,
            status_code: HttpStatusCode::UNAUTHORIZED,
            error_code: AUTHENTICATION_REQUIRED.to_string(),
            message: MISSING_KEY_MESSAGE.to_string(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn not_found(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        CubeConnectError::NotFound {
            error_code: or_default(error_code.into(), NOT_FOUND),
            message: or_default(message.into(), NOT_FOUND_MESSAGE),
            location: ErrorLocation::caller(),
        }
    }

    /// The message has no default: an empty one stays empty.
    #[track_caller]
    pub fn validation(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: ValidationDetails,
    ) -> Self {
        CubeConnectError::Validation {
            error_code: or_default(error_code.into(), VALIDATION_ERROR),
            message: message.into(),
            details,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn rate_limited(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        CubeConnectError::RateLimit {
            error_code: or_default(error_code.into(), RATE_LIMIT_EXCEEDED),
            message: or_default(message.into(), RATE_LIMIT_MESSAGE),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn server(
        status_code: impl Into<HttpStatusCode>,
        error_code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let status_code = status_code.into();
        let default_message =
            format!("CubeConnect API returned an unexpected response [{status_code}].");

        CubeConnectError::Server {
            status_code,
            error_code: or_default(error_code.into(), SERVER_ERROR),
            message: or_default(message.into(), &default_message),
            location: ErrorLocation::caller(),
        }
    }

    /// No response was received: DNS, refused connection, timeout or a broken body.
    #[track_caller]
    pub fn connection_failed(source: reqwest::Error) -> Self {
        CubeConnectError::ConnectionFailed {
            message: CONNECTION_FAILED_MESSAGE.to_string(),
            source,
            location: ErrorLocation::caller(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CubeConnectError::Authentication { .. } => ErrorKind::Authentication,
            CubeConnectError::Validation { .. } => ErrorKind::Validation,
            CubeConnectError::RateLimit { .. } => ErrorKind::RateLimit,
            CubeConnectError::NotFound { .. } => ErrorKind::NotFound,
            CubeConnectError::Server { .. } => ErrorKind::Server,
            CubeConnectError::ConnectionFailed { .. } => ErrorKind::ConnectionFailed,
        }
    }

    /// HTTP status of the failed call; `0` when no response was received.
    pub fn status_code(&self) -> u16 {
        match self {
            CubeConnectError::Authentication { status_code, .. } => status_code.0,
            CubeConnectError::Validation { .. } => HttpStatusCode::UNPROCESSABLE_ENTITY.0,
            CubeConnectError::RateLimit { .. } => HttpStatusCode::TOO_MANY_REQUESTS.0,
            CubeConnectError::NotFound { .. } => HttpStatusCode::NOT_FOUND.0,
            CubeConnectError::Server { status_code, .. } => status_code.0,
            CubeConnectError::ConnectionFailed { .. } => HttpStatusCode::NO_RESPONSE.0,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            CubeConnectError::Authentication { error_code, .. }
            | CubeConnectError::Validation { error_code, .. }
            | CubeConnectError::RateLimit { error_code, .. }
            | CubeConnectError::NotFound { error_code, .. }
            | CubeConnectError::Server { error_code, .. } => error_code,
            CubeConnectError::ConnectionFailed { .. } => CONNECTION_FAILED,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CubeConnectError::Authentication { message, .. }
            | CubeConnectError::Validation { message, .. }
            | CubeConnectError::RateLimit { message, .. }
            | CubeConnectError::NotFound { message, .. }
            | CubeConnectError::Server { message, .. }
            | CubeConnectError::ConnectionFailed { message, .. } => message,
        }
    }

    /// Field-level validation messages; only present on 422 responses.
    pub fn details(&self) -> Option<&ValidationDetails> {
        match self {
            CubeConnectError::Validation { details, .. } => Some(details),
            _ => None,
        }
    }

    pub fn auth_failure(&self) -> Option<AuthFailure> {
        match self {
            CubeConnectError::Authentication { failure, .. } => Some(*failure),
            _ => None,
        }
    }
}
