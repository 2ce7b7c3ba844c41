//! Shared primitives for the CubeConnect workspace.
//!
//! - [`ErrorLocation`]: where an error value was built
//! - [`HttpStatusCode`]: status code carried by API errors
//! - [`RedactedApiKey`]: the API key, kept out of logs and payloads

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

#[cfg(test)]
mod tests;
