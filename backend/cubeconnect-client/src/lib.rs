//! Client for the CubeConnect WhatsApp messaging API.
//!
//! Construct one [`MessagingClient`] per [`CubeConnectConfig`] and pass it
//! where it is needed, usually as `&dyn Messaging`.

pub mod config;
pub mod error;
pub mod messaging;
pub mod models;
pub mod payload;

mod envelope;
mod messaging_client;
#[cfg(test)]
mod tests;

pub use config::CubeConnectConfig;
pub use error::{ApiError, AuthFailure, ConfigError, CubeConnectError, ErrorKind};
pub use messaging::Messaging;
pub use messaging_client::MessagingClient;
pub use models::{HealthChecks, HealthStatus, MessageResponse};
pub use payload::TemplateMessage;

pub const CUBECONNECT_DEFAULT_BASE_URL: &str = "https://cubeconnect.io";
pub const CUBECONNECT_API_PATH: &str = "/api";
pub const SEND_MESSAGE_ENDPOINT: &str =
    const_format::concatcp!(CUBECONNECT_API_PATH, "/v1/messages/send");
pub const HEALTH_ENDPOINT: &str = const_format::concatcp!(CUBECONNECT_API_PATH, "/health");
