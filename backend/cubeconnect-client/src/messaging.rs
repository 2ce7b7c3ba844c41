use crate::error::CubeConnectError;
use crate::models::{HealthStatus, MessageResponse};
use crate::payload::TemplateMessage;

use async_trait::async_trait;

/// Operations offered by the CubeConnect messaging API.
///
/// Hosts take `&dyn Messaging` so a fake can stand in for the HTTP client.
#[async_trait]
pub trait Messaging: Send + Sync {
    /// Send a free-form text message.
    ///
    /// Only deliverable within 24 hours of the customer's last inbound
    /// message; outside that window use [`send_template`](Self::send_template).
    async fn send_text(&self, phone: &str, body: &str) -> Result<MessageResponse, CubeConnectError>;

    /// Send a pre-approved template message. Allowed at any time.
    async fn send_template(
        &self,
        phone: &str,
        template: &TemplateMessage,
    ) -> Result<MessageResponse, CubeConnectError>;

    /// Check platform health. Unauthenticated.
    async fn health(&self) -> Result<HealthStatus, CubeConnectError>;
}
