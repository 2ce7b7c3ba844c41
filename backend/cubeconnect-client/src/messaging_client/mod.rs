use crate::config::CubeConnectConfig;
use crate::envelope;
use crate::error::{ApiError, ConfigError, CubeConnectError};
use crate::messaging::Messaging;
use crate::models::{HealthStatus, MessageResponse};
use crate::payload::{SendRequest, TemplateMessage};
use crate::{HEALTH_ENDPOINT, SEND_MESSAGE_ENDPOINT};

use common::{ErrorLocation, HttpStatusCode, RedactedApiKey};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

const TENANT_HEADER_KEY: &str = "X-TENANT-ID";
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for the CubeConnect messaging API.
///
/// Holds no mutable state; clone it or share it by reference across tasks.
#[derive(Debug, Clone)]
pub struct MessagingClient {
    base_url: String,
    api_key: RedactedApiKey,
    tenant_id: Option<String>,
    client: Client,
}

impl MessagingClient {
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(config: &CubeConnectConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ConfigError::HttpClient {
                location: ErrorLocation::caller(),
                source: e,
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            tenant_id: config.tenant_id.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn send_text(
        &self,
        phone: &str,
        body: &str,
    ) -> Result<MessageResponse, CubeConnectError> {
        self.send(&SendRequest::text(phone, body)).await
    }

    pub async fn send_template(
        &self,
        phone: &str,
        template: &TemplateMessage,
    ) -> Result<MessageResponse, CubeConnectError> {
        self.send(&SendRequest::template(phone, template)).await
    }

    /// # Errors
    ///
    /// Any non-2xx response is a [`CubeConnectError::Server`], whatever its
    /// status; transport failures are [`CubeConnectError::ConnectionFailed`].
    pub async fn health(&self) -> Result<HealthStatus, CubeConnectError> {
        let url = format!("{}{}", self.base_url, HEALTH_ENDPOINT);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CubeConnectError::connection_failed(e))?;

        let (status, body) = read_envelope(response).await?;

        if !status.is_success() {
            return Err(ApiError::from_envelope(status, &body).into_server_error());
        }

        Ok(HealthStatus::from_data(envelope::data(&body)))
    }

    async fn send(&self, payload: &SendRequest) -> Result<MessageResponse, CubeConnectError> {
        if self.api_key.is_empty() {
            return Err(CubeConnectError::missing_key());
        }

        let url = format!("{}{}", self.base_url, SEND_MESSAGE_ENDPOINT);

        let response = self
            .prepare_request(self.client.post(url))
            .json(payload)
            .send()
            .await
            .map_err(|e| CubeConnectError::connection_failed(e))?;

        let (status, body) = read_envelope(response).await?;

        if !status.is_success() {
            return Err(ApiError::from_envelope(status, &body).into_error());
        }

        Ok(MessageResponse::from_data(&envelope::data(&body)))
    }

    fn prepare_request(&self, request: RequestBuilder) -> RequestBuilder {
        let mut request = request
            .bearer_auth(self.api_key.as_str())
            .header(ACCEPT, JSON_CONTENT_TYPE);
        if let Some(tenant_id) = &self.tenant_id {
            request = request.header(TENANT_HEADER_KEY, tenant_id);
        }
        request
    }
}

/// A body cut off mid-read counts as a connection failure.
async fn read_envelope(response: Response) -> Result<(HttpStatusCode, Value), CubeConnectError> {
    let status = HttpStatusCode(response.status().as_u16());
    let bytes = response
        .bytes()
        .await
        .map_err(|e| CubeConnectError::connection_failed(e))?;

    Ok((status, envelope::parse(&bytes)))
}

#[async_trait]
impl Messaging for MessagingClient {
    async fn send_text(
        &self,
        phone: &str,
        body: &str,
    ) -> Result<MessageResponse, CubeConnectError> {
        MessagingClient::send_text(self, phone, body).await
    }

    async fn send_template(
        &self,
        phone: &str,
        template: &TemplateMessage,
    ) -> Result<MessageResponse, CubeConnectError> {
        MessagingClient::send_template(self, phone, template).await
    }

    async fn health(&self) -> Result<HealthStatus, CubeConnectError> {
        MessagingClient::health(self).await
    }
}
