use crate::CUBECONNECT_DEFAULT_BASE_URL;
use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedApiKey};

use std::env;
use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;
use url::Url;

pub const API_KEY_ENV: &str = "CUBECONNECT_API_KEY";
pub const BASE_URL_ENV: &str = "CUBECONNECT_URL";
pub const TENANT_ID_ENV: &str = "CUBECONNECT_TENANT_ID";
pub const TIMEOUT_ENV: &str = "CUBECONNECT_TIMEOUT";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

// ============================================
// CONFIG STRUCT
// ============================================

/// Settings a [`MessagingClient`](crate::MessagingClient) is built from.
#[derive(Debug, Clone, Deserialize)]
pub struct CubeConnectConfig {
    #[serde(default)]
    pub api_key: RedactedApiKey,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for CubeConnectConfig {
    fn default() -> Self {
        Self {
            api_key: RedactedApiKey::default(),
            base_url: default_base_url(),
            tenant_id: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_base_url() -> String {
    CUBECONNECT_DEFAULT_BASE_URL.to_string()
}
fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

// ============================================
// IMPLEMENTATION
// ============================================

impl CubeConnectConfig {
    pub fn new(api_key: impl Into<RedactedApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Load from `CUBECONNECT_*` environment variables.
    ///
    /// A `.env` file in the working directory is loaded first when present;
    /// variables already set in the process take precedence over it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if `CUBECONNECT_TIMEOUT` is not
    /// a positive integer or `CUBECONNECT_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found, reading process environment"),
            Err(e) => warn!("Failed to load .env, reading process environment: {}", e),
        }

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            Some(key) => {
                info!("Found API key in {} ({} chars)", API_KEY_ENV, key.len());
                config.api_key = RedactedApiKey::new(key);
            }
            None => warn!("{} is not set or blank; authenticated calls will fail", API_KEY_ENV),
        }

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }

        config.tenant_id = lookup(TENANT_ID_ENV).filter(|v| !v.trim().is_empty());

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            config.timeout_seconds = raw.trim().parse().map_err(|_| {
                ConfigError::validation(format!("{TIMEOUT_ENV} must be an integer, got '{raw}'"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file with `api_key`, `base_url`, `tenant_id` and
    /// `timeout_seconds` keys, all optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::caller(),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: CubeConnectConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::validation(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::validation(format!(
                "Base URL must use http or https: {}",
                self.base_url
            )));
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation("timeout_seconds must be greater than 0"));
        }

        Ok(())
    }
}
