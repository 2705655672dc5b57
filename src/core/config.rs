//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::core::errors::{Result, YandexError};

/// API version used when none is given
pub const DEFAULT_API_VERSION: &str = "v1";

/// Connection settings shared by both clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Key appended to every request
    pub api_key: String,
    /// Version segment of the endpoint path
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_ms() -> u64 {
    30000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("YANDEX_API_KEY").unwrap_or_default(),
            api_version: default_api_version(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Config for the given key with the default version and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_version: default_api_version(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Override the API version
    pub fn with_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("YANDEX_API_KEY").map_err(|_| YandexError::ConfigError {
            message: "YANDEX_API_KEY environment variable is required".to_string(),
        })?;

        Self::from_env_with_key(api_key)
    }

    /// Load version and timeout from environment variables, with the key
    /// supplied by the caller
    pub fn from_env_with_key(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let api_version =
            std::env::var("YANDEX_API_VERSION").unwrap_or_else(|_| default_api_version());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()
            .map_err(|e| YandexError::ConfigError {
                message: format!("REQUEST_TIMEOUT_MS: {}", e),
            })?;

        Ok(Self {
            api_key,
            api_version,
            timeout_ms,
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration.
    ///
    /// An empty key is accepted and sent as is; the service rejects it and
    /// the call fails with [`YandexError::ApiError`].
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            warn!("API key is empty, requests will be rejected by the service");
        }

        if self.api_version.trim().is_empty() {
            return Err(YandexError::ConfigError {
                message: "API version must not be empty".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(YandexError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Request timeout handed to the transport
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
