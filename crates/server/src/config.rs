//! Server configuration with layered loading.
//!
//! Loading precedence (highest wins):
//!
//! 1. Environment variables (PAGELIFT_*)
//! 2. TOML config file (if PAGELIFT_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use pagelift_core::ExtractConfig;
use pagelift_core::fetch::{DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Extra time the whole request may take beyond the fetch deadline.
const REQUEST_TIMEOUT_MARGIN_MS: u64 = 5_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind. Set via PAGELIFT_HOST.
    #[serde(default = "default_host")]
    pub host: String,

    /// Set via PAGELIFT_PORT.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin allowed by CORS, or `*` for any. Set via PAGELIFT_FRONTEND_URL.
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,

    /// Upstream fetch deadline in milliseconds. Set via PAGELIFT_TIMEOUT_MS.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Set via PAGELIFT_USER_AGENT.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

fn default_frontend_url() -> String {
    "*".into()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            frontend_url: default_frontend_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment cannot be parsed, or
    /// if validation fails after loading.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("PAGELIFT_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        Self::from_figment(figment.merge(Env::prefixed("PAGELIFT_")))
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values after loading.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be greater than 0".into() });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.frontend_url != "*" {
            Url::parse(&self.frontend_url)
                .map_err(|e| ConfigError::Invalid { field: "frontend_url".into(), reason: e.to_string() })?;
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Deadline for a whole request, fetch included.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.saturating_add(REQUEST_TIMEOUT_MARGIN_MS))
    }

    /// The extraction settings shared by every request.
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig::builder().timeout_ms(self.timeout_ms).user_agent(self.user_agent.clone()).build()
    }
}
