#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the admin REST endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub service_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_read_timeout_ms() -> u64 {
    DEFAULT_READ_TIMEOUT_MS
}

fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

impl AdminConfig {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            auth_token: None,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_read_timeout_ms(mut self, millis: u64) -> Self {
        self.read_timeout_ms = millis;
        self
    }

    pub fn with_connect_timeout_ms(mut self, millis: u64) -> Self {
        self.connect_timeout_ms = millis;
        self
    }
}

impl Validate for AdminConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("service_url", &self.service_url)?;
        validation::validate_positive_number("read_timeout_ms", self.read_timeout_ms, 1)?;
        validation::validate_positive_number("connect_timeout_ms", self.connect_timeout_ms, 1)?;
        if let Some(token) = &self.auth_token {
            validation::validate_non_empty_string("auth_token", token)?;
        }
        Ok(())
    }
}
