//! Application configuration.
//!
//! Defaults, overridable by environment variables and by the builder
//! methods.
//!
//! # Example
//!
//! ```ignore
//! use ghbrowse::config::AppConfig;
//!
//! let config = AppConfig::from_env()?
//!     .with_timeout_secs(10);
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::api::GITHUB_API_BASE_URL;

pub const ENV_API_URL: &str = "GHBROWSE_API_URL";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "GHBROWSE_TIMEOUT_SECS";
pub const ENV_LOG: &str = "GHBROWSE_LOG";

/// Call, connect and read timeout applied to every request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API root (default: https://api.github.com)
    pub api_base_url: String,
    /// Personal access token; requests are unauthenticated without one
    pub token: Option<String>,
    /// Request timeout in seconds (default: 40)
    pub timeout_secs: u64,
    /// Log file base path; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(token) = get(ENV_TOKEN) {
            config = config.with_token(token);
        }
        if let Some(value) = get(ENV_TIMEOUT_SECS) {
            let secs = value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout {
                    var: ENV_TIMEOUT_SECS,
                    value,
                })?;
            config = config.with_timeout_secs(secs);
        }
        if let Some(path) = get(ENV_LOG) {
            config = config.with_log_path(path);
        }

        Ok(config)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("log_path", &self.log_path)
            .finish()
    }
}
