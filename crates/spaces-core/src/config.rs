//! Centralized configuration for Spaces Explorer.
//!
//! Constant groups for network access and search defaults, plus the
//! resolved [`HubConfig`] used to construct the HTTP catalog.

use crate::error::{Result, SpacesError};
use std::time::Duration;
use url::Url;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://huggingface.co";
    pub const SPACES_API_PATH: &'static str = "api/spaces";
    pub const SPACE_PAGE_BASE: &'static str = "https://huggingface.co/spaces";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const USER_AGENT: &'static str = "spaces-explorer/0.1";
    pub const ENDPOINT_ENV: &'static str = "HF_ENDPOINT";
    pub const TOKEN_ENV: &'static str = "HF_TOKEN";
}

/// Search form defaults and bounds.
pub struct SearchConfig;

impl SearchConfig {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MIN_LIMIT: u32 = 1;
    pub const MAX_LIMIT: u32 = 100;
    /// Sentinel meaning "no filter" on every dropdown.
    pub const ALL: &'static str = "All";
}

/// Resolved connection settings for the hub catalog.
#[derive(Clone)]
pub struct HubConfig {
    /// Hub base URL (API paths are joined onto it)
    pub endpoint: Url,
    /// Bearer token attached to requests when present
    pub token: Option<String>,
    /// Total request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for HubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("has_token", &self.token.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HubConfig {
    /// Build a config for an explicit endpoint with no token.
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            token: None,
            timeout: NetworkConfig::REQUEST_TIMEOUT,
        })
    }

    /// Resolve from the environment (`HF_ENDPOINT`, `HF_TOKEN`), falling back
    /// to the public hub.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, |key| std::env::var(key).ok())
    }

    /// Resolve from the environment with an explicit endpoint taking
    /// precedence over `HF_ENDPOINT`.
    pub fn from_env_with_endpoint(endpoint: Option<&str>) -> Result<Self> {
        Self::resolve(endpoint, |key| std::env::var(key).ok())
    }

    /// Resolve using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(None, lookup)
    }

    /// Resolve the endpoint as override, then `HF_ENDPOINT`, then the public
    /// hub. Only the winning value is parsed.
    pub fn resolve<F>(endpoint_override: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = endpoint_override
            .map(String::from)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                lookup(NetworkConfig::ENDPOINT_ENV).filter(|v| !v.trim().is_empty())
            })
            .unwrap_or_else(|| NetworkConfig::DEFAULT_ENDPOINT.to_string());

        let token = lookup(NetworkConfig::TOKEN_ENV)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let mut config = Self::new(&endpoint)?;
        config.token = token;
        Ok(config)
    }

    /// Full URL of the spaces listing endpoint.
    pub fn spaces_url(&self) -> Result<Url> {
        self.endpoint
            .join(NetworkConfig::SPACES_API_PATH)
            .map_err(|e| SpacesError::Config {
                message: format!("Cannot build spaces URL from {}: {}", self.endpoint, e),
            })
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            endpoint: parse_endpoint(NetworkConfig::DEFAULT_ENDPOINT)
                .expect("default endpoint is a valid URL"),
            token: None,
            timeout: NetworkConfig::REQUEST_TIMEOUT,
        }
    }
}

/// Parse an endpoint, normalizing it to end with `/` so joins append paths.
fn parse_endpoint(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash).map_err(|e| SpacesError::Config {
        message: format!("Invalid hub endpoint '{}': {}", raw, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SpacesError::Config {
            message: format!("Unsupported endpoint scheme '{}'", other),
        }),
    }
}
