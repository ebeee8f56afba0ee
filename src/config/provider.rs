//! # Upstream provider configuration
//!
//! Connection settings for the OpenAI-compatible completions endpoint.
//!
//! ```toml
//! [provider]
//! endpoint = "https://openrouter.ai/api/v1"
//! api_path = "chat/completions"
//! api_key = "OPENROUTER_API_KEY"
//! timeout_secs = 60
//!
//! [provider.headers]
//! "HTTP-Referer" = "https://newtab.example.com"
//! "X-Title" = "New Tab AI"
//! ```
//!
//! `api_key` names an environment variable; the key itself never lives in
//! the file.

use super::defaults::{
    DEFAULT_API_KEY_ENV, DEFAULT_API_PATH, DEFAULT_ENDPOINT, DEFAULT_REFERER, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TITLE,
};
use super::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL of the completions API
    pub endpoint: String,
    /// Path appended to `endpoint` for chat completions
    pub api_path: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub timeout: Duration,
    /// Extra headers sent with every upstream request
    pub headers: BTreeMap<String, String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: default_headers(),
        }
    }
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("HTTP-Referer".to_string(), DEFAULT_REFERER.to_string()),
        ("X-Title".to_string(), DEFAULT_TITLE.to_string()),
    ])
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawProviderConfig {
    endpoint: Option<String>,
    api_path: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
    headers: Option<BTreeMap<String, String>>,
}

impl TryFrom<RawProviderConfig> for ProviderConfig {
    type Error = ConfigError;

    fn try_from(raw: RawProviderConfig) -> Result<Self, Self::Error> {
        let defaults = ProviderConfig::default();

        let endpoint = raw.endpoint.unwrap_or(defaults.endpoint);
        if endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }

        Ok(Self {
            endpoint,
            api_path: raw.api_path.unwrap_or(defaults.api_path),
            api_key_env: raw
                .api_key
                .map(|name| name.trim().to_string())
                .unwrap_or(defaults.api_key_env),
            timeout: raw
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            headers: raw.headers.unwrap_or(defaults.headers),
        })
    }
}
