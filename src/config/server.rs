use super::defaults::DEFAULT_BIND;
use super::error::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;

/// REST listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3001)),
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawServerConfig {
    bind: Option<String>,
    #[serde(default)]
    cors_origins: Vec<String>,
}

impl TryFrom<RawServerConfig> for ServerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawServerConfig) -> Result<Self, Self::Error> {
        let value = raw.bind.unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = value
            .parse()
            .map_err(|source| ConfigError::InvalidBind { value, source })?;

        Ok(Self {
            bind,
            cors_origins: raw.cors_origins,
        })
    }
}
