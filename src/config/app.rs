use super::auth::AuthConfig;
use super::chat::ChatConfig;
use super::error::ConfigError;
use super::provider::ProviderConfig;
use super::server::ServerConfig;
use std::path::Path;

/// Application configuration loaded from server.toml
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub chat: ChatConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content)
    }
}
