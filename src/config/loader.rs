use super::AppConfig;
use super::auth::RawAuthConfig;
use super::chat::RawChatConfig;
use super::error::ConfigError;
use super::provider::RawProviderConfig;
use super::server::RawServerConfig;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    provider: RawProviderConfig,
    #[serde(default)]
    chat: RawChatConfig,
    #[serde(default)]
    server: RawServerConfig,
    #[serde(default)]
    auth: RawAuthConfig,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load configuration from `path`, or from the default path when `None`.
///
/// Only the default path is allowed to be absent, in which case built-in
/// defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                info!(path = %path.display(), "No configuration file, using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading gateway configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content)
}

pub(super) fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig =
        toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;
    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    Ok(AppConfig {
        provider: parsed.provider.try_into()?,
        chat: parsed.chat.try_into()?,
        server: parsed.server.try_into()?,
        auth: parsed.auth.try_into()?,
    })
}
