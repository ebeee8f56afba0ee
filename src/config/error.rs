use std::io;
use std::net::AddrParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("no candidate models configured - [chat].models needs at least one entry")]
    NoModelsConfigured,

    #[error("[chat].models[{index}] is blank")]
    BlankModel { index: usize },

    #[error("[chat].temperature must be within 0.0..=2.0, got {value}")]
    InvalidTemperature { value: f32 },

    #[error("[chat].max_tokens must be greater than zero")]
    ZeroMaxTokens,

    #[error("[provider].endpoint cannot be empty")]
    MissingEndpoint,

    #[error("[server].bind '{value}' is not a socket address: {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("[[auth.sessions]] entry {index} is missing '{field}'")]
    IncompleteSession { index: usize, field: &'static str },
}
