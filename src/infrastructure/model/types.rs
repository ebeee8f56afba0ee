//! Completion request, response and error types

use crate::domain::ChatMessage;
use thiserror::Error;

/// One attempt against one upstream model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    pub model: String,
    /// `None` when the provider answered without any text
    pub content: Option<String>,
}

impl CompletionResponse {
    pub fn new(model: impl Into<String>, content: Option<String>) -> Self {
        Self {
            model: model.into(),
            content,
        }
    }
}

/// Failure of a single completion attempt.
///
/// The `Display` text is what error classification inspects, so upstream
/// failures render exactly as `"<status> <provider message>"`.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },
    #[error("no API key available (set the {env_var} environment variable)")]
    MissingApiKey { env_var: String },
    #[error("network error calling model '{model}': {source}")]
    Network {
        model: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("model '{model}' returned invalid response: {reason}")]
    InvalidResponse { model: String, reason: String },
}

impl CompletionError {
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn missing_api_key(env_var: impl Into<String>) -> Self {
        Self::MissingApiKey {
            env_var: env_var.into(),
        }
    }

    pub fn network(model: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            model: model.into(),
            source,
        }
    }

    pub fn invalid_response(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status reported by the provider, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            CompletionError::Upstream { status, .. } => *status,
            CompletionError::Network { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors raised while building an upstream client from configuration.
#[derive(Debug, Error)]
pub enum ClientSetupError {
    #[error("invalid upstream header '{name}'")]
    InvalidHeader { name: String },
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
