//! Base HTTP client with shared logic

use crate::config::ProviderConfig;
use crate::infrastructure::model::types::{ClientSetupError, CompletionError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Resolve the API key from the environment variable named in config
pub fn resolve_api_key(env_var: &str) -> Option<String> {
    let name = env_var.trim();
    if name.is_empty() {
        return None;
    }
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => {
            warn!(env_var = name, "API key environment variable is empty");
            None
        }
        Err(err) => {
            warn!(env_var = name, %err, "API key environment variable is not set");
            None
        }
    }
}

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub endpoint: String,
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub headers: HeaderMap,
    pub http: Client,
}

impl HttpClientBase {
    pub fn from_config(
        config: &ProviderConfig,
        api_key: Option<String>,
    ) -> Result<Self, ClientSetupError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let invalid = || ClientSetupError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key,
            headers,
            http,
        })
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Post JSON with bearer auth and the configured extra headers.
    ///
    /// Non-success statuses become [`CompletionError::Upstream`] carrying the
    /// provider's own error message.
    pub async fn post_with_bearer<Req, Res>(
        &self,
        model: &str,
        url: &str,
        body: &Req,
    ) -> Result<Res, CompletionError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let api_key = self.require_api_key()?;

        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| CompletionError::network(model, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::upstream(
                Some(status.as_u16()),
                upstream_message(status, &body),
            ));
        }

        response.json().await.map_err(|e| {
            if e.is_decode() {
                CompletionError::invalid_response(model, e.to_string())
            } else {
                CompletionError::network(model, e)
            }
        })
    }

    fn require_api_key(&self) -> Result<&str, CompletionError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| CompletionError::missing_api_key(&self.api_key_env))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub(super) error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    #[serde(default)]
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) code: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Numeric status carried inside an error body, if any.
    pub(super) fn status(&self) -> Option<u16> {
        match self.code.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Render a failed response as `"<status> <detail>"`, preferring the
/// provider's `error.message`, then the raw body, then the status reason.
pub(super) fn upstream_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|message| !message.trim().is_empty())
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_default();

    format!("{} {}", status.as_u16(), detail).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_provider_error_text() {
        let body = r#"{"error":{"message":"Rate limit exceeded: free-models-per-min","code":429}}"#;
        assert_eq!(
            upstream_message(StatusCode::TOO_MANY_REQUESTS, body),
            "429 Rate limit exceeded: free-models-per-min"
        );
    }

    #[test]
    fn message_falls_back_to_raw_body_then_reason() {
        assert_eq!(
            upstream_message(StatusCode::BAD_GATEWAY, "upstream exploded"),
            "502 upstream exploded"
        );
        assert_eq!(
            upstream_message(StatusCode::TOO_MANY_REQUESTS, ""),
            "429 Too Many Requests"
        );
    }

    #[test]
    fn url_joins_without_duplicate_slashes() {
        let config = ProviderConfig {
            endpoint: "https://openrouter.ai/api/v1/".to_string(),
            ..ProviderConfig::default()
        };
        let base = HttpClientBase::from_config(&config, None).expect("client builds");
        assert_eq!(
            base.build_url("/chat/completions"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let mut config = ProviderConfig::default();
        config
            .headers
            .insert("Bad Header".to_string(), "value".to_string());
        let err = HttpClientBase::from_config(&config, None).err().expect("must fail");
        assert!(matches!(err, ClientSetupError::InvalidHeader { name } if name == "Bad Header"));
    }

    #[test]
    fn error_body_code_accepts_numbers_and_strings() {
        let numeric: ErrorEnvelope =
            serde_json::from_str(r#"{"error":{"message":"x","code":429}}"#).unwrap();
        assert_eq!(numeric.error.status(), Some(429));
        let textual: ErrorEnvelope =
            serde_json::from_str(r#"{"error":{"message":"x","code":"404"}}"#).unwrap();
        assert_eq!(textual.error.status(), Some(404));
    }
}
