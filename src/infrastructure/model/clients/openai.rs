//! OpenAI-compatible client implementation (OpenRouter, OpenAI, Groq, ...)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::base::{ErrorBody, HttpClientBase, resolve_api_key};
use crate::config::ProviderConfig;
use crate::domain::ChatMessage;
use crate::infrastructure::model::traits::CompletionClient;
use crate::infrastructure::model::types::{
    ClientSetupError, CompletionError, CompletionRequest, CompletionResponse,
};

#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    base: HttpClientBase,
    api_path: String,
}

impl OpenAiCompatibleClient {
    /// Build a client, reading the API key from the configured variable.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ClientSetupError> {
        let api_key = resolve_api_key(&config.api_key_env);
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: &ProviderConfig,
        api_key: Option<String>,
    ) -> Result<Self, ClientSetupError> {
        info!(
            endpoint = config.endpoint.as_str(),
            api_key_configured = api_key.is_some(),
            headers = config.headers.len(),
            "Configured OpenAI-compatible provider"
        );
        Ok(Self {
            base: HttpClientBase::from_config(config, api_key)?,
            api_path: config.api_path.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatibleClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let url = self.base.build_url(&self.api_path);

        let payload = OpenAiRequest {
            model: &request.model,
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };

        debug!(
            model = request.model.as_str(),
            messages = request.messages.len(),
            "Sending request to OpenAI-compatible provider"
        );

        let response: OpenAiResponse = self
            .base
            .post_with_bearer(&request.model, &url, &payload)
            .await?;

        // Some gateways report failures inside a 200 body.
        if let Some(error) = response.error {
            let status = error.status();
            let message = error.message.unwrap_or_default();
            let message = match status {
                Some(code) => format!("{code} {message}"),
                None => message,
            };
            return Err(CompletionError::upstream(status, message.trim_end()));
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::invalid_response(&request.model, "no choices"))?;

        let content = choice.message.and_then(|m| m.content);
        debug!(
            model = request.model.as_str(),
            has_content = content.is_some(),
            "Received response from OpenAI-compatible provider"
        );

        Ok(CompletionResponse::new(request.model, content))
    }
}

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for OpenAiMessage<'a> {
    fn from(message: &'a ChatMessage) -> Self {
        Self {
            role: message.role.as_str(),
            content: &message.content,
        }
    }
}

#[derive(Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: Option<OpenAiResponseMessage>,
}

#[derive(Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}
