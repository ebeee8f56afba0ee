use super::classify::{ClassifiedError, classify};
use crate::config::{ChatConfig, ConfigError};
use crate::constants::{EMPTY_REPLY_FALLBACK, GENERIC_FAILURE_MESSAGE};
use crate::domain::{ChatMessage, ChatRequest, ChatResponse};
use crate::infrastructure::model::{CompletionClient, CompletionRequest};
use tracing::{debug, error, info, warn};

/// Per-process completion settings, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    /// Candidate models, tried strictly in this order
    pub models: Vec<String>,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl From<&ChatConfig> for ChatSettings {
    fn from(config: &ChatConfig) -> Self {
        Self {
            models: config.models.clone(),
            system_prompt: config.system_prompt.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::from(&ChatConfig::default())
    }
}

/// Produces one assistant reply per request, falling back across the
/// candidate models until one succeeds.
///
/// Holds no mutable state; a single instance is shared by all requests.
pub struct ChatService<C: CompletionClient> {
    client: C,
    settings: ChatSettings,
}

impl<C: CompletionClient> ChatService<C> {
    pub fn new(client: C, settings: ChatSettings) -> Result<Self, ConfigError> {
        if settings.models.is_empty() {
            return Err(ConfigError::NoModelsConfigured);
        }
        Ok(Self { client, settings })
    }

    pub fn candidates(&self) -> &[String] {
        &self.settings.models
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// System instruction, then history in order, then the new user turn.
    pub fn build_messages(&self, request: &ChatRequest) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(request.history.len() + 2);
        messages.push(ChatMessage::system(self.settings.system_prompt.clone()));
        messages.extend(request.history.iter().map(ChatMessage::from));
        messages.push(ChatMessage::user(request.message.clone()));
        messages
    }

    /// Try each candidate in order and return the first reply.
    ///
    /// Failures before the last candidate are only logged. The last
    /// candidate's failure is the one classified and returned.
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ClassifiedError> {
        let messages = self.build_messages(request);
        let total = self.settings.models.len();
        debug!(
            history = request.history.len(),
            candidates = total,
            "Assembled prompt for completion"
        );

        for (index, model) in self.settings.models.iter().enumerate() {
            let attempt = index + 1;
            info!(model = model.as_str(), attempt, candidates = total, "Attempting completion");

            let completion = CompletionRequest {
                model: model.clone(),
                messages: messages.clone(),
                temperature: self.settings.temperature,
                max_tokens: self.settings.max_tokens,
            };

            match self.client.complete(completion).await {
                Ok(response) => {
                    info!(model = model.as_str(), attempt, "Completion succeeded");
                    let response = response
                        .content
                        .filter(|content| !content.is_empty())
                        .unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string());
                    return Ok(ChatResponse { response });
                }
                Err(err) if attempt < total => {
                    warn!(
                        model = model.as_str(),
                        attempt,
                        error = %err,
                        "Candidate model failed, trying next"
                    );
                }
                Err(err) => {
                    let classified = classify(&err);
                    error!(
                        model = model.as_str(),
                        attempt,
                        error = %err,
                        kind = ?classified.kind,
                        "All candidate models failed"
                    );
                    return Err(classified);
                }
            }
        }

        Err(ClassifiedError::unknown(GENERIC_FAILURE_MESSAGE))
    }
}
