use super::defaults::{DEFAULT_MAX_TOKENS, DEFAULT_MODELS, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE};
use super::error::ConfigError;
use serde::Deserialize;

/// Completion behaviour shared by every chat request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Candidate models, tried in this order
    pub models: Vec<String>,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawChatConfig {
    models: Option<Vec<String>>,
    system_prompt: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl TryFrom<RawChatConfig> for ChatConfig {
    type Error = ConfigError;

    fn try_from(raw: RawChatConfig) -> Result<Self, Self::Error> {
        let defaults = ChatConfig::default();

        let models = match raw.models {
            Some(models) => {
                if models.is_empty() {
                    return Err(ConfigError::NoModelsConfigured);
                }
                if let Some(index) = models.iter().position(|m| m.trim().is_empty()) {
                    return Err(ConfigError::BlankModel { index });
                }
                models.into_iter().map(|m| m.trim().to_string()).collect()
            }
            None => defaults.models,
        };

        let temperature = raw.temperature.unwrap_or(defaults.temperature);
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidTemperature { value: temperature });
        }

        let max_tokens = raw.max_tokens.unwrap_or(defaults.max_tokens);
        if max_tokens == 0 {
            return Err(ConfigError::ZeroMaxTokens);
        }

        Ok(Self {
            models,
            system_prompt: raw.system_prompt.unwrap_or(defaults.system_prompt),
            temperature,
            max_tokens,
        })
    }
}
