//! Mapping from a raw upstream failure to a user-facing error.

use crate::constants::{GENERIC_FAILURE_MESSAGE, PRIVACY_SETTINGS_URL};
use crate::infrastructure::model::CompletionError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const POLICY_RESTRICTION_MESSAGE: &str = "This model is unavailable with your current OpenRouter privacy settings. Enable the data policy option that allows this provider in your privacy settings, then try again.";

pub const RATE_LIMITED_MESSAGE: &str =
    "The AI service is rate limited right now. Please wait about a minute and try again.";

const POLICY_MARKERS: &[&str] = &["data policy", "privacy settings"];
const RATE_LIMIT_MARKERS: &[&str] = &["429", "Rate limit", "rate limit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    PolicyRestriction,
    RateLimited,
    Unknown,
}

/// Terminal failure of a chat completion, ready to show to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
    /// Actionable link, present for [`ErrorKind::PolicyRestriction`]
    pub link: Option<String>,
}

impl ClassifiedError {
    pub fn policy_restriction() -> Self {
        Self {
            kind: ErrorKind::PolicyRestriction,
            message: POLICY_RESTRICTION_MESSAGE.to_string(),
            link: Some(PRIVACY_SETTINGS_URL.to_string()),
        }
    }

    pub fn rate_limited() -> Self {
        Self {
            kind: ErrorKind::RateLimited,
            message: RATE_LIMITED_MESSAGE.to_string(),
            link: None,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            kind: ErrorKind::Unknown,
            message,
            link: None,
        }
    }
}

impl From<&CompletionError> for ClassifiedError {
    fn from(error: &CompletionError) -> Self {
        classify_message(&error.to_string(), error.status())
    }
}

pub fn classify(error: &CompletionError) -> ClassifiedError {
    ClassifiedError::from(error)
}

/// Policy markers win over rate-limit markers; anything else keeps its text.
pub fn classify_message(message: &str, status: Option<u16>) -> ClassifiedError {
    if POLICY_MARKERS.iter().any(|marker| message.contains(marker)) {
        return ClassifiedError::policy_restriction();
    }

    if status == Some(429) || RATE_LIMIT_MARKERS.iter().any(|marker| message.contains(marker)) {
        return ClassifiedError::rate_limited();
    }

    ClassifiedError::unknown(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_policy_is_policy_restriction_with_link() {
        let classified = classify_message("You must enable data policy settings", None);
        assert_eq!(classified.kind, ErrorKind::PolicyRestriction);
        assert_eq!(classified.message, POLICY_RESTRICTION_MESSAGE);
        assert_eq!(classified.link.as_deref(), Some(PRIVACY_SETTINGS_URL));
    }

    #[test]
    fn privacy_settings_is_policy_restriction() {
        let classified = classify_message(
            "404 No endpoints found matching your data policy. Configure: privacy settings",
            Some(404),
        );
        assert_eq!(classified.kind, ErrorKind::PolicyRestriction);
    }

    #[test]
    fn policy_outranks_rate_limit() {
        let classified = classify_message("429 blocked by data policy", Some(429));
        assert_eq!(classified.kind, ErrorKind::PolicyRestriction);
    }

    #[test]
    fn rate_limit_markers_classify_as_rate_limited() {
        for message in ["429 Too Many Requests", "Rate limit exceeded", "hit a rate limit"] {
            let classified = classify_message(message, None);
            assert_eq!(classified.kind, ErrorKind::RateLimited, "{message}");
            assert_eq!(classified.message, RATE_LIMITED_MESSAGE);
            assert!(classified.link.is_none());
        }
    }

    #[test]
    fn status_429_alone_is_rate_limited() {
        let classified = classify_message("slow down", Some(429));
        assert_eq!(classified.kind, ErrorKind::RateLimited);
    }

    #[test]
    fn unmatched_message_is_preserved_verbatim() {
        let classified = classify_message("network timeout", None);
        assert_eq!(classified.kind, ErrorKind::Unknown);
        assert_eq!(classified.message, "network timeout");
        assert!(classified.link.is_none());
    }

    #[test]
    fn empty_message_uses_generic_text() {
        let classified = classify_message("", None);
        assert_eq!(classified.kind, ErrorKind::Unknown);
        assert_eq!(classified.message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn classifies_completion_errors_by_display_and_status() {
        let error = CompletionError::upstream(Some(429), "429 Provider returned error");
        assert_eq!(classify(&error).kind, ErrorKind::RateLimited);

        let error = CompletionError::missing_api_key("OPENROUTER_API_KEY");
        let classified = classify(&error);
        assert_eq!(classified.kind, ErrorKind::Unknown);
        assert_eq!(classified.message, error.to_string());
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&ErrorKind::PolicyRestriction).unwrap();
        assert_eq!(json, "\"policy_restriction\"");
    }
}
