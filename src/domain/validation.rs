//! Shape checks applied at the request boundary, before the chat service runs.

use super::types::ChatRequest;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("history[{index}].content cannot be empty")]
    EmptyTurn { index: usize },
    #[error("invalid request body: {reason}")]
    Malformed { reason: String },
}

impl ValidationError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl ChatRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        if let Some(index) = self
            .history
            .iter()
            .position(|turn| turn.content.trim().is_empty())
        {
            return Err(ValidationError::EmptyTurn { index });
        }

        Ok(())
    }
}
