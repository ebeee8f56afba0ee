pub mod types;
pub mod validation;

pub use types::{
    ChatMessage, ChatRequest, ChatResponse, ConversationTurn, MessageRole, TurnRole,
};
pub use validation::ValidationError;
