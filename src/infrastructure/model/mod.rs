//! Model infrastructure module
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - the `CompletionClient` capability
//! - `clients` - HTTP client implementations

pub mod clients;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use clients::OpenAiCompatibleClient;
pub use traits::CompletionClient;
pub use types::{ClientSetupError, CompletionError, CompletionRequest, CompletionResponse};
