pub mod app;
pub mod auth;
pub mod chat;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod provider;
pub mod server;

pub use app::AppConfig;
pub use auth::{AuthConfig, SessionEntry};
pub use chat::ChatConfig;
pub use error::ConfigError;
pub use provider::ProviderConfig;
pub use server::ServerConfig;
