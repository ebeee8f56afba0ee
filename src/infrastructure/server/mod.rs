mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod session;
mod state;

pub use dto::{ErrorResponse, HelloResponse, ResponseErrorKind};
pub use error::{ApiError, ServerError};
pub use session::{RequestSession, RequireSession, Session, SessionResolver, StaticSessionResolver};
pub use state::ServerState;

use crate::application::chat::ChatService;
use crate::config::ServerConfig;
use crate::infrastructure::model::CompletionClient;
use axum::Router;
use std::sync::Arc;

/// Build the HTTP application without binding a listener.
pub fn build_app<C>(
    chat: Arc<ChatService<C>>,
    sessions: Arc<dyn SessionResolver>,
    cors_origins: &[String],
) -> Router
where
    C: CompletionClient + 'static,
{
    let state = Arc::new(ServerState::new(chat, sessions));
    router::build_router(state, cors_origins)
}

/// Serve the HTTP application until Ctrl-C.
pub async fn serve<C>(
    chat: Arc<ChatService<C>>,
    sessions: Arc<dyn SessionResolver>,
    config: &ServerConfig,
) -> Result<(), ServerError>
where
    C: CompletionClient + 'static,
{
    let app = build_app(chat, sessions, &config.cors_origins);
    router::serve(app, config.bind).await
}
