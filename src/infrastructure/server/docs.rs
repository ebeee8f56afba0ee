use super::dto::{ErrorResponse, HelloResponse, ResponseErrorKind};
use super::routes;
use super::session::Session;
use crate::domain::{ChatRequest, ChatResponse, ConversationTurn, TurnRole};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "New Tab AI gateway"),
    paths(
        routes::chat::chat_handler,
        routes::hello::hello_handler,
        routes::session::session_handler
    ),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            ConversationTurn,
            TurnRole,
            ErrorResponse,
            ResponseErrorKind,
            HelloResponse,
            Session
        )
    ),
    tags(
        (name = "chat", description = "Assistant replies for the new-tab chat widget"),
        (name = "auth", description = "Session context"),
        (name = "meta", description = "Connectivity probes")
    )
)]
pub(super) struct ApiDoc;
