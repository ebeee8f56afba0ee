use super::super::dto::ErrorResponse;
use super::super::error::ApiError;
use super::super::session::RequestSession;
use super::super::state::ServerState;
use crate::domain::{ChatRequest, ChatResponse, ValidationError};
use crate::infrastructure::model::CompletionClient;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 400, description = "Malformed or empty request", body = ErrorResponse),
        (status = 403, description = "Blocked by provider privacy settings", body = ErrorResponse),
        (status = 429, description = "Provider rate limit reached", body = ErrorResponse),
        (status = 502, description = "Every candidate model failed", body = ErrorResponse)
    )
)]
pub async fn chat_handler<C: CompletionClient + 'static>(
    State(state): State<Arc<ServerState<C>>>,
    RequestSession(session): RequestSession,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        warn!(%request_id, reason = %rejection.body_text(), "Rejecting malformed /api/chat body");
        ValidationError::malformed(rejection.body_text())
    })?;

    info!(
        %request_id,
        history = request.history.len(),
        user = session.as_ref().map(|s| s.user_id.as_str()),
        "Received /api/chat request"
    );

    if let Err(error) = request.validate() {
        warn!(%request_id, %error, "Rejecting invalid /api/chat request");
        return Err(error.into());
    }

    let response = state.chat().complete(&request).await?;
    info!(%request_id, "Chat request completed successfully");
    Ok(Json(response))
}
