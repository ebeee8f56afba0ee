use super::super::dto::ErrorResponse;
use super::super::session::{RequireSession, Session};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/session",
    tag = "auth",
    responses(
        (status = 200, description = "Session attached to the bearer token", body = Session),
        (status = 401, description = "No valid session", body = ErrorResponse)
    )
)]
pub async fn session_handler(RequireSession(session): RequireSession) -> Json<Session> {
    Json(session)
}
