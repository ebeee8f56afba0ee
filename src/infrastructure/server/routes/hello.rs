use super::super::dto::{HelloQuery, HelloResponse};
use axum::Json;
use axum::extract::Query;
use tracing::debug;

/// Connectivity probe used by the extension before it opens the chat panel.
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "meta",
    params(HelloQuery),
    responses(
        (status = 200, description = "Greeting", body = HelloResponse)
    )
)]
pub async fn hello_handler(Query(query): Query<HelloQuery>) -> Json<HelloResponse> {
    debug!(text = query.text.as_str(), "Serving /api/hello request");
    Json(HelloResponse {
        greeting: format!("Hello {}", query.text),
    })
}
