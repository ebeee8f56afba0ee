use super::super::docs::ApiDoc;
use axum::Json;
use utoipa::OpenApi;

pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
