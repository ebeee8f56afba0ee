use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use crate::infrastructure::model::CompletionClient;
use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

/// Headers the extension's request client sends alongside JSON bodies.
const TRPC_SOURCE: HeaderName = HeaderName::from_static("x-trpc-source");
const TRPC_ACCEPT: HeaderName = HeaderName::from_static("x-trpc-accept");

pub(super) fn build_router<C>(state: Arc<ServerState<C>>, cors_origins: &[String]) -> Router
where
    C: CompletionClient + 'static,
{
    Router::new()
        .route("/api/chat", post(routes::chat::chat_handler::<C>))
        .route("/api/hello", get(routes::hello::hello_handler))
        .route("/api/session", get(routes::session::session_handler))
        .route("/api/openapi.json", get(routes::docs::openapi_handler))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, TRPC_SOURCE, TRPC_ACCEPT]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = origin.as_str(), "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

pub(super) async fn serve(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!(%addr, "Binding REST server");

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
