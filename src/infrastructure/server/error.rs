use super::dto::{ErrorResponse, ResponseErrorKind};
use crate::application::chat::{ClassifiedError, ErrorKind};
use crate::domain::ValidationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Completion(#[from] ClassifiedError),
    #[error("Unauthorized")]
    Unauthorized,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Completion(err) => match err.kind {
                ErrorKind::PolicyRestriction => StatusCode::FORBIDDEN,
                ErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                ErrorKind::Unknown => StatusCode::BAD_GATEWAY,
            },
        }
    }

    fn body(self) -> ErrorResponse {
        match self {
            ApiError::Validation(err) => ErrorResponse {
                error: err.to_string(),
                kind: ResponseErrorKind::Validation,
                link: None,
            },
            ApiError::Unauthorized => ErrorResponse {
                error: "Unauthorized".to_string(),
                kind: ResponseErrorKind::Unauthorized,
                link: None,
            },
            ApiError::Completion(err) => ErrorResponse {
                error: err.message,
                kind: err.kind.into(),
                link: err.link,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.body())).into_response()
    }
}
