use crate::application::chat::ErrorKind;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Category of a failed API call, for clients that render errors differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseErrorKind {
    Validation,
    Unauthorized,
    PolicyRestriction,
    RateLimited,
    Unknown,
}

impl From<ErrorKind> for ResponseErrorKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::PolicyRestriction => Self::PolicyRestriction,
            ErrorKind::RateLimited => Self::RateLimited,
            ErrorKind::Unknown => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ResponseErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HelloQuery {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub greeting: String,
}
