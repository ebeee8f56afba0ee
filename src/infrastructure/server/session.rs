//! Optional bearer-session context attached to incoming requests.
//!
//! The chat endpoint never requires a session; [`RequireSession`] exists for
//! routes that do.

use super::error::ApiError;
use super::state::ServerState;
use crate::config::AuthConfig;
use crate::infrastructure::model::CompletionClient;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::env;
use std::sync::Arc;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Turns a bearer token into a session.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Option<Session>;
}

/// Fixed token table, typically for local development and the extension's
/// signed-in preview builds.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionResolver {
    sessions: HashMap<String, Session>,
}

impl StaticSessionResolver {
    pub fn new(sessions: impl IntoIterator<Item = (String, Session)>) -> Self {
        Self {
            sessions: sessions.into_iter().collect(),
        }
    }

    /// Entries whose token variable is unset are skipped.
    pub fn from_config(config: &AuthConfig) -> Self {
        let mut sessions = HashMap::new();
        for entry in &config.sessions {
            let token = env::var(entry.token_env.trim())
                .ok()
                .filter(|token| !token.trim().is_empty());
            let Some(token) = token else {
                warn!(
                    user_id = entry.user_id.as_str(),
                    env_var = entry.token_env.as_str(),
                    "Skipping session with no token"
                );
                continue;
            };
            sessions.insert(
                token,
                Session {
                    user_id: entry.user_id.clone(),
                    name: entry.name.clone(),
                    email: entry.email.clone(),
                },
            );
        }
        info!(sessions = sessions.len(), "Loaded static sessions");
        Self { sessions }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionResolver for StaticSessionResolver {
    async fn resolve(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).cloned()
    }
}

pub(crate) fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Session for the current request, if any.
#[derive(Debug, Clone)]
pub struct RequestSession(pub Option<Session>);

impl<C> FromRequestParts<Arc<ServerState<C>>> for RequestSession
where
    C: CompletionClient + 'static,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ServerState<C>>,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(Self(None));
        };
        let session = state.sessions().resolve(token).await;
        if session.is_none() {
            debug!("Bearer token did not match any session");
        }
        Ok(Self(session))
    }
}

/// Rejects the request with 401 unless a session is present.
#[derive(Debug, Clone)]
pub struct RequireSession(pub Session);

impl<C> FromRequestParts<Arc<ServerState<C>>> for RequireSession
where
    C: CompletionClient + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ServerState<C>>,
    ) -> Result<Self, Self::Rejection> {
        match RequestSession::from_request_parts(parts, state).await {
            Ok(RequestSession(Some(session))) => Ok(Self(session)),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/session");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn bearer_token_is_extracted_case_insensitively() {
        assert_eq!(bearer_token(&parts_with(Some("Bearer abc"))), Some("abc"));
        assert_eq!(bearer_token(&parts_with(Some("bearer abc"))), Some("abc"));
    }

    #[test]
    fn other_schemes_and_blank_tokens_are_ignored() {
        assert_eq!(bearer_token(&parts_with(Some("Basic dXNlcjpwdw=="))), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer   "))), None);
        assert_eq!(bearer_token(&parts_with(None)), None);
    }

    #[tokio::test]
    async fn static_resolver_matches_known_tokens() {
        let session = Session {
            user_id: "u1".to_string(),
            name: Some("Ada".to_string()),
            email: None,
        };
        let resolver = StaticSessionResolver::new([("token-1".to_string(), session.clone())]);
        assert_eq!(resolver.resolve("token-1").await, Some(session));
        assert_eq!(resolver.resolve("token-2").await, None);
    }

    #[test]
    fn from_config_skips_unset_token_variables() {
        let config = AuthConfig {
            sessions: vec![crate::config::SessionEntry {
                token_env: "NEWTAB_GATEWAY_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
                user_id: "ghost".to_string(),
                name: None,
                email: None,
            }],
        };
        assert!(StaticSessionResolver::from_config(&config).is_empty());
    }
}
