use super::error::ConfigError;
use serde::Deserialize;

/// Bearer sessions accepted by the session probe.
///
/// ```toml
/// [[auth.sessions]]
/// token_env = "NEWTAB_DEV_TOKEN"
/// user_id = "dev"
/// name = "Local Developer"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub sessions: Vec<SessionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    /// Environment variable holding the bearer token
    pub token_env: String,
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawAuthConfig {
    #[serde(default)]
    sessions: Vec<RawSessionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawSessionEntry {
    token_env: Option<String>,
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
}

impl TryFrom<RawAuthConfig> for AuthConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAuthConfig) -> Result<Self, Self::Error> {
        let mut sessions = Vec::with_capacity(raw.sessions.len());
        for (index, entry) in raw.sessions.into_iter().enumerate() {
            let token_env = required(entry.token_env, index, "token_env")?;
            let user_id = required(entry.user_id, index, "user_id")?;
            sessions.push(SessionEntry {
                token_env,
                user_id,
                name: entry.name,
                email: entry.email,
            });
        }
        Ok(Self { sessions })
    }
}

fn required(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::IncompleteSession { index, field })
}
