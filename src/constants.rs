//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/server.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Text returned when the provider answers successfully but with no content
pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, I couldn't generate a response.";

/// Text returned for an unclassified failure that carried no message
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to communicate with AI service. Please check your API key and try again.";

/// Where users toggle the provider setting that unblocks policy-restricted models
pub const PRIVACY_SETTINGS_URL: &str = "https://openrouter.ai/settings/privacy";
