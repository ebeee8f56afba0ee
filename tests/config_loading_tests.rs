// Config loading tests - testing AppConfig::load against files on disk
//
// Tests focused on configuration file loading, defaults and validation errors.

use newtab_gateway::config::{AppConfig, ConfigError};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("server.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn returns_error_when_explicit_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/server.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn loads_full_configuration() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[provider]
endpoint = "https://llm.internal.example/v1"
api_path = "completions/chat"
api_key = "INTERNAL_LLM_KEY"
timeout_secs = 15

[provider.headers]
"HTTP-Referer" = "https://newtab.example.com"
"X-Title" = "New Tab AI (staging)"

[chat]
models = ["meta-llama/llama-3.1-8b-instruct", "mistralai/mistral-7b-instruct"]
system_prompt = "Answer in one sentence."
temperature = 0.2
max_tokens = 128

[server]
bind = "0.0.0.0:8080"
cors_origins = ["chrome-extension://abcdefghijklmnop"]

[[auth.sessions]]
token_env = "NEWTAB_DEV_TOKEN"
user_id = "dev"
name = "Local Developer"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("load config");

    assert_eq!(config.provider.endpoint, "https://llm.internal.example/v1");
    assert_eq!(config.provider.api_path, "completions/chat");
    assert_eq!(config.provider.api_key_env, "INTERNAL_LLM_KEY");
    assert_eq!(config.provider.timeout, Duration::from_secs(15));
    assert_eq!(
        config.provider.headers.get("X-Title").map(String::as_str),
        Some("New Tab AI (staging)")
    );

    assert_eq!(
        config.chat.models,
        vec![
            "meta-llama/llama-3.1-8b-instruct".to_string(),
            "mistralai/mistral-7b-instruct".to_string()
        ]
    );
    assert_eq!(config.chat.system_prompt, "Answer in one sentence.");
    assert_eq!(config.chat.max_tokens, 128);

    assert_eq!(config.server.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(config.server.cors_origins.len(), 1);

    assert_eq!(config.auth.sessions.len(), 1);
    assert_eq!(config.auth.sessions[0].user_id, "dev");
    assert_eq!(config.auth.sessions[0].email, None);
}

#[test]
fn partial_configuration_keeps_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[chat]
models = ["openai/gpt-4o-mini"]
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("load config");
    let defaults = AppConfig::default();

    assert_eq!(config.chat.models, vec!["openai/gpt-4o-mini".to_string()]);
    assert_eq!(config.chat.system_prompt, defaults.chat.system_prompt);
    assert_eq!(config.provider, defaults.provider);
    assert_eq!(config.server, defaults.server);
}

#[test]
fn default_configuration_matches_extension_backend() {
    let config = AppConfig::default();

    assert_eq!(
        config.chat.models,
        vec![
            "openai/gpt-4o-mini".to_string(),
            "anthropic/claude-3-haiku".to_string()
        ]
    );
    assert!((config.chat.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.chat.max_tokens, 500);
    assert_eq!(config.provider.endpoint, "https://openrouter.ai/api/v1");
    assert_eq!(config.provider.api_key_env, "OPENROUTER_API_KEY");
    assert!(config.provider.headers.contains_key("HTTP-Referer"));
    assert!(config.server.cors_origins.is_empty());
}

#[test]
fn returns_error_when_toml_is_invalid() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[chat\nmodels = ");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn returns_error_when_model_list_empty() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[chat]\nmodels = []\n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::NoModelsConfigured)));
}

#[test]
fn returns_error_when_endpoint_blank() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[provider]\nendpoint = \"  \"\n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::MissingEndpoint)));
}

#[test]
fn parses_configuration_from_string() {
    let config = AppConfig::from_toml_str(
        r#"
[server]
bind = "127.0.0.1:4010"
"#,
    )
    .expect("parse config");

    assert_eq!(config.server.bind.port(), 4010);
    assert_eq!(config.chat, AppConfig::default().chat);
}
