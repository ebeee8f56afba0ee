pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::chat;
pub use cli::{Cli, RunMode};
pub use config::AppConfig;
pub use infrastructure::{model, server};

use application::chat::{ChatService, ChatSettings};
use domain::ChatRequest;
use infrastructure::model::{CompletionClient, OpenAiCompatibleClient};
use infrastructure::server::{SessionResolver, StaticSessionResolver};
use serde_json::json;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting newtab-gateway");
    debug!(mode = ?cli.mode, config = ?cli.config, addr = ?cli.addr, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let config = AppConfig::load(config_path)?;
    debug!(
        endpoint = config.provider.endpoint.as_str(),
        models = ?config.chat.models,
        "Configuration loaded"
    );

    let client = OpenAiCompatibleClient::from_config(&config.provider)?;
    let chat = Arc::new(ChatService::new(client, ChatSettings::from(&config.chat))?);
    info!(candidates = ?chat.candidates(), "Chat service ready");

    match cli.mode {
        RunMode::Rest => {
            let mut server_config = config.server.clone();
            if let Some(addr) = cli.addr {
                server_config.bind = addr;
            }
            let sessions: Arc<dyn SessionResolver> =
                Arc::new(StaticSessionResolver::from_config(&config.auth));
            info!(addr = %server_config.bind, "Starting REST server");
            server::serve(chat, sessions, &server_config).await?;
        }
        RunMode::Ask => {
            let request = ChatRequest::new(cli.prompt.join(" ").trim());
            ask(&chat, &request).await?;
        }
    }

    info!("Gateway finished");
    Ok(())
}

async fn ask<C: CompletionClient>(
    chat: &ChatService<C>,
    request: &ChatRequest,
) -> Result<(), Box<dyn Error>> {
    request.validate()?;
    match chat.complete(request).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(error) => {
            let output = json!({
                "error": &error.message,
                "kind": error.kind,
                "link": &error.link,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Err(error.into())
        }
    }
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
