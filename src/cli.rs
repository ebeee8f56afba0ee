use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "newtab-gateway",
    version,
    about = "Chat gateway for the New Tab AI browser extension"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, short)]
    pub config: Option<String>,
    /// REST bind address (overrides [server].bind)
    #[arg(long)]
    pub addr: Option<SocketAddr>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Rest)]
    pub mode: RunMode,
    /// Message to send in `ask` mode
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Serve the REST API
    Rest,
    /// Send one message through the fallback chain and print the reply
    Ask,
}
