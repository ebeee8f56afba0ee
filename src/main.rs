use clap::Parser;
use newtab_gateway::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    newtab_gateway::run(cli).await
}
