use aleo_connection::cli::{ApplyArgs, Cli, Commands};
use aleo_connection::config::{client_config, load_configuration};
use aleo_connection::http::NodeClient;
use aleo_connection::log::init_logging;
use anyhow::Context;
use clap::Parser;
use log::info;
use serde::Serialize;
use url::Url;

fn print_json<T: Serialize>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    init_logging()?;

    let cfg = load_configuration(&cli.config)?;
    let mut client_cfg = client_config(&cfg)?;
    client_cfg.apply_node(&cli.node);

    let base_url = Url::parse(&client_cfg.node_url).context("Invalid node URL")?;
    let client = NodeClient::new(base_url)?;
    info!(origin = client.origin(); "Connecting to node");

    match cli.command {
        Commands::Block { height } => print_json(&client.get_block(height).await?),
        Commands::LatestBlock => print_json(&client.get_latest_block().await?),
        Commands::LatestHash => print_json(&client.get_latest_hash().await?),
        Commands::LatestHeight => print_json(&client.get_latest_height().await?),
        Commands::Transaction { id } => print_json(&client.get_transaction(&id).await?),
        Commands::Transactions { height } => print_json(&client.get_transactions(height).await?),
    }
}
