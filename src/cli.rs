use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aleo")]
#[command(about = "Query blocks and transactions from an Aleo node", long_about = None)]
pub struct Cli {
    #[arg(short, long, help = "Path to the config file", default_value = "data/config.toml", global = true)]
    pub config: PathBuf,
    #[command(flatten)]
    pub node: NodeArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct NodeArgs {
    #[arg(
        short = 'u',
        long,
        global = true,
        help = "Base URL of the node. Overrides the config file"
    )]
    pub node_url: Option<String>,
}

/// Lets configuration structs pick up values given on the command line.
pub trait ApplyArgs {
    fn apply_node(&mut self, args: &NodeArgs);
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get the block at the given height
    Block {
        #[arg(help = "Block height")]
        height: u32,
    },
    /// Get the latest block
    LatestBlock,
    /// Get the hash of the latest block
    LatestHash,
    /// Get the height of the latest block
    LatestHeight,
    /// Get a transaction by its ID
    Transaction {
        #[arg(help = "Transaction ID, e.g. at1...")]
        id: String,
    },
    /// Get all transactions in the block at the given height
    Transactions {
        #[arg(help = "Block height")]
        height: u32,
    },
}
