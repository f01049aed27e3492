//! High-level client for querying an Aleo node.
//!
//! [`NodeClient`] exposes one method per supported endpoint. Every method builds the
//! path through the endpoint registry and hands it to the dispatcher; nothing else
//! happens client-side (no pagination, filtering, retries or caching).
//!
//! # Example
//!
//! ```rust,no_run
//! use url::Url;
//! use aleo_connection::http::NodeClient;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = NodeClient::new(Url::parse("http://0.0.0.0:4180")?)?;
//!
//! let height = client.get_latest_height().await?;
//! let block = client.get_block(height).await?;
//! println!("Block {} has {} transactions", block.block_hash, block.transactions.len());
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};
use url::Url;

use super::endpoint::{
    BlockByHeight, Endpoint, LatestBlock, LatestHash, LatestHeight, TransactionById, TransactionsByHeight,
};
use super::error::HttpError;
use super::http_client::HttpClient;
use super::types::{Block, Transaction};

/// Client for the read-only REST endpoints of an Aleo node.
///
/// Only the origin (scheme, host and port) of the URL given at construction is kept.
/// The client is cheap to clone and can be shared between tasks; calls are independent
/// and may complete in any order.
#[derive(Debug, Clone)]
pub struct NodeClient {
    http_client: HttpClient,
}

impl NodeClient {
    /// Creates a client for the node at `base_url`.
    ///
    /// Any path or query on `base_url` is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::OpaqueOrigin`] if the URL has no network origin, or
    /// [`HttpError::RequestFailed`] if the HTTP client cannot be initialized.
    pub fn new(base_url: Url) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(base_url)?;
        Ok(Self { http_client })
    }

    /// Creates a client that sends requests through a caller-built [`reqwest::Client`].
    ///
    /// Useful for imposing a timeout, which the default client does not have.
    pub fn with_client(base_url: Url, client: reqwest::Client) -> Result<Self, HttpError> {
        let http_client = HttpClient::with_client(base_url, client)?;
        Ok(Self { http_client })
    }

    /// Returns the node origin, e.g. `http://0.0.0.0:4180`.
    pub fn origin(&self) -> &str {
        self.http_client.origin()
    }

    /// Fetches any endpoint from the catalog, decoded into its response type.
    pub async fn get<E: Endpoint>(&self, endpoint: E) -> Result<E::Response, HttpError> {
        self.http_client.send(&endpoint).await
    }

    /// Returns the block at the given height.
    pub async fn get_block(&self, height: u32) -> Result<Block, HttpError> {
        debug!(height = height; "HTTP: Requesting block");
        self.get(BlockByHeight(height)).await
    }

    /// Returns the latest block.
    pub async fn get_latest_block(&self) -> Result<Block, HttpError> {
        debug!("HTTP: Requesting latest block");
        self.get(LatestBlock).await
    }

    /// Returns the hash of the latest block.
    pub async fn get_latest_hash(&self) -> Result<String, HttpError> {
        debug!("HTTP: Requesting latest block hash");
        self.get(LatestHash).await
    }

    /// Returns the height of the latest block.
    pub async fn get_latest_height(&self) -> Result<u32, HttpError> {
        debug!("HTTP: Requesting latest block height");
        self.get(LatestHeight).await
    }

    /// Returns the transaction with the given ID.
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, HttpError> {
        debug!(id = id; "HTTP: Requesting transaction");
        self.get(TransactionById(id.to_string())).await
    }

    /// Returns the transactions of the block at the given height, in block order.
    pub async fn get_transactions(&self, height: u32) -> Result<Vec<Transaction>, HttpError> {
        debug!(height = height; "HTTP: Requesting block transactions");
        self.get(TransactionsByHeight(height)).await
    }

    /// Checks whether the node answers the latest height query.
    pub async fn is_online(&self) -> bool {
        match self.get_latest_height().await {
            Ok(_) => {
                debug!("Node is online");
                true
            },
            Err(e) => {
                warn!(
                    error:? = e;
                    "Node is offline"
                );
                false
            },
        }
    }
}
