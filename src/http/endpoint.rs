//! The closed catalog of node endpoints supported by the client.
//!
//! Each endpoint is its own type implementing [`Endpoint`], which ties the request
//! path to the exact response type and the decoder used for it. The trait is sealed,
//! so the catalog cannot be extended outside this crate and asking for an unsupported
//! endpoint is a compile error rather than a runtime fallback.
//!
//! Paths are built verbatim from their parameters. Heights are not range-checked
//! locally; the node rejects heights it does not know about.

use serde::de::DeserializeOwned;

use super::types::{Block, Transaction};

/// Path prefix shared by every endpoint of the node's REST API.
pub const NETWORK_PREFIX: &str = "/testnet3";

mod sealed {
    pub trait Sealed {}
}

/// A request path paired with the type its response body decodes into.
pub trait Endpoint: sealed::Sealed {
    type Response: DeserializeOwned;

    /// The path relative to the node origin, including [`NETWORK_PREFIX`].
    fn path(&self) -> String;

    /// Decodes a successful response body.
    fn decode(&self, body: &[u8]) -> Result<Self::Response, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// `GET /testnet3/block/{height}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockByHeight(pub u32);

/// `GET /testnet3/latest/block`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestBlock;

/// `GET /testnet3/latest/hash`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestHash;

/// `GET /testnet3/latest/height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestHeight;

/// `GET /testnet3/transaction/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionById(pub String);

/// `GET /testnet3/transactions/{height}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionsByHeight(pub u32);

impl sealed::Sealed for BlockByHeight {}
impl sealed::Sealed for LatestBlock {}
impl sealed::Sealed for LatestHash {}
impl sealed::Sealed for LatestHeight {}
impl sealed::Sealed for TransactionById {}
impl sealed::Sealed for TransactionsByHeight {}

impl Endpoint for BlockByHeight {
    type Response = Block;

    fn path(&self) -> String {
        format!("{}/block/{}", NETWORK_PREFIX, self.0)
    }
}

impl Endpoint for LatestBlock {
    type Response = Block;

    fn path(&self) -> String {
        format!("{}/latest/block", NETWORK_PREFIX)
    }
}

impl Endpoint for LatestHash {
    type Response = String;

    fn path(&self) -> String {
        format!("{}/latest/hash", NETWORK_PREFIX)
    }
}

impl Endpoint for LatestHeight {
    type Response = u32;

    fn path(&self) -> String {
        format!("{}/latest/height", NETWORK_PREFIX)
    }
}

impl Endpoint for TransactionById {
    type Response = Transaction;

    fn path(&self) -> String {
        format!("{}/transaction/{}", NETWORK_PREFIX, self.0)
    }
}

impl Endpoint for TransactionsByHeight {
    type Response = Vec<Transaction>;

    fn path(&self) -> String {
        format!("{}/transactions/{}", NETWORK_PREFIX, self.0)
    }
}
