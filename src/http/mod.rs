//! HTTP client module for Aleo node REST communication.
//!
//! This module provides a typed client for the read-only endpoints of an Aleo node:
//! blocks, transactions and the chain tip.
//!
//! # Architecture
//!
//! - [`endpoint`] - The closed catalog of request paths, each tied to one response type
//! - [`NodeClient`] - One method per endpoint on top of the request dispatcher
//! - [`HttpError`] / [`ErrorKind`] - Failure details and their classification
//! - Response types ([`Block`], [`Transaction`], [`Transition`], ...) decoded from JSON
//!
//! # Error Handling
//!
//! Every call either returns the fully decoded value or exactly one [`HttpError`]:
//!
//! - Non-success status from the node: [`ErrorKind::MethodNotAllowed`]
//! - Node unreachable (DNS, refused connection): [`ErrorKind::NetworkUnavailable`]
//! - Anything else, with the original error attached: [`ErrorKind::Unknown`]
//!
//! A single attempt is made per call. Retries and timeouts are left to the caller.

pub mod endpoint;
mod error;
mod http_client;
mod node_client;
mod types;

pub use endpoint::{Endpoint, NETWORK_PREFIX};
pub use error::{ErrorKind, HttpError};
pub use node_client::NodeClient;
pub use types::{
    Block, Deployment, Execution, Header, InvalidProgramId, Metadata, Origin, ProgramId, Transaction, Transition,
    TransitionInput, TransitionOutput,
};
