//! Error types for node client operations.
//!
//! [`HttpError`] carries the details of a failed call, while [`ErrorKind`] collapses
//! them into the three classes callers usually branch on.

use thiserror::Error;
use url::Url;

/// Coarse classification of a failed node call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The node answered with a non-success status. Either the request was malformed
    /// or the node runs an incompatible protocol version.
    MethodNotAllowed,
    /// The node could not be reached at all.
    NetworkUnavailable,
    /// Anything else. The original error is attached to the [`HttpError`].
    Unknown,
}

/// Errors that can occur while talking to a node.
///
/// # Example
///
/// ```rust,no_run
/// use aleo_connection::http::{ErrorKind, HttpError};
///
/// fn handle_error(err: HttpError) {
///     match err.kind() {
///         ErrorKind::MethodNotAllowed => eprintln!("Node rejected the request: {}", err),
///         ErrorKind::NetworkUnavailable => eprintln!("No connection to the node: {}", err),
///         ErrorKind::Unknown => eprintln!("Unexpected error: {}", err),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// The node returned a non-success HTTP status code.
    #[error("Method is not allowed: node returned {status}: {body}")]
    MethodNotAllowed {
        /// The HTTP status code returned by the node.
        status: reqwest::StatusCode,
        /// The response body, which may contain error details.
        body: String,
    },

    /// The connection to the node could not be established.
    ///
    /// Covers DNS resolution failures, refused connections and unreachable hosts.
    #[error("No connection to the node: {0}")]
    NetworkUnavailable(#[source] reqwest::Error),

    /// The request failed after a connection was made, or the client could not be built.
    #[error("Request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// A success response carried a body that does not match the endpoint's response type.
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse the node URL.
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// The node URL has no usable origin, e.g. `file:` or `data:` URLs.
    #[error("URL '{0}' has no network origin")]
    OpaqueOrigin(Url),
}

impl HttpError {
    /// Classifies a transport error by its reqwest error type.
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_connect() {
            HttpError::NetworkUnavailable(error)
        } else {
            HttpError::RequestFailed(error)
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpError::MethodNotAllowed { .. } => ErrorKind::MethodNotAllowed,
            HttpError::NetworkUnavailable(_) => ErrorKind::NetworkUnavailable,
            HttpError::RequestFailed(_) |
            HttpError::Decode { .. } |
            HttpError::UrlError(_) |
            HttpError::OpaqueOrigin(_) => ErrorKind::Unknown,
        }
    }
}
