pub mod cli;
pub mod config;
pub mod http;
pub mod log;

pub use crate::config::ClientConfig;
pub use crate::http::{ErrorKind, HttpError, NodeClient};
