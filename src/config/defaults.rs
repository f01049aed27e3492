use serde::{Deserialize, Serialize};

use crate::cli::{ApplyArgs, NodeArgs};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub node_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            node_url: "http://0.0.0.0:4180".to_string(),
        }
    }
}

impl ApplyArgs for ClientConfig {
    fn apply_node(&mut self, args: &NodeArgs) {
        if let Some(node_url) = &args.node_url {
            self.node_url = node_url.clone();
        }
    }
}
