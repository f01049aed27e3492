// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub block_hash: String,
    pub previous_hash: String,
    pub header: Header,
    pub transactions: Vec<Transaction>,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Merkle root of the ledger up to the previous block.
    pub previous_state_root: String,
    pub transactions_root: String,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub network: u16,
    pub round: u64,
    pub height: u32,
    pub coinbase_target: u64,
    pub proof_target: u64,
    /// Unix timestamp (UTC).
    pub timestamp: i64,
}

/// A transaction as published by the node, discriminated by its `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transaction {
    Deploy { id: String, deployment: Deployment },
    Execute { id: String, execution: Execution },
}

impl Transaction {
    pub fn id(&self) -> &str {
        match self {
            Transaction::Deploy { id, .. } | Transaction::Execute { id, .. } => id,
        }
    }

    pub fn deployment(&self) -> Option<&Deployment> {
        match self {
            Transaction::Deploy { deployment, .. } => Some(deployment),
            Transaction::Execute { .. } => None,
        }
    }

    pub fn execution(&self) -> Option<&Execution> {
        match self {
            Transaction::Execute { execution, .. } => Some(execution),
            Transaction::Deploy { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub edition: u16,
    pub program: String,
    /// Function name to `(verifying key, certificate)`.
    pub verifying_keys: BTreeMap<String, (String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    pub edition: u16,
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    pub program: ProgramId,
    pub function: String,
    pub inputs: Vec<TransitionInput>,
    pub outputs: Vec<TransitionOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalize: Option<Vec<String>>,
    pub proof: String,
    /// Transition public key.
    pub tpk: String,
    /// Transition commitment.
    pub tcm: String,
    pub fee: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid program ID '{0}', expected '{{name}}.{{network}}'")]
pub struct InvalidProgramId(pub String);

/// A program identifier of the form `{name}.{network}`, e.g. `credits.aleo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProgramId {
    name: String,
    network: String,
}

impl ProgramId {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn network(&self) -> &str {
        &self.network
    }
}

impl TryFrom<String> for ProgramId {
    type Error = InvalidProgramId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.split_once('.') {
            Some((name, network)) if !name.is_empty() && !network.is_empty() && !network.contains('.') => {
                Ok(Self {
                    name: name.to_string(),
                    network: network.to_string(),
                })
            },
            _ => Err(InvalidProgramId(value)),
        }
    }
}

impl FromStr for ProgramId {
    type Err = InvalidProgramId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<ProgramId> for String {
    fn from(value: ProgramId) -> Self {
        value.to_string()
    }
}

impl Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.name, self.network)
    }
}

/// Where a record input was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Commitment(String),
    StateRoot(String),
}

/// Fields that belong to another variant (e.g. `tag` on a `public` input) are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum TransitionInput {
    /// Plaintext hash and optional plaintext.
    Constant {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    /// Plaintext hash and optional plaintext.
    Public {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    /// Ciphertext hash and optional ciphertext.
    Private {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    /// Serial number, tag and origin of the consumed record.
    Record { id: String, tag: String, origin: Origin },
    /// Input commitment to an external record. This is not the record commitment.
    ExternalRecord { id: String },
}

impl TransitionInput {
    pub fn id(&self) -> &str {
        match self {
            TransitionInput::Constant { id, .. } |
            TransitionInput::Public { id, .. } |
            TransitionInput::Private { id, .. } |
            TransitionInput::Record { id, .. } |
            TransitionInput::ExternalRecord { id } => id,
        }
    }
}

/// Fields that belong to another variant (e.g. `checksum` on a `public` output) are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum TransitionOutput {
    Constant {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Public {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Private {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    /// Commitment, checksum and optional record ciphertext.
    Record {
        id: String,
        checksum: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    /// Output commitment of an external record. This is not the record commitment.
    ExternalRecord { id: String },
}

impl TransitionOutput {
    pub fn id(&self) -> &str {
        match self {
            TransitionOutput::Constant { id, .. } |
            TransitionOutput::Public { id, .. } |
            TransitionOutput::Private { id, .. } |
            TransitionOutput::Record { id, .. } |
            TransitionOutput::ExternalRecord { id } => id,
        }
    }
}
