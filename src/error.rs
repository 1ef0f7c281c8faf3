//! Error types for graph mutations and pipeline submission.

use thiserror::Error;

use crate::types::PortSide;

/// A structural mutation the graph store refused. The graph is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
  #[error("node '{0}' already exists")]
  DuplicateNode(String),

  #[error("node '{0}' not found")]
  NodeNotFound(String),

  #[error("node '{node_id}' has no {side:?} port '{port_id}'")]
  PortNotFound {
    node_id: String,
    port_id: String,
    side: PortSide,
  },

  #[error("cannot connect port '{0}' to itself")]
  SamePort(String),

  #[error("edge '{0}' already exists")]
  DuplicateEdge(String),

  #[error("edge '{0}' not found")]
  EdgeNotFound(String),

  #[error("node data patch must be a JSON object")]
  InvalidPatch,

  #[error("node '{node_id}' data key '{key}' cannot be changed or removed")]
  ReservedKey { node_id: String, key: String },
}

/// Failure while sending a pipeline to the validator.
#[derive(Error, Debug)]
pub enum SubmitError {
  /// Transport-level failure (connect, timeout, body read).
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  /// The validator answered with a non-success status.
  #[error("validator returned {status}: {body}")]
  Status { status: u16, body: String },

  /// The success body was not the expected JSON shape.
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("failed to build HTTP client: {0}")]
  ClientBuild(String),
}
