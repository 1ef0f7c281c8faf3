//! Sends the current pipeline to the validating backend and turns the answer
//! into a user-facing report.
//!
//! The wire contract is `POST {base}/pipelines/parse` with a [PipelinePayload]
//! body, answered by a [ParseResponse]. Editor-only fields (selection, measured
//! size, edge presentation) never leave the process.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::config::ValidatorConfig;
use crate::error::SubmitError;
use crate::types::{GraphSnapshot, NodeData, NodeKind, Position};

/// Node as sent to the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadNode {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: NodeKind,
  pub position: Position,
  #[serde(default)]
  pub data: NodeData,
}

/// Edge as sent to the validator. Handles are not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadEdge {
  pub id: String,
  pub source: String,
  pub target: String,
}

/// Request body of `POST /pipelines/parse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelinePayload {
  pub nodes: Vec<PayloadNode>,
  pub edges: Vec<PayloadEdge>,
}

impl PipelinePayload {
  pub fn from_snapshot(snapshot: &GraphSnapshot) -> Self {
    Self {
      nodes: snapshot
        .nodes
        .iter()
        .map(|n| PayloadNode {
          id: n.id.clone(),
          kind: n.kind,
          position: n.position,
          data: n.data.clone(),
        })
        .collect(),
      edges: snapshot
        .edges
        .iter()
        .map(|e| PayloadEdge {
          id: e.id.clone(),
          source: e.source.clone(),
          target: e.target.clone(),
        })
        .collect(),
    }
  }
}

/// Success body of `POST /pipelines/parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResponse {
  pub num_nodes: usize,
  pub num_edges: usize,
  pub is_dag: bool,
}

/// Validator verdict as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
  pub num_nodes: usize,
  pub num_edges: usize,
  pub is_dag: bool,
}

impl From<ParseResponse> for ParseSummary {
  fn from(r: ParseResponse) -> Self {
    Self {
      num_nodes: r.num_nodes,
      num_edges: r.num_edges,
      is_dag: r.is_dag,
    }
  }
}

impl fmt::Display for ParseSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Nodes: {}, Edges: {}, Is DAG: {}",
      self.num_nodes,
      self.num_edges,
      if self.is_dag { "Yes" } else { "No" }
    )
  }
}

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionReport {
  Parsed(ParseSummary),
  /// The validator answered with a non-success status.
  Rejected { status: u16, body: String },
  /// The request never produced a usable answer.
  Failed(String),
}

impl SubmissionReport {
  pub fn is_parsed(&self) -> bool {
    matches!(self, SubmissionReport::Parsed(_))
  }
}

impl From<Result<ParseResponse, SubmitError>> for SubmissionReport {
  fn from(result: Result<ParseResponse, SubmitError>) -> Self {
    match result {
      Ok(response) => SubmissionReport::Parsed(response.into()),
      Err(SubmitError::Status { status, body }) => SubmissionReport::Rejected { status, body },
      Err(e) => SubmissionReport::Failed(e.to_string()),
    }
  }
}

impl fmt::Display for SubmissionReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SubmissionReport::Parsed(summary) => write!(f, "Pipeline parsed\n{summary}"),
      SubmissionReport::Rejected { status, body } => write!(f, "Error: {status}\n{body}"),
      SubmissionReport::Failed(message) => write!(f, "Request failed: {message}"),
    }
  }
}

/// Anything that can validate a pipeline payload.
#[async_trait]
pub trait Validator: Send + Sync {
  async fn parse(&self, payload: &PipelinePayload) -> Result<ParseResponse, SubmitError>;
}

/// Validator reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpValidator {
  url: String,
  http: Client,
}

impl HttpValidator {
  pub fn new(config: &ValidatorConfig) -> Result<Self, SubmitError> {
    let http = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| SubmitError::ClientBuild(e.to_string()))?;
    Ok(Self {
      url: config.parse_url(),
      http,
    })
  }

  pub fn url(&self) -> &str {
    &self.url
  }
}

#[async_trait]
impl Validator for HttpValidator {
  #[instrument(level = "trace", skip(self, payload), fields(url = %self.url))]
  async fn parse(&self, payload: &PipelinePayload) -> Result<ParseResponse, SubmitError> {
    let response = self.http.post(&self.url).json(payload).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
      let body = if body.is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
      } else {
        body
      };
      return Err(SubmitError::Status {
        status: status.as_u16(),
        body,
      });
    }
    Ok(serde_json::from_str(&body)?)
  }
}

/// Submits `payload` to `validator` and reports the outcome. Never fails.
#[instrument(level = "trace", skip(validator, payload), fields(nodes = payload.nodes.len(), edges = payload.edges.len()))]
pub async fn submit<V: Validator + ?Sized>(validator: &V, payload: &PipelinePayload) -> SubmissionReport {
  info!(nodes = payload.nodes.len(), edges = payload.edges.len(), "submitting pipeline");
  let report = SubmissionReport::from(validator.parse(payload).await);
  match &report {
    SubmissionReport::Parsed(summary) => info!(%summary, "pipeline parsed"),
    SubmissionReport::Rejected { status, .. } => warn!(status, "validator rejected pipeline"),
    SubmissionReport::Failed(message) => warn!(%message, "submission failed"),
  }
  report
}
