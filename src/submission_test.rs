//! Tests for the submission adapter.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::config::ValidatorConfig;
use crate::error::SubmitError;
use crate::submission::{
  HttpValidator, ParseResponse, ParseSummary, PipelinePayload, SubmissionReport, Validator, submit,
};
use crate::types::{Edge, GraphSnapshot, Node, NodeKind, Position};

/// Answers every request with a fixed result and records what it was sent.
struct FakeValidator {
  answer: fn() -> Result<ParseResponse, SubmitError>,
  seen: Mutex<Vec<PipelinePayload>>,
}

impl FakeValidator {
  fn new(answer: fn() -> Result<ParseResponse, SubmitError>) -> Self {
    Self {
      answer,
      seen: Mutex::new(Vec::new()),
    }
  }
}

#[async_trait]
impl Validator for FakeValidator {
  async fn parse(&self, payload: &PipelinePayload) -> Result<ParseResponse, SubmitError> {
    self.seen.lock().unwrap().push(payload.clone());
    (self.answer)()
  }
}

fn two_node_snapshot() -> GraphSnapshot {
  let mut a = Node::new("input-1", NodeKind::Input, Position::new(1.0, 2.0));
  a.selected = true;
  let b = Node::new("output-2", NodeKind::Output, Position::new(3.0, 4.0));
  GraphSnapshot {
    nodes: vec![a, b],
    edges: vec![Edge::new("input-1", "input-1-value", "output-2", "output-2-value")],
  }
}

#[test]
fn payload_keeps_only_wire_fields() {
  let payload = PipelinePayload::from_snapshot(&two_node_snapshot());
  let v = serde_json::to_value(&payload).unwrap();
  assert_eq!(
    v,
    json!({
      "nodes": [
        { "id": "input-1", "type": "input", "position": { "x": 1.0, "y": 2.0 }, "data": {} },
        { "id": "output-2", "type": "output", "position": { "x": 3.0, "y": 4.0 }, "data": {} }
      ],
      "edges": [
        { "id": "input-1-value->output-2-value", "source": "input-1", "target": "output-2" }
      ]
    })
  );
}

#[test]
fn empty_graph_payload() {
  let payload = PipelinePayload::from_snapshot(&GraphSnapshot::default());
  assert_eq!(
    serde_json::to_value(&payload).unwrap(),
    json!({ "nodes": [], "edges": [] })
  );
}

#[test]
fn summary_format() {
  let s = ParseSummary {
    num_nodes: 2,
    num_edges: 1,
    is_dag: true,
  };
  assert_eq!(s.to_string(), "Nodes: 2, Edges: 1, Is DAG: Yes");
  let s = ParseSummary { is_dag: false, ..s };
  assert_eq!(s.to_string(), "Nodes: 2, Edges: 1, Is DAG: No");
}

#[test]
fn report_formats() {
  let parsed = SubmissionReport::Parsed(ParseSummary {
    num_nodes: 2,
    num_edges: 1,
    is_dag: true,
  });
  assert_eq!(parsed.to_string(), "Pipeline parsed\nNodes: 2, Edges: 1, Is DAG: Yes");
  assert!(parsed.is_parsed());

  let rejected = SubmissionReport::Rejected {
    status: 422,
    body: "bad graph".to_string(),
  };
  assert_eq!(rejected.to_string(), "Error: 422\nbad graph");

  let failed = SubmissionReport::Failed("connection refused".to_string());
  assert_eq!(failed.to_string(), "Request failed: connection refused");
  assert!(!failed.is_parsed());
}

#[test]
fn response_decodes_from_backend_shape() {
  let r: ParseResponse =
    serde_json::from_str(r#"{"num_nodes":3,"num_edges":2,"is_dag":false}"#).unwrap();
  assert_eq!(
    r,
    ParseResponse {
      num_nodes: 3,
      num_edges: 2,
      is_dag: false
    }
  );
}

#[tokio::test]
async fn submit_success_is_parsed() {
  let validator = FakeValidator::new(|| {
    Ok(ParseResponse {
      num_nodes: 2,
      num_edges: 1,
      is_dag: true,
    })
  });
  let payload = PipelinePayload::from_snapshot(&two_node_snapshot());
  let report = submit(&validator, &payload).await;
  assert_eq!(report.to_string(), "Pipeline parsed\nNodes: 2, Edges: 1, Is DAG: Yes");
  assert_eq!(validator.seen.lock().unwrap().as_slice(), &[payload]);
}

#[tokio::test]
async fn submit_status_error_is_rejected() {
  let validator = FakeValidator::new(|| {
    Err(SubmitError::Status {
      status: 500,
      body: "Internal Server Error".to_string(),
    })
  });
  let report = submit(&validator, &PipelinePayload::default()).await;
  assert_eq!(
    report,
    SubmissionReport::Rejected {
      status: 500,
      body: "Internal Server Error".to_string()
    }
  );
}

#[tokio::test]
async fn submit_decode_error_is_failed() {
  let validator =
    FakeValidator::new(|| Err(serde_json::from_str::<ParseResponse>("{").unwrap_err().into()));
  let report = submit(&validator, &PipelinePayload::default()).await;
  assert!(matches!(report, SubmissionReport::Failed(_)));
  assert!(report.to_string().starts_with("Request failed: JSON error"));
}

#[test]
fn submit_through_dyn_validator() {
  let validator: Box<dyn Validator> = Box::new(FakeValidator::new(|| {
    Ok(ParseResponse {
      num_nodes: 0,
      num_edges: 0,
      is_dag: true,
    })
  }));
  let report = tokio_test::block_on(submit(validator.as_ref(), &PipelinePayload::default()));
  assert!(report.is_parsed());
}

#[test]
fn http_validator_targets_parse_endpoint() {
  let v = HttpValidator::new(&ValidatorConfig::new("http://127.0.0.1:9/")).unwrap();
  assert_eq!(v.url(), "http://127.0.0.1:9/pipelines/parse");
}
