//! Port derivation: the current handles of a node, computed from its kind and data.
//!
//! Fixed-shape kinds have a static port list. The text node gets one input port
//! per distinct `{{ variable }}` marker in its template plus a single `output`.
//! Port ids depend only on the owner and the port name, so re-deriving after an
//! edit keeps the ids (and therefore the edges) of variables that still exist.

use crate::types::{Node, NodeData, NodeKind, Port, PortSet, PortSide, text_template};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::instrument;

/// `{{ identifier }}` with optional inner whitespace; identifier is a letter or
/// underscore followed by letters, digits or underscores.
static VARIABLE_MARKER: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("variable marker regex is valid")
});

/// Offsets of the condition node's `true` / `false` outputs.
const CONDITION_OUTPUT_OFFSETS: [f64; 2] = [0.35, 0.65];

/// Distinct template variables in first-occurrence order. Malformed markers are skipped.
#[instrument(level = "trace")]
pub fn derive_variables(text: &str) -> Vec<String> {
  let mut names: Vec<String> = Vec::new();
  for caps in VARIABLE_MARKER.captures_iter(text) {
    let name = &caps[1];
    if !names.iter().any(|n| n == name) {
      names.push(name.to_string());
    }
  }
  names
}

/// Static `(inputs, outputs)` role names for a kind. The text node's inputs are dynamic.
pub fn static_roles(kind: NodeKind) -> (&'static [&'static str], &'static [&'static str]) {
  match kind {
    NodeKind::Input => (&[], &["value"]),
    NodeKind::Output => (&["value"], &[]),
    NodeKind::Llm => (&["system", "prompt"], &["response"]),
    NodeKind::Text => (&[], &["output"]),
    NodeKind::Transform => (&["input"], &["output"]),
    NodeKind::Condition => (&["input"], &["true", "false"]),
    NodeKind::Api => (&["input"], &["response"]),
    NodeKind::Embedding => (&["text"], &["vector"]),
    NodeKind::Summarize => (&["input"], &["summary"]),
  }
}

/// Evenly spaced handle offsets: one port sits in the middle, `n` ports at `(i+1)/(n+1)`.
fn spread(count: usize) -> Vec<f64> {
  (0..count)
    .map(|i| (i + 1) as f64 / (count + 1) as f64)
    .collect()
}

fn offsets(kind: NodeKind, side: PortSide, count: usize) -> Vec<f64> {
  match (kind, side) {
    (NodeKind::Condition, PortSide::Output) if count == CONDITION_OUTPUT_OFFSETS.len() => {
      CONDITION_OUTPUT_OFFSETS.to_vec()
    }
    _ => spread(count),
  }
}

fn build_side(owner: &str, kind: NodeKind, side: PortSide, names: &[&str]) -> Vec<Port> {
  names
    .iter()
    .zip(offsets(kind, side, names.len()))
    .map(|(name, offset)| Port::new(owner, side, name, offset))
    .collect()
}

/// Current port set of node `node_id` of `kind` holding `data`.
#[instrument(level = "trace", skip(data))]
pub fn derive_ports(node_id: &str, kind: NodeKind, data: &NodeData) -> PortSet {
  let (static_inputs, static_outputs) = static_roles(kind);
  let inputs = if kind.has_dynamic_ports() {
    let variables = derive_variables(text_template(data));
    let names: Vec<&str> = variables.iter().map(String::as_str).collect();
    build_side(node_id, kind, PortSide::Input, &names)
  } else {
    build_side(node_id, kind, PortSide::Input, static_inputs)
  };
  let outputs = build_side(node_id, kind, PortSide::Output, static_outputs);
  PortSet { inputs, outputs }
}

/// Shorthand for [derive_ports] on a whole node.
pub fn node_ports(node: &Node) -> PortSet {
  derive_ports(&node.id, node.kind, &node.data)
}
