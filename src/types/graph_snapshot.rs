//! Point-in-time copy of the store's nodes and edges.

use serde::Serialize;

use super::{Edge, Node};

/// Point-in-time copy of the pipeline graph. Later store mutations do not affect it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSnapshot {
  pub nodes: Vec<Node>,
  pub edges: Vec<Edge>,
}

impl GraphSnapshot {
  pub fn node(&self, id: &str) -> Option<&Node> {
    self.nodes.iter().find(|n| n.id == id)
  }
}
