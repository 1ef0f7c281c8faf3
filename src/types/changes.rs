//! Batched interaction updates applied to nodes and edges.

use super::{Dimensions, Position};

/// One interaction-driven change to a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
  Position { id: String, position: Position },
  Select { id: String, selected: bool },
  Dimensions { id: String, dimensions: Dimensions },
  Remove { id: String },
}

impl NodeChange {
  pub fn id(&self) -> &str {
    match self {
      NodeChange::Position { id, .. }
      | NodeChange::Select { id, .. }
      | NodeChange::Dimensions { id, .. }
      | NodeChange::Remove { id } => id,
    }
  }
}

/// One interaction-driven change to an edge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeChange {
  Select { id: String, selected: bool },
  Remove { id: String },
}

impl EdgeChange {
  pub fn id(&self) -> &str {
    match self {
      EdgeChange::Select { id, .. } | EdgeChange::Remove { id } => id,
    }
  }
}
