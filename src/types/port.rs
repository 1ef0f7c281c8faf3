//! Connection points (handles) derived from a node.

use serde::Serialize;

/// Which side of a node a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortSide {
  Input,
  Output,
}

/// Builds the id of the port `name` on node `owner`.
pub fn port_id(owner: &str, name: &str) -> String {
  format!("{}-{}", owner, name)
}

/// A named connection point on a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Port {
  pub id: String,
  pub side: PortSide,
  pub owner: String,
  /// Role name (`prompt`, `response`, ...) or template variable name.
  pub name: String,
  /// Relative placement along the node edge, in `(0, 1)`. Layout only.
  pub offset: f64,
}

impl Port {
  pub fn new(owner: &str, side: PortSide, name: &str, offset: f64) -> Self {
    Self {
      id: port_id(owner, name),
      side,
      owner: owner.to_string(),
      name: name.to_string(),
      offset,
    }
  }
}

/// The current ports of one node, in layout order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PortSet {
  pub inputs: Vec<Port>,
  pub outputs: Vec<Port>,
}

impl PortSet {
  pub fn find(&self, side: PortSide, id: &str) -> Option<&Port> {
    let ports = match side {
      PortSide::Input => &self.inputs,
      PortSide::Output => &self.outputs,
    };
    ports.iter().find(|p| p.id == id)
  }

  pub fn contains(&self, side: PortSide, id: &str) -> bool {
    self.find(side, id).is_some()
  }

  /// Inputs first, then outputs.
  pub fn iter(&self) -> impl Iterator<Item = &Port> {
    self.inputs.iter().chain(self.outputs.iter())
  }

  pub fn len(&self) -> usize {
    self.inputs.len() + self.outputs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
