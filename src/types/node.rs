//! A node placed on the pipeline canvas.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::NodeKind;

/// Type-specific node content. Always a JSON object.
pub type NodeData = serde_json::Map<String, Value>;

/// Template used by a text node whose data carries no `text` yet.
pub const DEFAULT_TEXT_TEMPLATE: &str = "{{input}}";

/// Template string held by text-node `data`.
///
/// A missing (or null) `text` falls back to [DEFAULT_TEXT_TEMPLATE]; a non-string
/// value is treated as an empty template.
pub fn text_template(data: &NodeData) -> &str {
  match data.get("text") {
    None | Some(Value::Null) => DEFAULT_TEXT_TEMPLATE,
    Some(Value::String(s)) => s,
    Some(_) => "",
  }
}

/// Position in graph space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Measured size of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
  pub width: f64,
  pub height: f64,
}

/// A node in the pipeline graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: NodeKind,
  pub position: Position,
  #[serde(default)]
  pub data: NodeData,
  /// Editor-only selection flag.
  #[serde(default)]
  pub selected: bool,
  /// Editor-only measured size, reported by the renderer.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dimensions: Option<Dimensions>,
}

impl Node {
  /// Creates an unselected node with empty data.
  pub fn new(id: impl Into<String>, kind: NodeKind, position: Position) -> Self {
    Self {
      id: id.into(),
      kind,
      position,
      data: NodeData::new(),
      selected: false,
      dimensions: None,
    }
  }

  pub fn with_data(mut self, data: NodeData) -> Self {
    self.data = data;
    self
  }
}
