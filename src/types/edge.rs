//! An edge between an output port and an input port.

use serde::{Deserialize, Serialize};

/// Path style the renderer draws the edge with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
  #[default]
  SmoothStep,
}

/// Arrow marker drawn at the target end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeMarker {
  pub width: f64,
  pub height: f64,
}

impl Default for EdgeMarker {
  fn default() -> Self {
    Self {
      width: 20.0,
      height: 20.0,
    }
  }
}

/// Builds the id of the edge from `source_handle` to `target_handle`.
pub fn edge_id(source_handle: &str, target_handle: &str) -> String {
  format!("{}->{}", source_handle, target_handle)
}

/// An edge in the pipeline graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
  pub id: String,
  pub source: String,
  pub source_handle: String,
  pub target: String,
  pub target_handle: String,
  pub animated: bool,
  pub style: EdgeStyle,
  pub marker_end: EdgeMarker,
  pub selected: bool,
}

impl Edge {
  /// New animated smoothstep edge with an arrow marker, as created by a connection gesture.
  pub fn new(
    source: impl Into<String>,
    source_handle: impl Into<String>,
    target: impl Into<String>,
    target_handle: impl Into<String>,
  ) -> Self {
    let source_handle = source_handle.into();
    let target_handle = target_handle.into();
    Self {
      id: edge_id(&source_handle, &target_handle),
      source: source.into(),
      source_handle,
      target: target.into(),
      target_handle,
      animated: true,
      style: EdgeStyle::default(),
      marker_end: EdgeMarker::default(),
      selected: false,
    }
  }

  /// True if either endpoint is `node_id`.
  pub fn touches(&self, node_id: &str) -> bool {
    self.source == node_id || self.target == node_id
  }
}
