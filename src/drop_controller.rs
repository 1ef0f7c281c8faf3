//! Turns a drag-and-drop gesture on the canvas into a new node.
//!
//! A drop is accepted only inside the canvas bounds. The dragged payload names
//! the node kind either as a bare tag (`llm`) or as a JSON object
//! (`{"nodeType": "llm"}`). Anything else is ignored and logged; a drop never
//! surfaces an error to the user.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::error::StoreError;
use crate::id_generator::IdGenerator;
use crate::placement::to_graph_space;
use crate::store::GraphStore;
use crate::types::{CanvasBounds, Node, NodeData, NodeKind, Point, ViewportTransform};

/// Data-transfer slot the palette writes the dragged node type into.
pub const DRAG_MEDIA_TYPE: &str = "application/reactflow";

/// A drop at client coordinate `client` carrying data-transfer `data` (media type -> payload).
#[derive(Debug, Clone, Default)]
pub struct DropEvent {
  pub client: Point,
  pub data: HashMap<String, String>,
}

impl DropEvent {
  /// Drop carrying `payload` under [DRAG_MEDIA_TYPE].
  pub fn new(client: Point, payload: impl Into<String>) -> Self {
    let mut data = HashMap::new();
    data.insert(DRAG_MEDIA_TYPE.to_string(), payload.into());
    Self { client, data }
  }

  pub fn payload(&self) -> Option<&str> {
    self.data.get(DRAG_MEDIA_TYPE).map(String::as_str)
  }
}

/// Canvas geometry known to the editor. Both parts arrive from the renderer and
/// may be missing until it has mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Canvas {
  pub bounds: Option<CanvasBounds>,
  pub viewport: Option<ViewportTransform>,
}

/// Why a drop did not create a node.
#[derive(Debug, Clone, PartialEq)]
pub enum IgnoreReason {
  NoCanvasBounds,
  OutsideCanvas(Point),
  MissingPayload,
  MalformedPayload(String),
  UnknownKind(String),
  Rejected(StoreError),
}

impl fmt::Display for IgnoreReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IgnoreReason::NoCanvasBounds => write!(f, "canvas bounds unknown"),
      IgnoreReason::OutsideCanvas(p) => write!(f, "drop at ({}, {}) is outside the canvas", p.x, p.y),
      IgnoreReason::MissingPayload => write!(f, "no node type in drag payload"),
      IgnoreReason::MalformedPayload(raw) => write!(f, "unusable drag payload: {raw}"),
      IgnoreReason::UnknownKind(tag) => write!(f, "unknown node type '{tag}'"),
      IgnoreReason::Rejected(e) => write!(f, "store rejected node: {e}"),
    }
  }
}

/// Result of handling one drop.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
  Created(String),
  Ignored(IgnoreReason),
}

impl DropOutcome {
  pub fn created(&self) -> Option<&str> {
    match self {
      DropOutcome::Created(id) => Some(id),
      DropOutcome::Ignored(_) => None,
    }
  }
}

/// Extracts the node type tag from a drag payload.
///
/// JSON payloads must be an object with a string `nodeType`; text that is not
/// JSON is taken as the tag itself.
pub fn parse_type_token(payload: &str) -> Result<String, IgnoreReason> {
  let trimmed = payload.trim();
  if trimmed.is_empty() {
    return Err(IgnoreReason::MissingPayload);
  }
  match serde_json::from_str::<Value>(trimmed) {
    Ok(Value::Object(obj)) => match obj.get("nodeType") {
      Some(Value::String(tag)) if !tag.is_empty() => Ok(tag.clone()),
      Some(Value::String(_)) | None => Err(IgnoreReason::MissingPayload),
      Some(_) => Err(IgnoreReason::MalformedPayload(trimmed.to_string())),
    },
    Ok(_) => Err(IgnoreReason::MalformedPayload(trimmed.to_string())),
    Err(_) => Ok(trimmed.to_string()),
  }
}

fn ignored(reason: IgnoreReason) -> DropOutcome {
  debug!(reason = %reason, "drop ignored");
  DropOutcome::Ignored(reason)
}

/// Handles a drop on `canvas`: resolves the kind, places it in graph space and
/// inserts a fresh node into `store` with an id from `ids`.
#[instrument(level = "trace", skip(store, ids))]
pub fn handle_drop(
  event: &DropEvent,
  canvas: &Canvas,
  store: &mut GraphStore,
  ids: &mut IdGenerator,
) -> DropOutcome {
  let Some(bounds) = canvas.bounds else {
    return ignored(IgnoreReason::NoCanvasBounds);
  };
  if !bounds.contains(event.client) {
    return ignored(IgnoreReason::OutsideCanvas(event.client));
  }
  let Some(payload) = event.payload() else {
    return ignored(IgnoreReason::MissingPayload);
  };
  let tag = match parse_type_token(payload) {
    Ok(tag) => tag,
    Err(reason) => return ignored(reason),
  };
  let Some(kind) = NodeKind::from_tag(&tag) else {
    return ignored(IgnoreReason::UnknownKind(tag));
  };

  let position = to_graph_space(bounds.relative(event.client), canvas.viewport);
  let id = ids.next(kind);
  let mut data = NodeData::new();
  data.insert("id".to_string(), json!(id));
  data.insert("nodeType".to_string(), json!(kind.tag()));
  let node = Node::new(id.clone(), kind, position).with_data(data);

  match store.insert_node(node) {
    Ok(()) => {
      debug!(node_id = %id, kind = %kind, x = position.x, y = position.y, "node created from drop");
      DropOutcome::Created(id)
    }
    Err(e) => ignored(IgnoreReason::Rejected(e)),
  }
}
