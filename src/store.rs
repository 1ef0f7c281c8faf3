//! The graph store: canonical node and edge state for one editing session.
//!
//! Every mutation goes through [GraphStore] so that the structural invariants
//! hold between any two operations:
//!
//! - node ids are unique;
//! - every edge names existing nodes, and its handles name ports that exist on
//!   those nodes right now (source handle among the source's outputs, target
//!   handle among the target's inputs).
//!
//! Operations are all-or-nothing. A rejected operation returns a [StoreError]
//! and leaves the graph untouched. Successful mutations are announced on a
//! broadcast channel (see [GraphStore::subscribe]).

use crate::error::StoreError;
use crate::ports::{derive_ports, node_ports};
use crate::types::{
  Edge, EdgeChange, GraphSnapshot, Node, NodeChange, NodeData, NodeKind, PortSet, PortSide,
};
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, instrument};

/// Events buffered per subscriber before the slowest one starts lagging.
const EVENT_CAPACITY: usize = 256;

/// False when `key: value` would change the identity a node's data carries.
fn keeps_identity(node_id: &str, kind: NodeKind, key: &str, value: &Value) -> bool {
  match key {
    "id" => value.as_str() == Some(node_id),
    "nodeType" => value.as_str().and_then(NodeKind::from_tag) == Some(kind),
    _ => true,
  }
}

/// Notification of a committed store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
  NodeInserted(String),
  NodeRemoved(String),
  NodeDataUpdated(String),
  /// A batch of position/selection/dimension changes was applied.
  NodesChanged,
  EdgeAdded(String),
  EdgeRemoved(String),
  /// A batch of edge selection changes was applied.
  EdgesChanged,
}

/// Canonical node/edge state. Owned by the session and mutated through `&mut`.
#[derive(Debug)]
pub struct GraphStore {
  nodes: Vec<Node>,
  edges: Vec<Edge>,
  events: broadcast::Sender<StoreEvent>,
}

impl Default for GraphStore {
  fn default() -> Self {
    Self::new()
  }
}

impl GraphStore {
  pub fn new() -> Self {
    let (events, _) = broadcast::channel(EVENT_CAPACITY);
    Self {
      nodes: Vec::new(),
      edges: Vec::new(),
      events,
    }
  }

  /// Receives every event committed after this call.
  pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
    self.events.subscribe()
  }

  fn emit(&self, event: StoreEvent) {
    // No subscribers is fine.
    let _ = self.events.send(event);
  }

  /// Nodes in insertion (z-) order.
  pub fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn node(&self, id: &str) -> Option<&Node> {
    self.nodes.iter().find(|n| n.id == id)
  }

  pub fn edge(&self, id: &str) -> Option<&Edge> {
    self.edges.iter().find(|e| e.id == id)
  }

  fn node_index(&self, id: &str) -> Result<usize, StoreError> {
    self
      .nodes
      .iter()
      .position(|n| n.id == id)
      .ok_or_else(|| StoreError::NodeNotFound(id.to_string()))
  }

  /// Current port set of node `id`.
  pub fn ports(&self, id: &str) -> Option<PortSet> {
    self.node(id).map(node_ports)
  }

  /// Copy of the current nodes and edges.
  pub fn snapshot(&self) -> GraphSnapshot {
    GraphSnapshot {
      nodes: self.nodes.clone(),
      edges: self.edges.clone(),
    }
  }

  /// Adds `node`. Rejects an id that is already present.
  #[instrument(level = "trace", skip(self, node), fields(node_id = %node.id, kind = %node.kind))]
  pub fn insert_node(&mut self, node: Node) -> Result<(), StoreError> {
    if self.node(&node.id).is_some() {
      return Err(StoreError::DuplicateNode(node.id));
    }
    let id = node.id.clone();
    self.nodes.push(node);
    self.emit(StoreEvent::NodeInserted(id));
    debug_assert!(self.is_consistent());
    Ok(())
  }

  /// Removes node `id` together with every edge that touches it.
  /// Returns the ids of the removed edges.
  #[instrument(level = "trace", skip(self))]
  pub fn remove_node(&mut self, id: &str) -> Result<Vec<String>, StoreError> {
    let index = self.node_index(id)?;
    self.nodes.remove(index);
    let removed = self.take_edges(|e| e.touches(id));
    self.emit(StoreEvent::NodeRemoved(id.to_string()));
    for edge_id in &removed {
      self.emit(StoreEvent::EdgeRemoved(edge_id.clone()));
    }
    debug_assert!(self.is_consistent());
    Ok(removed)
  }

  /// Shallow-merges the JSON object `patch` into node `id`'s data (a `null`
  /// value deletes the key), re-derives the node's ports and prunes edges whose
  /// handle on this node no longer exists. Returns the ids of pruned edges.
  ///
  /// The identity keys `id` and `nodeType` may only be set to the node's own id
  /// and kind; changing or deleting them is rejected with [StoreError::ReservedKey].
  #[instrument(level = "trace", skip(self, patch))]
  pub fn update_node_data(&mut self, id: &str, patch: Value) -> Result<Vec<String>, StoreError> {
    let Value::Object(patch) = patch else {
      return Err(StoreError::InvalidPatch);
    };
    let index = self.node_index(id)?;
    let kind = self.nodes[index].kind;
    if let Some(key) = patch
      .iter()
      .find(|(key, value)| !keeps_identity(id, kind, key, value))
      .map(|(key, _)| key.clone())
    {
      return Err(StoreError::ReservedKey {
        node_id: id.to_string(),
        key,
      });
    }

    let mut data: NodeData = self.nodes[index].data.clone();
    for (key, value) in patch {
      if value.is_null() {
        data.remove(&key);
      } else {
        data.insert(key, value);
      }
    }
    let ports = derive_ports(id, self.nodes[index].kind, &data);

    self.nodes[index].data = data;
    let pruned = self.take_edges(|e| {
      (e.source == id && !ports.contains(PortSide::Output, &e.source_handle))
        || (e.target == id && !ports.contains(PortSide::Input, &e.target_handle))
    });
    if !pruned.is_empty() {
      debug!(node_id = id, pruned = ?pruned, "pruned edges after port change");
    }

    self.emit(StoreEvent::NodeDataUpdated(id.to_string()));
    for edge_id in &pruned {
      self.emit(StoreEvent::EdgeRemoved(edge_id.clone()));
    }
    debug_assert!(self.is_consistent());
    Ok(pruned)
  }

  /// Connects output port `source_handle` of `source` to input port
  /// `target_handle` of `target`. Returns the new edge id.
  ///
  /// Self-loops over different ports of one node are accepted; cycles are left
  /// to the external validator.
  #[instrument(level = "trace", skip(self))]
  pub fn connect(
    &mut self,
    source: &str,
    source_handle: &str,
    target: &str,
    target_handle: &str,
  ) -> Result<String, StoreError> {
    let source_ports = self
      .ports(source)
      .ok_or_else(|| StoreError::NodeNotFound(source.to_string()))?;
    let target_ports = self
      .ports(target)
      .ok_or_else(|| StoreError::NodeNotFound(target.to_string()))?;

    if !source_ports.contains(PortSide::Output, source_handle) {
      return Err(StoreError::PortNotFound {
        node_id: source.to_string(),
        port_id: source_handle.to_string(),
        side: PortSide::Output,
      });
    }
    if !target_ports.contains(PortSide::Input, target_handle) {
      return Err(StoreError::PortNotFound {
        node_id: target.to_string(),
        port_id: target_handle.to_string(),
        side: PortSide::Input,
      });
    }
    if source == target && source_handle == target_handle {
      return Err(StoreError::SamePort(source_handle.to_string()));
    }

    let edge = Edge::new(source, source_handle, target, target_handle);
    if self.edge(&edge.id).is_some() {
      return Err(StoreError::DuplicateEdge(edge.id));
    }
    let id = edge.id.clone();
    self.edges.push(edge);
    self.emit(StoreEvent::EdgeAdded(id.clone()));
    debug_assert!(self.is_consistent());
    Ok(id)
  }

  /// Removes edge `id`.
  #[instrument(level = "trace", skip(self))]
  pub fn remove_edge(&mut self, id: &str) -> Result<Edge, StoreError> {
    let index = self
      .edges
      .iter()
      .position(|e| e.id == id)
      .ok_or_else(|| StoreError::EdgeNotFound(id.to_string()))?;
    let edge = self.edges.remove(index);
    self.emit(StoreEvent::EdgeRemoved(edge.id.clone()));
    Ok(edge)
  }

  /// Applies a batch of node changes in order. Every change must name a node
  /// present before the batch, otherwise nothing is applied. Removals cascade
  /// to edges; later changes for a node removed earlier in the batch are no-ops.
  /// Returns the ids of edges removed by cascading.
  #[instrument(level = "trace", skip(self, changes), fields(count = changes.len()))]
  pub fn apply_node_changes(&mut self, changes: &[NodeChange]) -> Result<Vec<String>, StoreError> {
    if let Some(unknown) = changes.iter().find(|c| self.node(c.id()).is_none()) {
      return Err(StoreError::NodeNotFound(unknown.id().to_string()));
    }

    let mut removed_nodes = Vec::new();
    let mut removed_edges = Vec::new();
    let mut touched = false;
    for change in changes {
      let Some(index) = self.nodes.iter().position(|n| n.id == change.id()) else {
        continue;
      };
      match change {
        NodeChange::Position { position, .. } => {
          self.nodes[index].position = *position;
          touched = true;
        }
        NodeChange::Select { selected, .. } => {
          self.nodes[index].selected = *selected;
          touched = true;
        }
        NodeChange::Dimensions { dimensions, .. } => {
          self.nodes[index].dimensions = Some(*dimensions);
          touched = true;
        }
        NodeChange::Remove { id } => {
          self.nodes.remove(index);
          removed_edges.extend(self.take_edges(|e| e.touches(id)));
          removed_nodes.push(id.clone());
        }
      }
    }

    if touched {
      self.emit(StoreEvent::NodesChanged);
    }
    for id in removed_nodes {
      self.emit(StoreEvent::NodeRemoved(id));
    }
    for id in &removed_edges {
      self.emit(StoreEvent::EdgeRemoved(id.clone()));
    }
    debug_assert!(self.is_consistent());
    Ok(removed_edges)
  }

  /// Applies a batch of edge changes. Every change must name an existing edge,
  /// otherwise nothing is applied.
  #[instrument(level = "trace", skip(self, changes), fields(count = changes.len()))]
  pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) -> Result<(), StoreError> {
    if let Some(unknown) = changes.iter().find(|c| self.edge(c.id()).is_none()) {
      return Err(StoreError::EdgeNotFound(unknown.id().to_string()));
    }

    let mut removed = Vec::new();
    let mut touched = false;
    for change in changes {
      match change {
        EdgeChange::Select { id, selected } => {
          if let Some(edge) = self.edges.iter_mut().find(|e| &e.id == id) {
            edge.selected = *selected;
            touched = true;
          }
        }
        EdgeChange::Remove { id } => {
          let before = self.edges.len();
          self.edges.retain(|e| &e.id != id);
          if self.edges.len() != before {
            removed.push(id.clone());
          }
        }
      }
    }

    if touched {
      self.emit(StoreEvent::EdgesChanged);
    }
    for id in removed {
      self.emit(StoreEvent::EdgeRemoved(id));
    }
    Ok(())
  }

  /// Checks every structural invariant against freshly derived port sets.
  pub fn is_consistent(&self) -> bool {
    let unique_ids = self
      .nodes
      .iter()
      .enumerate()
      .all(|(i, n)| self.nodes[..i].iter().all(|m| m.id != n.id));
    unique_ids
      && self.edges.iter().all(|e| {
        let source_ok = self
          .ports(&e.source)
          .is_some_and(|p| p.contains(PortSide::Output, &e.source_handle));
        let target_ok = self
          .ports(&e.target)
          .is_some_and(|p| p.contains(PortSide::Input, &e.target_handle));
        source_ok && target_ok
      })
  }

  /// Removes every edge matching `pred`, returning their ids in order.
  fn take_edges(&mut self, pred: impl Fn(&Edge) -> bool) -> Vec<String> {
    let mut removed = Vec::new();
    self.edges.retain(|e| {
      if pred(e) {
        removed.push(e.id.clone());
        false
      } else {
        true
      }
    });
    removed
  }
}
