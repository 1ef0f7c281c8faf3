//! One editing session: the graph store, the id generator and the canvas
//! geometry, owned together and handed to the UI layer as a single context.
//!
//! The session is the UI-facing side of the crate. Structural rejections are
//! logged here and returned to the caller, who may ignore them.

use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{Instrument, debug, trace_span};

use crate::drop_controller::{self, Canvas, DropEvent, DropOutcome};
use crate::error::StoreError;
use crate::id_generator::IdGenerator;
use crate::store::{GraphStore, StoreEvent};
use crate::submission::{self, PipelinePayload, SubmissionReport, Validator};
use crate::types::{CanvasBounds, EdgeChange, NodeChange, PortSet, ViewportTransform};

#[derive(Debug, Default)]
pub struct EditorSession {
  store: GraphStore,
  ids: IdGenerator,
  canvas: Canvas,
}

fn logged<T>(op: &'static str, result: Result<T, StoreError>) -> Result<T, StoreError> {
  if let Err(e) = &result {
    debug!(op, error = %e, "edit rejected");
  }
  result
}

impl EditorSession {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn store(&self) -> &GraphStore {
    &self.store
  }

  pub fn ids(&self) -> &IdGenerator {
    &self.ids
  }

  pub fn canvas(&self) -> &Canvas {
    &self.canvas
  }

  pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
    self.store.subscribe()
  }

  pub fn set_canvas_bounds(&mut self, bounds: CanvasBounds) {
    self.canvas.bounds = Some(bounds);
  }

  pub fn set_viewport(&mut self, viewport: ViewportTransform) {
    self.canvas.viewport = Some(viewport);
  }

  pub fn ports(&self, node_id: &str) -> Option<PortSet> {
    self.store.ports(node_id)
  }

  pub fn handle_drop(&mut self, event: &DropEvent) -> DropOutcome {
    drop_controller::handle_drop(event, &self.canvas, &mut self.store, &mut self.ids)
  }

  /// Merges `patch` into the node's data. Returns the ids of pruned edges.
  pub fn edit_node_data(&mut self, node_id: &str, patch: Value) -> Result<Vec<String>, StoreError> {
    logged("edit_node_data", self.store.update_node_data(node_id, patch))
  }

  pub fn connect(
    &mut self,
    source: &str,
    source_handle: &str,
    target: &str,
    target_handle: &str,
  ) -> Result<String, StoreError> {
    logged(
      "connect",
      self.store.connect(source, source_handle, target, target_handle),
    )
  }

  pub fn remove_node(&mut self, node_id: &str) -> Result<Vec<String>, StoreError> {
    logged("remove_node", self.store.remove_node(node_id))
  }

  pub fn remove_edge(&mut self, edge_id: &str) -> Result<(), StoreError> {
    logged("remove_edge", self.store.remove_edge(edge_id).map(|_| ()))
  }

  pub fn apply_node_changes(&mut self, changes: &[NodeChange]) -> Result<Vec<String>, StoreError> {
    logged("apply_node_changes", self.store.apply_node_changes(changes))
  }

  pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) -> Result<(), StoreError> {
    logged("apply_edge_changes", self.store.apply_edge_changes(changes))
  }

  /// Wire payload of the graph as it is right now.
  pub fn payload(&self) -> PipelinePayload {
    PipelinePayload::from_snapshot(&self.store.snapshot())
  }

  /// Submits the current graph. The payload is captured when this is called and
  /// the returned future does not borrow the session, so editing can go on
  /// while the request is in flight. The report describes the graph at call time.
  pub fn submit<'v, V: Validator + ?Sized>(
    &self,
    validator: &'v V,
  ) -> impl Future<Output = SubmissionReport> + 'v {
    let payload = self.payload();
    let span = trace_span!("submit", nodes = payload.nodes.len(), edges = payload.edges.len());
    async move { submission::submit(validator, &payload).await }.instrument(span)
  }
}
