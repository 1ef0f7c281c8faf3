//! # pipeline-canvas
//!
//! Core of a visual LLM pipeline editor: the graph of typed nodes and edges,
//! node ports derived from node content, drag-and-drop node creation and the
//! submission contract with the pipeline validator.
//!
//! ## Architecture
//!
//! [EditorSession] owns one [GraphStore], one [IdGenerator] and the canvas
//! geometry. Drops go through [drop_controller] (kind resolution, placement via
//! [placement], id allocation) into the store. Data edits re-derive ports in
//! [ports] and prune edges whose handles disappeared. [submission] turns a
//! snapshot into the wire payload and the validator's answer into a
//! [SubmissionReport].

pub mod config;
#[cfg(test)]
mod config_test;
pub mod drop_controller;
pub mod error;
pub mod id_generator;
#[cfg(test)]
mod id_generator_test;
pub mod placement;
#[cfg(test)]
mod placement_test;
pub mod ports;
pub mod session;
pub mod store;
pub mod submission;
#[cfg(test)]
mod submission_test;
pub mod types;

pub use config::ValidatorConfig;
pub use drop_controller::{Canvas, DRAG_MEDIA_TYPE, DropEvent, DropOutcome, IgnoreReason};
pub use error::{StoreError, SubmitError};
pub use id_generator::IdGenerator;
pub use placement::to_graph_space;
pub use ports::{derive_ports, derive_variables};
pub use session::EditorSession;
pub use store::{GraphStore, StoreEvent};
pub use submission::{
  HttpValidator, ParseResponse, ParseSummary, PipelinePayload, SubmissionReport, Validator,
};
pub use types::{Edge, GraphSnapshot, Node, NodeKind, Port, PortSet, PortSide, Position};
