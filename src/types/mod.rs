//! Pipeline graph types: nodes, ports, edges, canvas geometry and change batches.

mod changes;
mod edge;
#[cfg(test)]
mod edge_test;
mod graph_snapshot;
mod node;
mod node_kind;
#[cfg(test)]
mod node_kind_test;
mod port;
mod viewport;
#[cfg(test)]
mod viewport_test;

pub use changes::{EdgeChange, NodeChange};
pub use edge::{Edge, EdgeMarker, EdgeStyle, edge_id};
pub use graph_snapshot::GraphSnapshot;
pub use node::{DEFAULT_TEXT_TEMPLATE, Dimensions, Node, NodeData, Position, text_template};
pub use node_kind::NodeKind;
pub use port::{Port, PortSet, PortSide, port_id};
pub use viewport::{CanvasBounds, Point, ViewportTransform};
