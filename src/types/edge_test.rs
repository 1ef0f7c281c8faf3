//! Tests for `Edge`.

use super::{Edge, EdgeStyle, edge_id};

fn edge(from: &str, to: &str) -> Edge {
  Edge::new(from, format!("{}-out", from), to, format!("{}-in", to))
}

#[test]
fn construct_edge() {
  let e = edge("a", "b");
  assert_eq!(e.source, "a");
  assert_eq!(e.source_handle, "a-out");
  assert_eq!(e.target, "b");
  assert_eq!(e.target_handle, "b-in");
  assert_eq!(e.id, "a-out->b-in");
}

#[test]
fn new_edges_are_animated_smoothstep_with_arrow() {
  let e = edge("a", "b");
  assert!(e.animated);
  assert_eq!(e.style, EdgeStyle::SmoothStep);
  assert_eq!(e.marker_end.width, 20.0);
  assert_eq!(e.marker_end.height, 20.0);
  assert!(!e.selected);
}

#[test]
fn touches_either_endpoint() {
  let e = edge("a", "b");
  assert!(e.touches("a"));
  assert!(e.touches("b"));
  assert!(!e.touches("c"));
}

#[test]
fn edge_id_is_handle_pair() {
  assert_eq!(edge_id("x-true", "y-input"), "x-true->y-input");
}

#[test]
fn serializes_camel_case() {
  let v = serde_json::to_value(edge("a", "b")).unwrap();
  assert_eq!(v["sourceHandle"], "a-out");
  assert_eq!(v["targetHandle"], "b-in");
  assert_eq!(v["style"], "smoothstep");
  assert_eq!(v["markerEnd"]["width"], 20.0);
}
