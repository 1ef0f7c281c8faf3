//! Maps a canvas-relative pointer coordinate into graph space.

use crate::types::{Point, Position, ViewportTransform};

/// Inverts the viewport pan/zoom: `((x - tx) / zoom, (y - ty) / zoom)`.
///
/// `point` must already be relative to the canvas origin. With no transform, or
/// one that cannot be inverted (zero, negative or non-finite zoom), the point is
/// used as-is.
pub fn to_graph_space(point: Point, transform: Option<ViewportTransform>) -> Position {
  match transform {
    Some(t) if t.is_invertible() => Position::new((point.x - t.x) / t.zoom, (point.y - t.y) / t.zoom),
    _ => Position::new(point.x, point.y),
  }
}
