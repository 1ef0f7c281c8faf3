use crate::placement::to_graph_space;
use crate::types::{Point, Position, ViewportTransform};
use proptest::prelude::*;

#[test]
fn identity_without_transform() {
  assert_eq!(to_graph_space(Point::new(150.0, 80.0), None), Position::new(150.0, 80.0));
}

#[test]
fn identity_transform() {
  let p = to_graph_space(Point::new(150.0, 80.0), Some(ViewportTransform::identity()));
  assert_eq!(p, Position::new(150.0, 80.0));
}

#[test]
fn pan_and_zoom_are_inverted() {
  let t = ViewportTransform::new(100.0, 50.0, 2.0);
  assert_eq!(to_graph_space(Point::new(300.0, 250.0), Some(t)), Position::new(100.0, 100.0));
}

#[test]
fn degenerate_zoom_falls_back_to_identity() {
  for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
    let t = ViewportTransform::new(10.0, 10.0, zoom);
    assert_eq!(to_graph_space(Point::new(5.0, 6.0), Some(t)), Position::new(5.0, 6.0));
  }
}

proptest! {
  #[test]
  fn round_trips_through_viewport(
    gx in -1000.0f64..1000.0,
    gy in -1000.0f64..1000.0,
    tx in -500.0f64..500.0,
    ty in -500.0f64..500.0,
    zoom in 0.1f64..4.0,
  ) {
    let t = ViewportTransform::new(tx, ty, zoom);
    let screen = Point::new(gx * zoom + tx, gy * zoom + ty);
    let g = to_graph_space(screen, Some(t));
    prop_assert!((g.x - gx).abs() < 1e-6);
    prop_assert!((g.y - gy).abs() < 1e-6);
  }
}
