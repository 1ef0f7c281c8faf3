//! Tests for canvas geometry types.

use super::{CanvasBounds, Point, ViewportTransform};

#[test]
fn bounds_contains_is_inclusive() {
  let b = CanvasBounds::new(10.0, 20.0, 100.0, 50.0);
  assert!(b.contains(Point::new(10.0, 20.0)));
  assert!(b.contains(Point::new(110.0, 70.0)));
  assert!(b.contains(Point::new(50.0, 40.0)));
  assert!(!b.contains(Point::new(9.9, 40.0)));
  assert!(!b.contains(Point::new(50.0, 70.1)));
}

#[test]
fn relative_subtracts_origin() {
  let b = CanvasBounds::new(10.0, 20.0, 100.0, 50.0);
  assert_eq!(b.relative(Point::new(15.0, 25.0)), Point::new(5.0, 5.0));
}

#[test]
fn identity_is_default() {
  assert_eq!(ViewportTransform::default(), ViewportTransform::new(0.0, 0.0, 1.0));
  assert!(ViewportTransform::identity().is_invertible());
}

#[test]
fn zero_or_nan_zoom_is_not_invertible() {
  assert!(!ViewportTransform::new(0.0, 0.0, 0.0).is_invertible());
  assert!(!ViewportTransform::new(0.0, 0.0, -1.0).is_invertible());
  assert!(!ViewportTransform::new(0.0, 0.0, f64::NAN).is_invertible());
  assert!(!ViewportTransform::new(f64::INFINITY, 0.0, 1.0).is_invertible());
}
