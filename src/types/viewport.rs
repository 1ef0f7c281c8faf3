//! Canvas geometry: pointer coordinates, canvas bounds and the pan/zoom transform.

use serde::{Deserialize, Serialize};

/// Pointer coordinate in viewport (client) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Current pan (`x`, `y`) and `zoom` of the canvas.
///
/// A graph point `g` is drawn at `g * zoom + (x, y)` relative to the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
  pub x: f64,
  pub y: f64,
  pub zoom: f64,
}

impl ViewportTransform {
  pub fn new(x: f64, y: f64, zoom: f64) -> Self {
    Self { x, y, zoom }
  }

  pub fn identity() -> Self {
    Self::new(0.0, 0.0, 1.0)
  }

  /// Zoom must be a positive finite number for the transform to be invertible.
  pub fn is_invertible(&self) -> bool {
    self.zoom.is_finite() && self.zoom > 0.0 && self.x.is_finite() && self.y.is_finite()
  }
}

impl Default for ViewportTransform {
  fn default() -> Self {
    Self::identity()
  }
}

/// Client-space rectangle occupied by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
  pub left: f64,
  pub top: f64,
  pub width: f64,
  pub height: f64,
}

impl CanvasBounds {
  pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
    Self {
      left,
      top,
      width,
      height,
    }
  }

  pub fn right(&self) -> f64 {
    self.left + self.width
  }

  pub fn bottom(&self) -> f64 {
    self.top + self.height
  }

  /// Edges count as inside.
  pub fn contains(&self, p: Point) -> bool {
    p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
  }

  /// `p` relative to the canvas origin.
  pub fn relative(&self, p: Point) -> Point {
    Point::new(p.x - self.left, p.y - self.top)
  }
}
