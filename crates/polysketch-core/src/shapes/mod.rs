//! Shape definitions for the canvas.

mod polygon;

pub use polygon::Polygon;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Style properties for shapes.
#[derive(Debug, Clone, Copy)]
pub struct ShapeStyle {
    /// Outline color.
    pub stroke_color: Color,
    /// Outline width in pixels.
    pub stroke_width: f64,
}

impl ShapeStyle {
    pub fn stroke(&self) -> Color {
        self.stroke_color
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
        }
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point lies inside this shape.
    fn hit_test(&self, point: Point) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    fn style(&self) -> &ShapeStyle;
}
