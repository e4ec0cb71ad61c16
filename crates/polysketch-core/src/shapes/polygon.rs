//! Closed polygon shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use crate::geometry::{rotate_points, scale_points};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};
use uuid::Uuid;

/// A closed polygon (ordered vertex list, last vertex joins the first).
#[derive(Debug, Clone)]
pub struct Polygon {
    pub(crate) id: ShapeId,
    vertices: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Polygon {
    /// Create a new empty polygon.
    pub fn new() -> Self {
        Self::from_points(Vec::new())
    }

    /// Create from existing vertices.
    pub fn from_points(vertices: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            vertices,
            style: ShapeStyle::default(),
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a vertex. No dedup or convexity checks.
    pub fn add_vertex(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Shift every vertex by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Translate so the first vertex lands on `target`.
    ///
    /// Returns false (and does nothing) for an empty polygon.
    pub fn move_first_vertex_to(&mut self, target: Point) -> bool {
        match self.vertices.first() {
            Some(&first) => {
                self.translate(target - first);
                true
            }
            None => false,
        }
    }

    /// Rotate all vertices about `anchor`, swapping in the new vertex list.
    pub fn rotate_about(&mut self, angle_degrees: f64, anchor: Point) {
        self.vertices = rotate_points(angle_degrees, &self.vertices, anchor);
    }

    /// Scale all vertices away from `anchor`, swapping in the new vertex list.
    pub fn scale_about(&mut self, scale_x: f64, scale_y: f64, anchor: Point) {
        self.vertices = scale_points(scale_x, scale_y, &self.vertices, anchor);
    }

    /// Even-odd containment. Fewer than three vertices enclose nothing.
    pub fn contains(&self, point: Point) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        self.to_path().winding(point) % 2 != 0
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeTrait for Polygon {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let Some(&first) = self.vertices.first() else {
            return Rect::ZERO;
        };
        self.vertices
            .iter()
            .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p))
    }

    fn hit_test(&self, point: Point) -> bool {
        self.contains(point)
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.vertices.iter();
        if let Some(&first) = iter.next() {
            path.move_to(first);
            for &p in iter {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }
}
