//! Canvas modes: what a click does.

use crate::shapes::ShapeId;

/// Available modes. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CanvasMode {
    /// Clicks add vertices to a polygon.
    #[default]
    CreatePolygon,
    /// Clicks select polygons; drags move them.
    TransformPolygon,
    /// Clicks place and select control points; drags move them.
    Bezier,
    /// Clicks place the anchor.
    AddAnchor,
    /// Clicks do nothing; drags rotate the selection about the anchor.
    MouseRotate,
}

impl CanvasMode {
    /// All modes in toolbar order.
    pub const ALL: [CanvasMode; 5] = [
        CanvasMode::CreatePolygon,
        CanvasMode::TransformPolygon,
        CanvasMode::Bezier,
        CanvasMode::AddAnchor,
        CanvasMode::MouseRotate,
    ];

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            CanvasMode::CreatePolygon => "Create polygon",
            CanvasMode::TransformPolygon => "Transform polygon",
            CanvasMode::Bezier => "Bezier",
            CanvasMode::AddAnchor => "Add anchor",
            CanvasMode::MouseRotate => "Rotate with mouse",
        }
    }
}

/// Manages the current mode and the polygon being built in it.
#[derive(Debug, Clone, Default)]
pub struct ModeManager {
    /// Currently active mode.
    pub current_mode: CanvasMode,
    /// Polygon that new vertices are appended to, if one is in progress.
    pending_polygon: Option<ShapeId>,
}

impl ModeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch mode. Abandons the in-progress polygon; its vertices stay.
    pub fn set_mode(&mut self, mode: CanvasMode) {
        if mode != self.current_mode {
            log::debug!("mode {:?} -> {:?}", self.current_mode, mode);
        }
        self.current_mode = mode;
        self.pending_polygon = None;
    }

    pub fn pending_polygon(&self) -> Option<ShapeId> {
        self.pending_polygon
    }

    pub fn begin_polygon(&mut self, id: ShapeId) {
        self.pending_polygon = Some(id);
    }

    /// Close the in-progress polygon, returning it.
    pub fn finish_polygon(&mut self) -> Option<ShapeId> {
        self.pending_polygon.take()
    }
}
