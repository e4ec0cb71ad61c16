//! Drag state for an active press.

/// What a press grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragTarget {
    /// The selected Bézier control point.
    ControlPoint,
    /// The selected polygon.
    Selection,
}

/// State of an active drag operation.
///
/// `reference_angle` is the last pointer angle around the anchor, in degrees;
/// rotate-with-mouse applies the difference to it on every drag step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub target: Option<DragTarget>,
    pub reference_angle: f64,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Grab `target`, optionally seeding the reference angle.
    pub fn begin(&mut self, target: DragTarget, reference_angle: Option<f64>) {
        self.target = Some(target);
        if let Some(angle) = reference_angle {
            self.reference_angle = angle;
        }
    }

    /// Record a new pointer angle and return the change since the last one.
    pub fn rotate_to(&mut self, angle: f64) -> f64 {
        let delta = angle - self.reference_angle;
        self.reference_angle = angle;
        delta
    }

    /// Release the target and reset the reference angle.
    pub fn end(&mut self) {
        *self = Self::default();
    }
}
