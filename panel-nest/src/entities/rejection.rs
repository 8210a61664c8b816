use std::fmt::Display;

use crate::entities::ShapeId;

/// A shape which was excluded from the nesting run, together with the reason.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rejection {
    pub shape_id: ShapeId,
    pub reason: RejectionReason,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RejectionReason {
    /// Bounding box with a zero (or negative) width or height
    Degenerate { width: f64, height: f64 },
    /// Bounding box which does not fit an empty panel in any allowed orientation
    Oversized { width: f64, height: f64 },
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::Degenerate { width, height } => {
                write!(f, "degenerate bounding box ({width:.3} x {height:.3})")
            }
            RejectionReason::Oversized { width, height } => {
                write!(f, "does not fit an empty panel ({width:.3} x {height:.3})")
            }
        }
    }
}
