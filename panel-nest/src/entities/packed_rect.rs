use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Rect;

/// Position of a shape's bounding box within a bin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackedRect {
    pub bin_index: usize,
    /// Minimum x of the box in the bin's coordinate space
    pub x: f64,
    /// Minimum y of the box in the bin's coordinate space
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// True iff width and height are swapped relative to the shape's own bounding box
    pub rotated: bool,
}

impl PackedRect {
    pub fn rect(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
