use anyhow::{Result, ensure};

use crate::entities::{ShapeId, ShapeRecord};
use crate::packing::{NestSolution, pack_all};
use crate::util::PackerConfig;

/// The static description of a nesting run: the panel size and the shapes to nest, in priority order.
#[derive(Clone, Debug)]
pub struct NestInstance {
    pub name: String,
    pub panel_width: f64,
    pub panel_height: f64,
    /// Shape with id `i` is stored at index `i`
    shapes: Vec<ShapeRecord>,
}

impl NestInstance {
    pub fn new(
        name: String,
        panel_width: f64,
        panel_height: f64,
        shapes: Vec<ShapeRecord>,
    ) -> Result<Self> {
        ensure!(
            shapes.iter().enumerate().all(|(i, s)| s.id() == i),
            "shape ids of an instance must be 0, 1, 2, ... in order"
        );
        Ok(Self {
            name,
            panel_width,
            panel_height,
            shapes,
        })
    }

    pub fn shape(&self, id: ShapeId) -> &ShapeRecord {
        &self.shapes[id]
    }

    pub fn shapes(&self) -> &[ShapeRecord] {
        &self.shapes
    }

    pub fn total_shape_area(&self) -> f64 {
        self.shapes.iter().map(|s| s.bbox().area()).sum()
    }

    /// Nests all shapes of the instance in their order.
    pub fn solve(&self, config: PackerConfig) -> Result<NestSolution> {
        pack_all(&self.shapes, self.panel_width, self.panel_height, config)
    }
}
