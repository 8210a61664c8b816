use anyhow::{Result, ensure};
use log::trace;

use crate::entities::{PackedRect, ShapeId};
use crate::geometry::primitives::Rect;
use crate::packing::packer;
use crate::util::PackerConfig;

/// A single panel onto which shapes are packed.
/// Owns the bookkeeping of its unused space, which can only be altered through [`Bin::place`].
#[derive(Clone, Debug)]
pub struct Bin {
    pub index: usize,
    pub panel_width: f64,
    pub panel_height: f64,
    /// Unused regions of the panel. No rectangle in the list is contained in another one.
    free_rects: Vec<Rect>,
    /// Shapes committed to this bin, in placement order
    placements: Vec<(ShapeId, PackedRect)>,
}

impl Bin {
    /// Creates an empty bin with a single free rectangle spanning the whole panel.
    pub fn new(index: usize, panel_width: f64, panel_height: f64) -> Result<Self> {
        let panel = Rect::try_new(0.0, 0.0, panel_width, panel_height)?;
        ensure!(panel.is_finite(), "panel dimensions must be finite");
        Ok(Self {
            index,
            panel_width,
            panel_height,
            free_rects: vec![panel],
            placements: vec![],
        })
    }

    /// Searches the best position for a `w` x `h` box and commits it to the bin.
    /// Returns `None`, leaving the bin untouched, if the box does not fit anywhere.
    pub fn place(
        &mut self,
        shape_id: ShapeId,
        w: f64,
        h: f64,
        config: &PackerConfig,
    ) -> Option<PackedRect> {
        debug_assert!(w > 0.0 && h > 0.0, "invalid box dimensions: {w} x {h}");

        let fit = packer::best_area_fit(&self.free_rects, w, h, config)?;
        let free_rect = self.free_rects[fit.free_rect_idx];
        let packed = PackedRect {
            bin_index: self.index,
            x: free_rect.x_min,
            y: free_rect.y_min,
            width: fit.width,
            height: fit.height,
            rotated: fit.rotated,
        };

        packer::split_free_rects(&mut self.free_rects, packed.rect());
        packer::prune_free_rects(&mut self.free_rects);
        self.placements.push((shape_id, packed));

        trace!(
            "[PACK] bin {}: {} free rectangles after placing shape {}",
            self.index,
            self.free_rects.len(),
            shape_id
        );

        Some(packed)
    }

    pub fn panel(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.panel_width,
            y_max: self.panel_height,
        }
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free_rects
    }

    pub fn placements(&self) -> &[(ShapeId, PackedRect)] {
        &self.placements
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Total area occupied by packed boxes
    pub fn usage(&self) -> f64 {
        self.placements.iter().map(|(_, pr)| pr.area()).sum()
    }

    /// Fraction of the panel covered by packed boxes
    pub fn density(&self) -> f64 {
        self.usage() / self.panel().area()
    }
}
