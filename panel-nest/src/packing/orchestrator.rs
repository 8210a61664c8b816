use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::{debug, info, warn};

use crate::entities::{Bin, PackedRect, Rejection, RejectionReason, ShapeId, ShapeRecord};
use crate::util::PackerConfig;
use crate::util::assertions;

/// Outcome of offering a single shape to a [`NestProblem`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Insertion {
    Placed(PackedRect),
    Rejected(RejectionReason),
}

/// A nesting run in progress: the bins opened so far and where every shape went.
#[derive(Clone, Debug)]
pub struct NestProblem {
    pub panel_width: f64,
    pub panel_height: f64,
    pub config: PackerConfig,
    pub bins: Vec<Bin>,
    pub placements: BTreeMap<ShapeId, PackedRect>,
    pub rejections: Vec<Rejection>,
    /// Ids of every shape offered so far, placed or rejected
    seen_ids: BTreeSet<ShapeId>,
}

impl NestProblem {
    pub fn new(panel_width: f64, panel_height: f64, config: PackerConfig) -> Result<Self> {
        ensure!(
            panel_width.is_finite() && panel_width > 0.0,
            "panel width must be positive and finite, got {panel_width}"
        );
        ensure!(
            panel_height.is_finite() && panel_height > 0.0,
            "panel height must be positive and finite, got {panel_height}"
        );
        Ok(Self {
            panel_width,
            panel_height,
            config,
            bins: vec![],
            placements: BTreeMap::new(),
            rejections: vec![],
            seen_ids: BTreeSet::new(),
        })
    }

    /// Places `shape` in the first bin (in [`BinSelection`](crate::util::BinSelection) order)
    /// that has room for it, opening a new bin if none has.
    /// Degenerate and oversized shapes are rejected without touching any bin.
    ///
    /// Fails if the shape id was seen before or if a placement violates the layout invariants.
    pub fn insert(&mut self, shape: &ShapeRecord) -> Result<Insertion> {
        let id = shape.id();
        ensure!(
            self.seen_ids.insert(id),
            "shape id {id} occurs more than once"
        );
        let (w, h) = (shape.width(), shape.height());

        if shape.is_degenerate() {
            return Ok(self.reject(id, RejectionReason::Degenerate { width: w, height: h }));
        }
        if !self.fits_empty_panel(w, h) {
            return Ok(self.reject(id, RejectionReason::Oversized { width: w, height: h }));
        }

        for bin_idx in self.config.bin_selection.order(self.bins.len()) {
            if let Some(packed) = self.bins[bin_idx].place(id, w, h, &self.config) {
                return self.commit(id, packed);
            }
        }

        //no open bin has room left, open a new one
        let bin_idx = self.bins.len();
        let mut bin = Bin::new(bin_idx, self.panel_width, self.panel_height)?;
        info!("[NEST] opening bin {bin_idx} for shape {id}");
        let Some(packed) = bin.place(id, w, h, &self.config) else {
            bail!("empty bin {bin_idx} refused shape {id} ({w} x {h}), although it fits the panel");
        };
        self.bins.push(bin);
        self.commit(id, packed)
    }

    fn fits_empty_panel(&self, w: f64, h: f64) -> bool {
        (w <= self.panel_width && h <= self.panel_height)
            || (self.config.allow_rotation && h <= self.panel_width && w <= self.panel_height)
    }

    fn reject(&mut self, shape_id: ShapeId, reason: RejectionReason) -> Insertion {
        warn!("[NEST] shape {shape_id} excluded: {reason}");
        self.rejections.push(Rejection { shape_id, reason });
        Insertion::Rejected(reason)
    }

    fn commit(&mut self, shape_id: ShapeId, packed: PackedRect) -> Result<Insertion> {
        assertions::placement_is_valid(&self.bins[packed.bin_index], shape_id, &packed)
            .context("layout invariant violated, aborting the run")?;
        debug!(
            "[NEST] placed shape {shape_id} in bin {} at ({:.3}, {:.3}), {:.3} x {:.3}{}",
            packed.bin_index,
            packed.x,
            packed.y,
            packed.width,
            packed.height,
            if packed.rotated { ", rotated" } else { "" }
        );
        self.placements.insert(shape_id, packed);
        Ok(Insertion::Placed(packed))
    }

    /// Finalizes the run, the bins become read-only.
    pub fn save(self) -> NestSolution {
        let solution = NestSolution {
            panel_width: self.panel_width,
            panel_height: self.panel_height,
            config: self.config,
            bins: self.bins,
            placements: self.placements,
            rejections: self.rejections,
            time_stamp: Instant::now(),
        };

        debug_assert!(assertions::solution_is_valid(&solution));

        solution
    }
}

/// Result of a completed nesting run
#[derive(Clone, Debug)]
pub struct NestSolution {
    pub panel_width: f64,
    pub panel_height: f64,
    pub config: PackerConfig,
    /// All opened bins, in order of creation
    pub bins: Vec<Bin>,
    /// Where every successfully placed shape went
    pub placements: BTreeMap<ShapeId, PackedRect>,
    /// Shapes which were excluded, in input order
    pub rejections: Vec<Rejection>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl NestSolution {
    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    pub fn n_placed(&self) -> usize {
        self.placements.len()
    }

    /// Packed area divided by the total area of all bins
    pub fn density(&self) -> f64 {
        match self.bins.is_empty() {
            true => 0.0,
            false => {
                let usage = self.bins.iter().map(|b| b.usage()).sum::<f64>();
                usage / (self.bins.len() as f64 * self.panel_width * self.panel_height)
            }
        }
    }
}

/// Packs `shapes`, in the order given, onto as many `panel_width` x `panel_height` bins as needed.
///
/// Degenerate and oversized shapes are reported as [`Rejection`]s in the solution.
/// Fails before packing on invalid panel dimensions or duplicate shape ids,
/// and aborts on any violation of the layout invariants.
pub fn pack_all(
    shapes: &[ShapeRecord],
    panel_width: f64,
    panel_height: f64,
    config: PackerConfig,
) -> Result<NestSolution> {
    let start = Instant::now();
    let mut problem = NestProblem::new(panel_width, panel_height, config)?;
    ensure!(
        shapes.iter().map(|s| s.id()).all_unique(),
        "shape ids must be unique within a nesting run"
    );

    for shape in shapes {
        problem.insert(shape)?;
    }

    let solution = problem.save();
    info!(
        "[NEST] packing finished in {:.3}ms: {}/{} shapes placed on {} bin(s) with a density of {:.3}%, {} rejected",
        start.elapsed().as_secs_f64() * 1000.0,
        solution.n_placed(),
        shapes.len(),
        solution.n_bins(),
        solution.density() * 100.0,
        solution.rejections.len()
    );
    Ok(solution)
}
