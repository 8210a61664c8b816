use anyhow::{Result, bail};
use itertools::Itertools;
use log::error;

use crate::entities::{Bin, PackedRect, ShapeId, ShapeRecord};
use crate::geometry::DTransformation;
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::Rect;
use crate::packing::NestSolution;
use crate::util::FPA;

//Various checks to verify the correctness of layouts.
//`placement_is_valid` guards every committed placement, the others are used in debug_assert!() blocks and tests.

/// Verifies that the most recent placement of `shape_id` in `bin` lies within the panel and does
/// not overlap any earlier placement of the bin.
pub fn placement_is_valid(bin: &Bin, shape_id: ShapeId, packed: &PackedRect) -> Result<()> {
    let rect = packed.rect();
    if packed.bin_index != bin.index || !rect.almost_enclosed_by(&bin.panel()) {
        bail!(
            "packed rectangle of shape {shape_id} is outside of bin {}: {rect:?}",
            bin.index
        );
    }
    let overlapping = bin
        .placements()
        .iter()
        .filter(|(id, _)| *id != shape_id)
        .find(|(_, other)| rects_overlap(&rect, &other.rect()));
    if let Some((other_id, other)) = overlapping {
        bail!(
            "packed rectangle of shape {shape_id} in bin {} overlaps shape {other_id}: {rect:?} and {:?}",
            bin.index,
            other.rect()
        );
    }
    Ok(())
}

/// Whether the interiors of `a` and `b` intersect, ignoring overlaps within floating point tolerance.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    match Rect::intersection(*a, *b) {
        None => false,
        Some(i) => FPA(i.width()) != FPA(0.0) && FPA(i.height()) != FPA(0.0),
    }
}

/// Checks every invariant of a bin: containment and disjointness of its placements,
/// containment of its free rectangles, no free rectangle overlapping a placement or contained in another.
pub fn bin_is_valid(bin: &Bin) -> bool {
    let panel = bin.panel();
    let placed = bin.placements().iter().map(|(_, pr)| pr.rect()).collect_vec();

    if let Some(r) = placed.iter().find(|r| !r.almost_enclosed_by(&panel)) {
        error!("[ASSERT] bin {}: placement outside of panel: {r:?}", bin.index);
        return false;
    }
    if let Some((a, b)) = placed
        .iter()
        .tuple_combinations()
        .find(|(a, b)| rects_overlap(a, b))
    {
        error!("[ASSERT] bin {}: overlapping placements: {a:?}, {b:?}", bin.index);
        return false;
    }
    for fr in bin.free_rects() {
        if !fr.almost_enclosed_by(&panel) {
            error!("[ASSERT] bin {}: free rectangle outside of panel: {fr:?}", bin.index);
            return false;
        }
        if let Some(r) = placed.iter().find(|r| rects_overlap(fr, r)) {
            error!("[ASSERT] bin {}: free rectangle {fr:?} overlaps placement {r:?}", bin.index);
            return false;
        }
    }
    let contained = bin
        .free_rects()
        .iter()
        .enumerate()
        .cartesian_product(bin.free_rects().iter().enumerate())
        .any(|((i, a), (j, b))| i != j && b.relation_to(*a) == GeoRelation::Surrounding);
    if contained {
        error!("[ASSERT] bin {}: redundant free rectangle", bin.index);
        return false;
    }
    true
}

/// Checks all bins of a solution and that every placement in the solution is registered in its bin.
pub fn solution_is_valid(solution: &NestSolution) -> bool {
    solution.bins.iter().all(bin_is_valid)
        && solution.placements.iter().all(|(id, pr)| {
            solution
                .bins
                .get(pr.bin_index)
                .is_some_and(|bin| bin.placements().contains(&(*id, *pr)))
        })
}

/// Whether the width and height of `packed` are the dimensions of `shape`, swapped iff rotated.
pub fn dimensions_preserved(shape: &ShapeRecord, packed: &PackedRect) -> bool {
    let (w, h) = match packed.rotated {
        false => (shape.width(), shape.height()),
        true => (shape.height(), shape.width()),
    };
    FPA(w) == FPA(packed.width) && FPA(h) == FPA(packed.height)
}

/// Whether `dt` moves the bounding box of `shape` exactly onto `packed`.
pub fn transformation_matches(shape: &ShapeRecord, packed: &PackedRect, dt: &DTransformation) -> bool {
    let moved = shape.bbox().transform_clone(&dt.compose());
    let target = packed.rect();
    FPA(moved.x_min) == FPA(target.x_min)
        && FPA(moved.y_min) == FPA(target.y_min)
        && FPA(moved.x_max) == FPA(target.x_max)
        && FPA(moved.y_max) == FPA(target.y_max)
}
