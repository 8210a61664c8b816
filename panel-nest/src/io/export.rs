use std::time::Instant;

use itertools::Itertools;

use crate::entities::{Bin, NestInstance, Rejection, RejectionReason, ShapeKind};
use crate::geometry::primitives::Polyline;
use crate::io::ext_repr::{
    ExtPanelLayout, ExtPlacedShape, ExtPolyline, ExtRejection, ExtRejectionReason, ExtShape,
    ExtSolution,
};
use crate::packing::{NestSolution, resolve_transform};

/// Exports a solution out of the library
pub fn export(instance: &NestInstance, solution: &NestSolution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        panels: solution
            .bins
            .iter()
            .map(|bin| export_bin(bin, instance))
            .collect(),
        rejected: solution
            .rejections
            .iter()
            .map(|r| export_rejection(r, instance))
            .collect(),
        n_panels: solution.n_bins(),
        density: solution.density(),
        run_time_ms: solution.time_stamp.duration_since(epoch).as_millis() as u64,
    }
}

pub fn export_bin(bin: &Bin, instance: &NestInstance) -> ExtPanelLayout {
    let placed_shapes = bin
        .placements()
        .iter()
        .map(|(shape_id, packed)| {
            let shape = instance.shape(*shape_id);
            ExtPlacedShape {
                shape_id: *shape_id,
                source_id: shape.source_id(),
                x: packed.x,
                y: packed.y,
                width: packed.width,
                height: packed.height,
                rotated: packed.rotated,
                transformation: resolve_transform(shape, packed).into(),
            }
        })
        .collect_vec();

    ExtPanelLayout {
        index: bin.index,
        placed_shapes,
        density: bin.density(),
    }
}

fn export_rejection(rejection: &Rejection, instance: &NestInstance) -> ExtRejection {
    let reason = match rejection.reason {
        RejectionReason::Degenerate { width, height } => {
            ExtRejectionReason::Degenerate { width, height }
        }
        RejectionReason::Oversized { width, height } => {
            ExtRejectionReason::Oversized { width, height }
        }
    };
    ExtRejection {
        shape_id: rejection.shape_id,
        source_id: instance.shape(rejection.shape_id).source_id(),
        reason,
    }
}

/// Converts geometry back into its external representation, e.g. after it was moved into its panel.
pub fn export_shape(kind: &ShapeKind) -> ExtShape {
    match kind {
        ShapeKind::Segment(e) => ExtShape::Segment {
            start: e.start.into(),
            end: e.end.into(),
        },
        ShapeKind::Circle(c) => ExtShape::Circle {
            center: c.center.into(),
            radius: c.radius,
        },
        ShapeKind::Polyline(pl) => ExtShape::Polyline(export_polyline(pl)),
        ShapeKind::Path(sub_paths) => ExtShape::Path(sub_paths.iter().map(export_polyline).collect()),
    }
}

fn export_polyline(pl: &Polyline) -> ExtPolyline {
    ExtPolyline {
        points: pl.points().iter().map(|&p| p.into()).collect(),
        closed: pl.is_closed(),
    }
}
