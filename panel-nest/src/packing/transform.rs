use std::f64::consts::FRAC_PI_2;

use crate::entities::{PackedRect, ShapeKind, ShapeRecord};
use crate::geometry::DTransformation;
use crate::geometry::geo_traits::Transformable;

/// Resolves the rigid transformation which moves `shape` from its original coordinates into `packed`.
///
/// Unrotated placements are a pure translation of the bounding box's lower-left corner onto
/// `(packed.x, packed.y)`. Rotated placements turn the shape a quarter counter-clockwise around the
/// origin, which maps `(x, y)` to `(-y, x)` and thus the original box
/// `[x_min, x_max] x [y_min, y_max]` to `[-y_max, -y_min] x [x_min, x_max]`,
/// and then translate that box's lower-left corner onto `(packed.x, packed.y)`.
pub fn resolve_transform(shape: &ShapeRecord, packed: &PackedRect) -> DTransformation {
    let bbox = shape.bbox();
    match packed.rotated {
        false => DTransformation::new(0.0, (packed.x - bbox.x_min, packed.y - bbox.y_min)),
        true => DTransformation::new(FRAC_PI_2, (packed.x + bbox.y_max, packed.y - bbox.x_min)),
    }
}

/// The geometry of `shape` moved into `packed`.
pub fn placed_geometry(shape: &ShapeRecord, packed: &PackedRect) -> ShapeKind {
    let t = resolve_transform(shape, packed).compose();
    shape.kind().transform_clone(&t)
}
