use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info};

use crate::entities::{NestInstance, ShapeKind, ShapeRecord};
use crate::geometry::primitives::{Circle, Edge, Point, Polyline};
use crate::io::ext_repr::{ExtInstance, ExtPolyline, ExtShape};

/// Converts an [`ExtInstance`] into a [`NestInstance`].
/// Every external shape is expanded into `quantity` records with consecutive ids, in input order.
pub fn import(ext_instance: &ExtInstance) -> Result<NestInstance> {
    let mut shapes = vec![];
    for ext_shape in &ext_instance.shapes {
        let kind = import_shape(&ext_shape.shape)
            .with_context(|| format!("invalid geometry for shape {}", ext_shape.id))?;
        for copy in 0..ext_shape.quantity {
            let record = ShapeRecord::new(shapes.len(), kind.clone())
                .with_context(|| format!("invalid shape {}", ext_shape.id))?
                .with_source(ext_shape.id, copy);
            shapes.push(record);
        }
        debug!(
            "[IMPORT] shape {} ({}) x{}",
            ext_shape.id,
            kind.name(),
            ext_shape.quantity
        );
    }

    info!(
        "[IMPORT] instance {:?}: {} shape record(s) from {} drawing shape(s), panel {} x {}",
        ext_instance.name,
        shapes.len(),
        ext_instance.shapes.len(),
        ext_instance.panel.width,
        ext_instance.panel.height
    );

    NestInstance::new(
        ext_instance.name.clone(),
        ext_instance.panel.width,
        ext_instance.panel.height,
        shapes,
    )
}

pub fn import_shape(ext_shape: &ExtShape) -> Result<ShapeKind> {
    let kind = match ext_shape {
        ExtShape::Segment { start, end } => {
            ShapeKind::Segment(Edge::try_new(Point::from(*start), Point::from(*end))?)
        }
        ExtShape::Circle { center, radius } => {
            ShapeKind::Circle(Circle::try_new(Point::from(*center), *radius)?)
        }
        ExtShape::Polyline(ext_pl) => ShapeKind::Polyline(import_polyline(ext_pl)?),
        ExtShape::Path(sub_paths) => ShapeKind::Path(
            sub_paths
                .iter()
                .map(import_polyline)
                .collect::<Result<Vec<_>>>()?,
        ),
    };
    Ok(kind)
}

fn import_polyline(ext_pl: &ExtPolyline) -> Result<Polyline> {
    let points = ext_pl.points.iter().map(|&p| Point::from(p)).collect_vec();
    Polyline::try_new(points, ext_pl.closed)
}
