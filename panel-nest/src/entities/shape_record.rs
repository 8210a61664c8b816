use anyhow::{Result, bail};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Circle, Edge, Polyline, Rect};

/// Identifier of a [`ShapeRecord`], unique within one nesting run
pub type ShapeId = usize;

/// Geometry of a shape as it was read from a drawing.
/// Only the drawing reader and writer look inside; packing works on the bounding box alone.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Segment(Edge),
    Circle(Circle),
    Polyline(Polyline),
    /// Group of sub-paths which are nested together as a single part
    Path(Vec<Polyline>),
}

impl ShapeKind {
    /// Bounding box of the geometry, `None` if it has none (e.g. a path without sub-paths).
    pub fn bbox(&self) -> Option<Rect> {
        match self {
            ShapeKind::Segment(e) => Some(e.bbox()),
            ShapeKind::Circle(c) => Some(c.bbox()),
            ShapeKind::Polyline(pl) => Some(pl.bbox()),
            ShapeKind::Path(sub_paths) => sub_paths
                .iter()
                .map(|pl| pl.bbox())
                .reduce(Rect::bounding_rect),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Segment(_) => "segment",
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Polyline(_) => "polyline",
            ShapeKind::Path(_) => "path",
        }
    }
}

impl Transformable for ShapeKind {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        match self {
            ShapeKind::Segment(e) => {
                e.transform(t);
            }
            ShapeKind::Circle(c) => {
                c.transform(t);
            }
            ShapeKind::Polyline(pl) => {
                pl.transform(t);
            }
            ShapeKind::Path(sub_paths) => sub_paths.iter_mut().for_each(|pl| {
                pl.transform(t);
            }),
        }
        self
    }
}

/// A shape to be nested, normalized to its axis-aligned bounding box.
/// Immutable once created.
#[derive(Clone, Debug)]
pub struct ShapeRecord {
    id: ShapeId,
    source_id: u64,
    copy: usize,
    kind: ShapeKind,
    bbox: Rect,
}

impl ShapeRecord {
    /// Creates a record of `kind`, failing if its geometry has no finite bounding box.
    /// Degenerate boxes (zero width or height) are accepted here and rejected when packing.
    pub fn new(id: ShapeId, kind: ShapeKind) -> Result<Self> {
        let bbox = match kind.bbox() {
            Some(bbox) if bbox.is_finite() => bbox,
            _ => bail!("{} shape {id} has no finite bounding box", kind.name()),
        };
        Ok(Self {
            id,
            source_id: id as u64,
            copy: 0,
            kind,
            bbox,
        })
    }

    /// Ties the record to the external shape it was created from, as its `copy`-th instance.
    pub fn with_source(mut self, source_id: u64, copy: usize) -> Self {
        self.source_id = source_id;
        self.copy = copy;
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn source_id(&self) -> u64 {
        self.source_id
    }

    pub fn copy(&self) -> usize {
        self.copy
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    pub fn width(&self) -> f64 {
        self.bbox.width()
    }

    pub fn height(&self) -> f64 {
        self.bbox.height()
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
}
