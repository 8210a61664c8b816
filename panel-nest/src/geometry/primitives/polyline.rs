use anyhow::{Result, ensure};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};

/// Sequence of connected line segments, optionally closed into a ring.
/// Contains at least one point, all of them finite. Only [`Polyline::try_new`] creates one.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    closed: bool,
}

impl Polyline {
    pub fn try_new(points: Vec<Point>, closed: bool) -> Result<Self> {
        ensure!(!points.is_empty(), "polyline has no points");
        ensure!(
            points.iter().all(|p| p.is_finite()),
            "polyline contains non-finite points"
        );
        Ok(Polyline { points, closed })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the last point connects back to the first
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Transformable for Polyline {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        self.points.iter_mut().for_each(|p| {
            p.transform(t);
        });
        self
    }
}

impl Shape for Polyline {
    fn bbox(&self) -> Rect {
        Rect::enclosing(self.points.iter().copied())
            .expect("polyline is guaranteed to contain at least one point")
    }
}
