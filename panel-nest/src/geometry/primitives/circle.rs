use anyhow::{Result, ensure};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn try_new(center: Point, radius: f64) -> Result<Self> {
        ensure!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        ensure!(center.is_finite(), "invalid circle center: {center:?}");
        Ok(Self { center, radius })
    }
}

impl Transformable for Circle {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Circle { center, radius: _ } = self;
        center.transform(t);
        self
    }
}

impl Shape for Circle {
    fn bbox(&self) -> Rect {
        let Point(cx, cy) = self.center;
        let r = self.radius;
        Rect {
            x_min: cx - r,
            y_min: cy - r,
            x_max: cx + r,
            y_max: cy + r,
        }
    }
}
