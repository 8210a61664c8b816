use std::f64::consts::FRAC_PI_2;

use ordered_float::NotNan;

use crate::geometry::DTransformation;

/// Rigid transformation as a homogeneous 3x3 matrix: a rotation about the origin followed by a translation.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformation {
    matrix: [[NotNan<f64>; 3]; 3],
}

impl Transformation {
    pub fn from_dt(dt: &DTransformation) -> Self {
        let (sin, cos) = sin_cos(dt.rotation());
        let (tx, ty) = dt.translation();
        let nn = |v: f64| NotNan::new(v).expect("transformation contains NaN");
        let (_0, _1) = (nn(0.0), nn(1.0));

        Self {
            matrix: [
                [nn(cos), nn(-sin), nn(tx)],
                [nn(sin), nn(cos), nn(ty)],
                [_0, _0, _1],
            ],
        }
    }

    /// Applies the transformation to the point `(x, y)`.
    pub fn apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let m = self.matrix.map(|row| row.map(NotNan::into_inner));
        (
            m[0][0] * x + m[0][1] * y + m[0][2],
            m[1][0] * x + m[1][1] * y + m[1][2],
        )
    }
}

/// Sine and cosine of `angle`, exact for multiples of a quarter turn.
/// Keeps rectilinear placements free of rounding noise like `cos(π/2) = 6.1e-17`.
fn sin_cos(angle: f64) -> (f64, f64) {
    let quarter_turns = angle / FRAC_PI_2;
    if (quarter_turns - quarter_turns.round()).abs() < 1e-12 {
        match (quarter_turns.round() as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        angle.sin_cos()
    }
}
