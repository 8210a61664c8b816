use serde::{Deserialize, Serialize};

use crate::geometry::DTransformation;

/// External representation of a [`NestInstance`](crate::entities::NestInstance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Size of every panel
    pub panel: ExtPanel,
    /// Shapes to nest, in order of priority
    pub shapes: Vec<ExtShapeRecord>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtPanel {
    pub width: f64,
    pub height: f64,
}

/// A shape from a drawing, to be nested `quantity` times.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtShapeRecord {
    /// Identifier of the shape in the drawing
    pub id: u64,
    /// Number of copies to nest
    #[serde(default = "default_quantity")]
    pub quantity: usize,
    /// Geometry of the shape
    pub shape: ExtShape,
}

fn default_quantity() -> usize {
    1
}

/// Geometry of a [`ShapeKind`](crate::entities::ShapeKind)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    /// Straight line between two points
    Segment { start: (f64, f64), end: (f64, f64) },
    Circle { center: (f64, f64), radius: f64 },
    Polyline(ExtPolyline),
    /// Sub-paths which are nested together
    Path(Vec<ExtPolyline>),
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPolyline {
    pub points: Vec<(f64, f64)>,
    #[serde(default)]
    pub closed: bool,
}

/// External representation of a [`NestSolution`](crate::packing::NestSolution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Every opened panel with the shapes placed on it
    pub panels: Vec<ExtPanelLayout>,
    /// Shapes which were excluded from the run
    pub rejected: Vec<ExtRejection>,
    /// Number of panels used
    pub n_panels: usize,
    /// Sum of the packed areas divided by the sum of the panel areas
    pub density: f64,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPanelLayout {
    /// Index of the panel, in order of creation
    pub index: usize,
    pub placed_shapes: Vec<ExtPlacedShape>,
    pub density: f64,
}

/// A shape placed on a panel, both as its packed bounding box and as the transformation to apply to its geometry
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedShape {
    /// Id of the shape within the run
    pub shape_id: usize,
    /// Id of the shape in the drawing
    pub source_id: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
    /// Transformation moving the original geometry into the packed box
    pub transformation: ExtTransformation,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtRejection {
    pub shape_id: usize,
    pub source_id: u64,
    #[serde(flatten)]
    pub reason: ExtRejectionReason,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ExtRejectionReason {
    Degenerate { width: f64, height: f64 },
    Oversized { width: f64, height: f64 },
}

/// Represents a proper rigid transformation defined as a rotation followed by translation
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtTransformation {
    /// The rotation angle in radians
    pub rotation: f64,
    /// The translation vector (x, y)
    pub translation: (f64, f64),
}

impl From<DTransformation> for ExtTransformation {
    fn from(dt: DTransformation) -> Self {
        ExtTransformation {
            rotation: dt.rotation(),
            translation: dt.translation(),
        }
    }
}
