use std::fmt::{Display, Formatter};

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::entities::ShapeKind;
use crate::geometry::primitives::{Polyline, Rect};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
#[serde(default)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    pub theme: SvgLayoutTheme,
    ///Draw the packed bounding box of every shape underneath it
    pub draw_packed_rects: bool,
    ///Draw the remaining free rectangles of the panel on top
    pub draw_free_rects: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            draw_packed_rects: true,
            draw_free_rects: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub panel_fill: Color,
    pub shape_stroke: Color,
    pub packed_rect_fill: Color,
    pub free_rect_stroke: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        panel_fill: Color(0xCC, 0x82, 0x4A),
        shape_stroke: Color(0x00, 0x00, 0x00),
        packed_rect_fill: Color(0xFF, 0xC8, 0x79),
        free_rect_stroke: Color(0x00, 0xFF, 0x00), // LIME
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        panel_fill: Color(0xD3, 0xD3, 0xD3),
        shape_stroke: Color(0x00, 0x00, 0x00),
        packed_rect_fill: Color(0x7A, 0x7A, 0x7A),
        free_rect_stroke: Color(0xD0, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Parses a `#RRGGBB` (or `RRGGBB`) hex string.
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("invalid color: {s:?}");
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

pub fn rect_data(rect: &Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

fn polyline_data(data: Data, pl: &Polyline) -> Data {
    let mut points = pl.points().iter().map(|&p| <(f64, f64)>::from(p));
    let Some(first) = points.next() else {
        return data;
    };
    let data = points.fold(data.move_to(first), |data, p| data.line_to(p));
    match pl.is_closed() {
        true => data.close(),
        false => data,
    }
}

/// Draws any shape, circles as `<circle>`, everything else as `<path>`.
pub fn shape_to_svg(kind: &ShapeKind, params: &[(&str, &str)]) -> ShapeElement {
    let data = match kind {
        ShapeKind::Circle(c) => {
            let circle = Circle::new()
                .set("cx", c.center.x())
                .set("cy", c.center.y())
                .set("r", c.radius);
            let circle = params.iter().fold(circle, |circle, (k, v)| circle.set(*k, *v));
            return ShapeElement::Circle(circle);
        }
        ShapeKind::Segment(e) => Data::new()
            .move_to(<(f64, f64)>::from(e.start))
            .line_to(<(f64, f64)>::from(e.end)),
        ShapeKind::Polyline(pl) => polyline_data(Data::new(), pl),
        ShapeKind::Path(sub_paths) => sub_paths.iter().fold(Data::new(), polyline_data),
    };
    ShapeElement::Path(data_to_path(data, params))
}

/// An SVG element representing a single shape
pub enum ShapeElement {
    Circle(Circle),
    Path(Path),
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
