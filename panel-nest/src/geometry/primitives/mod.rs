mod circle;
mod edge;
mod point;
mod polyline;
mod rect;

#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use polyline::Polyline;
#[doc(inline)]
pub use rect::Rect;
