mod d_transformation;
pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;
mod transformation;

#[doc(inline)]
pub use d_transformation::DTransformation;
#[doc(inline)]
pub use transformation::Transformation;
