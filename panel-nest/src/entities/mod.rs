mod bin;
mod instance;
mod packed_rect;
mod rejection;
mod shape_record;

#[doc(inline)]
pub use bin::Bin;

#[doc(inline)]
pub use instance::NestInstance;

#[doc(inline)]
pub use packed_rect::PackedRect;

#[doc(inline)]
pub use rejection::Rejection;

#[doc(inline)]
pub use rejection::RejectionReason;

#[doc(inline)]
pub use shape_record::ShapeId;

#[doc(inline)]
pub use shape_record::ShapeKind;

#[doc(inline)]
pub use shape_record::ShapeRecord;
