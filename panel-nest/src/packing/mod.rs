/// Best-Area-Fit placement and free space bookkeeping of a single bin
pub mod packer;

/// Distribution of shapes over as many bins as needed
pub mod orchestrator;

/// Rigid transformations which move shapes into their packed rectangles
pub mod transform;

#[doc(inline)]
pub use orchestrator::Insertion;
#[doc(inline)]
pub use orchestrator::NestProblem;
#[doc(inline)]
pub use orchestrator::NestSolution;
#[doc(inline)]
pub use orchestrator::pack_all;
#[doc(inline)]
pub use transform::resolve_transform;
