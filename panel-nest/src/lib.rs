//! Nesting of 2D drawing shapes onto fixed-size rectangular panels.
//!
//! Every shape is reduced to its axis-aligned bounding box, the boxes are packed onto as few panels
//! as the Best-Area-Fit heuristic manages (optionally rotating them by 90°), and the rigid
//! transformation which moves each original shape into its packed box is resolved afterwards.

/// Geometric primitives and transformations
pub mod geometry;

/// Entities to model a panel nesting run
pub mod entities;

/// The rectangle packer, the multi-bin orchestrator and the placement transform resolver
pub mod packing;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
