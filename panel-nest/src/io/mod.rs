mod export;
mod import;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for drawing the bins of a solution as SVG
pub mod svg;

/// Exports a nesting solution out of the library.
pub use export::{export, export_bin, export_shape};

/// Imports a nesting instance into the library.
pub use import::{import, import_shape};
