//! # Symmetry Operations
//!
//! Pure geometry for point-group symmetry operations: the operation type
//! ([`operation`]), its application to a configuration of atom positions
//! ([`transform`]), and the checks that decide whether a transformed
//! configuration coincides with the original one ([`invariance`]).
//!
//! Everything here is deterministic and free of side effects. Invalid
//! parameters (zero-length axes or normals, rotation orders below 2) are
//! rejected up front with [`error::SymmetryError`] rather than producing NaN
//! coordinates.

pub mod error;
pub mod invariance;
pub mod operation;
pub mod transform;

pub use error::SymmetryError;
pub use invariance::{find_atom_mapping, is_invariant, max_deviation};
pub use operation::SymmetryOperation;
pub use transform::{apply, apply_repeated, compose};
