use crate::core::symmetry::error::SymmetryError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Symmetry operation failed: {source}")]
    Symmetry {
        #[from]
        source: SymmetryError,
    },

    #[error(
        "Cannot animate between configurations of different size ({original} vs {transformed} positions)"
    )]
    LengthMismatch { original: usize, transformed: usize },

    #[error("Invalid animation duration: {0}")]
    InvalidDuration(String),
}
