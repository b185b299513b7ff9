use crate::core::models::molecule::MoleculeError;
use crate::core::symmetry::error::SymmetryError;
use crate::engine::config::ConfigError;
use crate::engine::error::EngineError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Molecule(#[from] MoleculeError),

    #[error(transparent)]
    Symmetry(#[from] SymmetryError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Molecule '{molecule}' has no symmetry element {index} (it declares {count})")]
    UnknownElement {
        molecule: String,
        index: usize,
        count: usize,
    },

    #[error("Frame rate must be a positive number of frames per second, got {0}")]
    InvalidFrameRate(f64),
}
