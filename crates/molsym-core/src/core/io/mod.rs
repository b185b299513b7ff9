//! Reading and writing molecule definitions and rendered trajectories.
//!
//! Molecule definitions are stored as TOML documents behind the
//! [`traits::MoleculeFile`] interface; rendered animation frames are exported
//! as CSV through [`trajectory::TrajectoryWriter`].

pub mod molecule_toml;
pub mod trajectory;
pub mod traits;
