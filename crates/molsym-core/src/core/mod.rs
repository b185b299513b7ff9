//! # Core Module
//!
//! Stateless building blocks of the symmetry engine: the molecule model, the
//! pure geometry of symmetry operations, the built-in molecule library and
//! file I/O.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, point groups and declared symmetry elements
//! - **Symmetry Operations** ([`symmetry`]) - Applying E, Cn, σ, i and Sn to positions, and invariance checks
//! - **Built-in Molecules** ([`library`]) - Curated molecules with exact geometry and element data
//! - **File I/O** ([`io`]) - TOML molecule definitions and CSV trajectory export
//! - **Utilities** ([`utils`]) - Vector geometry helpers shared by the modules above
//!
//! Nothing in this module keeps state between calls. Operations are pure
//! functions of their inputs and molecules are immutable once built.

pub mod io;
pub mod library;
pub mod models;
pub mod symmetry;
pub mod utils;
