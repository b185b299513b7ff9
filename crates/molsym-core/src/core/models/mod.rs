//! # Core Models Module
//!
//! Data structures describing a rigid molecule and the symmetry it is
//! declared to have.
//!
//! ## Key Components
//!
//! - [`atom`] - Element symbol and position of a single atom
//! - [`topology`] - Bonds between atoms, referenced by atom index
//! - [`point_group`] - Point-group labels (C2v, C3v, Td, D6h, ...)
//! - [`symmetry`] - Declared symmetry elements (axes, planes, centers)
//! - [`molecule`] - The immutable molecule that owns all of the above
//! - [`builder`] - Fluent construction of molecules
//!
//! ## Usage
//!
//! ```ignore
//! use molsym::core::models::builder::MoleculeBuilder;
//! use molsym::core::models::point_group::PointGroup;
//! use molsym::core::models::symmetry::SymmetryElement;
//!
//! let water = MoleculeBuilder::new("water")
//!     .atom("O", 0.0, 0.0, 0.0)
//!     .atom("H", 0.76, 0.59, 0.0)
//!     .atom("H", -0.76, 0.59, 0.0)
//!     .bond(0, 1)
//!     .bond(0, 2)
//!     .point_group(PointGroup::C2v)
//!     .element(SymmetryElement::rotation_axis(Vector3::y(), 2))
//!     .build()?;
//! ```

pub mod atom;
pub mod builder;
pub mod molecule;
pub mod point_group;
pub mod symmetry;
pub mod topology;
