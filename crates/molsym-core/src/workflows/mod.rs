//! # Workflows Module
//!
//! High-level entry points that tie the molecule model, the symmetry
//! operations and the animation engine together.
//!
//! ## Architecture
//!
//! - **Interactive Sessions** ([`session`]) - An explicit context holding the current molecule, its
//!   animator and settings; hosts drive it with `perform` and per-frame `tick` calls.
//! - **Validation Workflow** ([`validate`]) - Checks that every declared symmetry element really maps
//!   the molecule onto itself.
//! - **Animation Workflow** ([`animate`]) - Samples a whole forward / hold / reverse cycle at a fixed
//!   frame rate for offline export.
//!
//! All workflows report failures through [`SessionError`].

pub mod animate;
mod error;
pub mod session;
pub mod validate;

pub use error::SessionError;
