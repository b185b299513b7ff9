//! # Engine Module
//!
//! The stateful animation layer of MolSym.
//!
//! ## Overview
//!
//! Symmetry operations in [`crate::core::symmetry`] are instantaneous: they map
//! a configuration to its image. The engine turns such a pair of
//! configurations into motion a renderer can sample frame by frame, moving
//! the molecule to its image, holding it there, and bringing it back.
//!
//! ## Architecture
//!
//! - **Animation** ([`animator`]) - The `Idle → Forward → Holding → Reverse → Idle` state machine
//! - **State Tracking** ([`state`]) - Phases and the per-animation state record
//! - **Easing** ([`easing`]) - Interpolation curves mapping `[0, 1]` onto `[0, 1]`
//! - **Configuration** ([`config`]) - Animation timing, easing and tolerance settings with builders
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting for long workflows
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! The engine never sleeps, spawns or performs I/O. Time is supplied by the
//! host as the elapsed duration since an animation started.

pub mod animator;
pub mod config;
pub mod easing;
pub mod error;
pub mod progress;
pub mod state;
