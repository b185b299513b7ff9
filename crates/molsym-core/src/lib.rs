//! # MolSym Core Library
//!
//! A molecular symmetry operation engine for chemistry-education visualizers.
//! Given a rigid molecule and a point-group symmetry operation, it computes
//! where every atom goes and interpolates the transition for animation.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable molecule models, the pure
//!   geometry of symmetry operations (`apply`, `is_invariant`), the built-in
//!   molecule library and file I/O.
//!
//! - **[`engine`]: The Logic Core.** The stateful animation layer: the
//!   [`Animator`](engine::animator::Animator) state machine that moves a
//!   molecule forward, holds, and reverses, together with easing curves,
//!   configuration, progress reporting and engine errors.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together:
//!   an explicit [`SymmetrySession`](workflows::session::SymmetrySession)
//!   context for interactive hosts, validation of curated symmetry data, and
//!   offline rendering of whole animation cycles.
//!
//! Rendering, cameras and UI are left to the host; the library hands out
//! positions and description strings only.

pub mod core;
pub mod engine;
pub mod workflows;
