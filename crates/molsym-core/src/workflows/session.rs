use super::error::SessionError;
use crate::core::models::molecule::{MirrorPlaneKind, Molecule};
use crate::core::models::topology::Bond;
use crate::core::symmetry::{SymmetryOperation, apply, is_invariant};
use crate::core::utils::geometry::are_parallel;
use crate::engine::animator::Animator;
use crate::engine::config::SessionConfig;
use crate::engine::state::{AnimationId, AnimationPhase};
use nalgebra::Point3;
use std::time::Duration;
use tracing::{debug, info};

const PRINCIPAL_AXIS_TOLERANCE: f64 = 1e-6;

/// Result of performing one operation on the session's molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOutcome {
    pub operation: SymmetryOperation,
    pub description: String,
    /// Image of every atom, in atom order.
    pub transformed: Vec<Point3<f64>>,
    /// Whether the image coincides with the original configuration within
    /// the session tolerance.
    pub invariant: bool,
    pub animation: AnimationId,
}

/// What the renderer should draw at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub elapsed: Duration,
    pub phase: AnimationPhase,
    pub positions: Vec<Point3<f64>>,
}

impl Frame {
    /// Endpoint pairs for every bond, for rebuilding bond geometry after the
    /// atoms have moved. Bonds referring past the end of the frame are skipped.
    pub fn bond_segments(&self, bonds: &[Bond]) -> Vec<(Point3<f64>, Point3<f64>)> {
        bonds
            .iter()
            .filter_map(|b| {
                let a = self.positions.get(b.atom1)?;
                let c = self.positions.get(b.atom2)?;
                Some((*a, *c))
            })
            .collect()
    }
}

/// The context an interactive host works in: the molecule on screen, the
/// animator moving it, and the session settings.
///
/// There is at most one animation in flight. Performing a new operation or
/// loading another molecule supersedes it.
#[derive(Debug)]
pub struct SymmetrySession {
    molecule: Molecule,
    config: SessionConfig,
    animator: Animator,
}

impl SymmetrySession {
    pub fn new(molecule: Molecule, config: SessionConfig) -> Self {
        Self {
            molecule,
            config,
            animator: Animator::new(),
        }
    }

    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> AnimationPhase {
        self.animator.phase()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Replaces the molecule. Any animation of the previous molecule is
    /// cancelled.
    pub fn load_molecule(&mut self, molecule: Molecule) {
        self.animator.cancel();
        info!(
            "Loaded molecule '{}' ({}, {} atoms).",
            molecule.name(),
            molecule.point_group(),
            molecule.atom_count()
        );
        self.molecule = molecule;
    }

    /// Applies `op` to the molecule and starts animating toward the result.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Symmetry`] if the operation's parameters are
    /// invalid; the animation in flight is left untouched in that case.
    pub fn perform(&mut self, op: &SymmetryOperation) -> Result<OperationOutcome, SessionError> {
        let original = self.molecule.atom_positions();
        let transformed = apply(&original, op)?;
        let invariant = is_invariant(&original, &transformed, self.config.tolerance);
        let animation = self
            .animator
            .start_with(&original, &transformed, &self.config.animation)?;
        let description = self.describe(op);
        debug!(
            "Performed {} on '{}' (invariant: {}).",
            op.symbol(),
            self.molecule.name(),
            invariant
        );
        Ok(OperationOutcome {
            operation: *op,
            description,
            transformed,
            invariant,
            animation,
        })
    }

    /// Performs the operation generated by the molecule's declared element
    /// at `index`.
    pub fn perform_element(&mut self, index: usize) -> Result<OperationOutcome, SessionError> {
        let elements = self.molecule.symmetry_elements();
        let element = elements
            .get(index)
            .ok_or_else(|| SessionError::UnknownElement {
                molecule: self.molecule.name().to_string(),
                index,
                count: elements.len(),
            })?;
        let op = element.operation();
        self.perform(&op)
    }

    /// Describes `op` relative to the current molecule.
    ///
    /// Axes that coincide with the principal axis are named as such, and
    /// mirror planes are labelled σh, σv or σd where the molecule allows it.
    pub fn describe(&self, op: &SymmetryOperation) -> String {
        let principal = self.molecule.principal_axis();
        let on_principal = match (op, principal) {
            (
                SymmetryOperation::Rotation { axis, .. }
                | SymmetryOperation::ImproperRotation { axis, .. },
                Some(principal),
            ) => are_parallel(axis, &principal, PRINCIPAL_AXIS_TOLERANCE),
            _ => false,
        };
        let plane_symbol = match op {
            SymmetryOperation::Reflection { plane_normal } => {
                match self.molecule.mirror_plane_kind(plane_normal) {
                    MirrorPlaneKind::Unclassified => None,
                    kind => Some(kind.symbol()),
                }
            }
            _ => None,
        };
        op.describe_with(on_principal.then_some("the principal axis"), plane_symbol)
    }

    /// Positions to draw `elapsed` after the last `perform`. Without an
    /// animation in flight this is the base geometry.
    pub fn tick(&mut self, elapsed: Duration) -> Frame {
        match self.animator.sample(elapsed) {
            Some(positions) => Frame {
                elapsed,
                phase: self.animator.phase(),
                positions,
            },
            None => Frame {
                elapsed,
                phase: AnimationPhase::Idle,
                positions: self.molecule.atom_positions(),
            },
        }
    }

    pub fn cancel(&mut self) {
        self.animator.cancel();
    }
}
