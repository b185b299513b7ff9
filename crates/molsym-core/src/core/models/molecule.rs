use super::atom::Atom;
use super::point_group::PointGroup;
use super::symmetry::SymmetryElement;
use super::topology::Bond;
use crate::core::symmetry::error::SymmetryError;
use crate::core::utils::geometry::{are_parallel, are_perpendicular};
use nalgebra::{Point3, Vector3};
use std::collections::BTreeMap;
use thiserror::Error;

/// Angular tolerance (radians) used when classifying planes against axes.
const AXIS_ANGLE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoleculeError {
    #[error(
        "Bond {bond} references atom index {atom}, but the molecule has only {atom_count} atoms"
    )]
    InvalidBondReference {
        bond: usize,
        atom: usize,
        atom_count: usize,
    },

    #[error("Symmetry element {index} is invalid: {source}")]
    InvalidSymmetryElement {
        index: usize,
        #[source]
        source: SymmetryError,
    },
}

/// Orientation of a mirror plane relative to the molecule's principal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorPlaneKind {
    /// σh: perpendicular to the principal axis.
    Horizontal,
    /// σv: contains the principal axis.
    Vertical,
    /// σd: contains the principal axis and bisects the perpendicular C2 axes.
    Dihedral,
    /// No principal axis, or an oblique plane.
    Unclassified,
}

impl MirrorPlaneKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Horizontal => "σh",
            Self::Vertical => "σv",
            Self::Dihedral => "σd",
            Self::Unclassified => "σ",
        }
    }
}

/// An immutable, rigid molecule with its declared symmetry.
///
/// Atom order is fixed at construction and bonds refer to atoms by index.
/// Loading a different molecule means constructing a new value; nothing here
/// is mutated after [`Molecule::new`] succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    name: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    point_group: PointGroup,
    symmetry_elements: Vec<SymmetryElement>,
}

impl Molecule {
    /// Creates a molecule after validating its bonds and symmetry elements.
    ///
    /// Element directions and normals are stored normalized.
    ///
    /// # Errors
    ///
    /// * [`MoleculeError::InvalidBondReference`] if a bond index is out of range.
    /// * [`MoleculeError::InvalidSymmetryElement`] if an element has a zero or
    ///   non-finite direction, or a rotation order below 2.
    pub fn new(
        name: impl Into<String>,
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
        point_group: PointGroup,
        symmetry_elements: Vec<SymmetryElement>,
    ) -> Result<Self, MoleculeError> {
        let atom_count = atoms.len();
        for (bond_idx, bond) in bonds.iter().enumerate() {
            for atom in [bond.atom1, bond.atom2] {
                if atom >= atom_count {
                    return Err(MoleculeError::InvalidBondReference {
                        bond: bond_idx,
                        atom,
                        atom_count,
                    });
                }
            }
        }

        let symmetry_elements = symmetry_elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                element
                    .validate()
                    .map(|_| element.normalized())
                    .map_err(|source| MoleculeError::InvalidSymmetryElement { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.into(),
            atoms,
            bonds,
            point_group,
            symmetry_elements,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// The untransformed base geometry, in atom order.
    pub fn atom_positions(&self) -> Vec<Point3<f64>> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn point_group(&self) -> PointGroup {
        self.point_group
    }

    pub fn symmetry_elements(&self) -> &[SymmetryElement] {
        &self.symmetry_elements
    }

    /// Direction of the highest-order proper rotation axis. Ties go to the
    /// axis declared first.
    pub fn principal_axis(&self) -> Option<Vector3<f64>> {
        let mut best: Option<(u32, Vector3<f64>)> = None;
        for element in &self.symmetry_elements {
            if let SymmetryElement::RotationAxis { direction, order } = element {
                if best.is_none_or(|(o, _)| *order > o) {
                    best = Some((*order, *direction));
                }
            }
        }
        best.map(|(_, axis)| axis)
    }

    /// Classifies a mirror plane (given by its normal) as σh, σv or σd.
    ///
    /// A vertical plane is dihedral when the molecule declares C2 axes
    /// perpendicular to the principal axis and the plane contains none of
    /// them. In tetrahedral molecules every mirror plane is a σd.
    pub fn mirror_plane_kind(&self, normal: &Vector3<f64>) -> MirrorPlaneKind {
        let Some(principal) = self.principal_axis() else {
            return MirrorPlaneKind::Unclassified;
        };
        if self.point_group == PointGroup::Td {
            return MirrorPlaneKind::Dihedral;
        }
        if are_parallel(normal, &principal, AXIS_ANGLE_TOLERANCE) {
            return MirrorPlaneKind::Horizontal;
        }
        if !are_perpendicular(normal, &principal, AXIS_ANGLE_TOLERANCE) {
            return MirrorPlaneKind::Unclassified;
        }

        let perpendicular_c2: Vec<Vector3<f64>> = self
            .symmetry_elements
            .iter()
            .filter_map(|e| match e {
                SymmetryElement::RotationAxis { direction, order: 2 }
                    if are_perpendicular(direction, &principal, AXIS_ANGLE_TOLERANCE) =>
                {
                    Some(*direction)
                }
                _ => None,
            })
            .collect();

        let contains_c2 = perpendicular_c2
            .iter()
            .any(|axis| are_perpendicular(axis, normal, AXIS_ANGLE_TOLERANCE));
        if perpendicular_c2.is_empty() || contains_c2 {
            MirrorPlaneKind::Vertical
        } else {
            MirrorPlaneKind::Dihedral
        }
    }

    /// Molecular formula in Hill order (C, then H, then alphabetical).
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element.clone()).or_default() += 1;
        }
        let mut parts = Vec::new();
        let mut push = |element: &str, count: usize| {
            if count == 1 {
                parts.push(element.to_string());
            } else {
                parts.push(format!("{}{}", element, count));
            }
        };
        if let Some(c) = counts.remove("C") {
            push("C", c);
            if let Some(h) = counts.remove("H") {
                push("H", h);
            }
        }
        for (element, count) in counts {
            push(&element, count);
        }
        parts.concat()
    }
}
