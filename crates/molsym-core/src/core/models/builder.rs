use super::atom::Atom;
use super::molecule::{Molecule, MoleculeError};
use super::point_group::PointGroup;
use super::symmetry::SymmetryElement;
use super::topology::{Bond, BondOrder};
use nalgebra::Point3;

/// Incremental construction of a [`Molecule`].
///
/// Bonds may reference atoms that have not been added yet; every index is
/// checked once, in [`MoleculeBuilder::build`].
#[derive(Debug, Default)]
pub struct MoleculeBuilder {
    name: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    point_group: PointGroup,
    elements: Vec<SymmetryElement>,
}

impl MoleculeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn atom(mut self, element: &str, x: f64, y: f64, z: f64) -> Self {
        self.atoms.push(Atom::new(element, Point3::new(x, y, z)));
        self
    }

    pub fn atom_at(mut self, element: &str, position: Point3<f64>) -> Self {
        self.atoms.push(Atom::new(element, position));
        self
    }

    pub fn bond(self, atom1: usize, atom2: usize) -> Self {
        self.bond_with_order(atom1, atom2, BondOrder::Single)
    }

    pub fn bond_with_order(mut self, atom1: usize, atom2: usize, order: BondOrder) -> Self {
        self.bonds.push(Bond::new(atom1, atom2, order));
        self
    }

    pub fn point_group(mut self, point_group: PointGroup) -> Self {
        self.point_group = point_group;
        self
    }

    pub fn element(mut self, element: SymmetryElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn elements(mut self, elements: impl IntoIterator<Item = SymmetryElement>) -> Self {
        self.elements.extend(elements);
        self
    }

    /// Index the next added atom will receive.
    pub fn next_atom_index(&self) -> usize {
        self.atoms.len()
    }

    pub fn build(self) -> Result<Molecule, MoleculeError> {
        Molecule::new(
            self.name,
            self.atoms,
            self.bonds,
            self.point_group,
            self.elements,
        )
    }
}
