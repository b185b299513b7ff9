use nalgebra::Point3;

/// Represents a single atom of a rigid molecule.
///
/// An atom is identified by its element symbol and carries its position in
/// the molecule's reference frame. Atoms are immutable once constructed; the
/// owning [`Molecule`](super::molecule::Molecule) keeps them in a fixed order
/// so that bonds can refer to them by index.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element symbol (e.g., "C", "H", "O").
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` from an element symbol and a position.
    ///
    /// Surrounding whitespace in the symbol is trimmed so that data read from
    /// files compares equal to data written in code.
    ///
    /// # Arguments
    ///
    /// * `element` - The element symbol.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(element: &str, position: Point3<f64>) -> Self {
        Self {
            element: element.trim().to_string(),
            position,
        }
    }

    /// Returns `true` if both atoms are of the same element (case-insensitive).
    pub fn same_element(&self, other: &Atom) -> bool {
        self.element.eq_ignore_ascii_case(&other.element)
    }

    pub fn is_hydrogen(&self) -> bool {
        matches!(self.element.to_ascii_uppercase().as_str(), "H" | "D")
    }
}
