use crate::core::io::traits::MoleculeFile;
use crate::core::models::atom::Atom;
use crate::core::models::molecule::{Molecule, MoleculeError};
use crate::core::models::point_group::{ParsePointGroupError, PointGroup};
use crate::core::models::symmetry::SymmetryElement;
use crate::core::models::topology::{Bond, BondOrder, ParseBondOrderError};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoleculeTomlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid point group: {0}")]
    PointGroup(#[from] ParsePointGroupError),
    #[error("Invalid order for bond {bond}: {source}")]
    BondOrder {
        bond: usize,
        #[source]
        source: ParseBondOrderError,
    },
    #[error("Invalid molecule: {0}")]
    Molecule(#[from] MoleculeError),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct MoleculeRecord {
    name: String,
    #[serde(default)]
    point_group: Option<String>,
    #[serde(default)]
    atoms: Vec<AtomRecord>,
    #[serde(default)]
    bonds: Vec<BondRecord>,
    #[serde(default)]
    symmetry_elements: Vec<ElementRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AtomRecord {
    element: String,
    position: [f64; 3],
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BondRecord {
    atoms: [usize; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum ElementRecord {
    RotationAxis {
        direction: [f64; 3],
        order: u32,
    },
    MirrorPlane {
        normal: [f64; 3],
    },
    InversionCenter {
        #[serde(default)]
        point: [f64; 3],
    },
    ImproperRotationAxis {
        direction: [f64; 3],
        order: u32,
    },
}

fn vector(v: [f64; 3]) -> Vector3<f64> {
    Vector3::new(v[0], v[1], v[2])
}

fn components(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

impl From<ElementRecord> for SymmetryElement {
    fn from(record: ElementRecord) -> Self {
        match record {
            ElementRecord::RotationAxis { direction, order } => {
                SymmetryElement::rotation_axis(vector(direction), order)
            }
            ElementRecord::MirrorPlane { normal } => SymmetryElement::mirror_plane(vector(normal)),
            ElementRecord::InversionCenter { point } => SymmetryElement::InversionCenter {
                point: Point3::new(point[0], point[1], point[2]),
            },
            ElementRecord::ImproperRotationAxis { direction, order } => {
                SymmetryElement::improper_rotation_axis(vector(direction), order)
            }
        }
    }
}

impl From<&SymmetryElement> for ElementRecord {
    fn from(element: &SymmetryElement) -> Self {
        match element {
            SymmetryElement::RotationAxis { direction, order } => ElementRecord::RotationAxis {
                direction: components(direction),
                order: *order,
            },
            SymmetryElement::MirrorPlane { normal } => ElementRecord::MirrorPlane {
                normal: components(normal),
            },
            SymmetryElement::InversionCenter { point } => ElementRecord::InversionCenter {
                point: components(&point.coords),
            },
            SymmetryElement::ImproperRotationAxis { direction, order } => {
                ElementRecord::ImproperRotationAxis {
                    direction: components(direction),
                    order: *order,
                }
            }
        }
    }
}

/// TOML molecule definitions.
///
/// ```toml
/// name = "water"
/// point-group = "C2v"
///
/// [[atoms]]
/// element = "O"
/// position = [0.0, 0.0, 0.0]
///
/// [[bonds]]
/// atoms = [0, 1]
/// order = "single"
///
/// [[symmetry-elements]]
/// type = "rotation-axis"
/// direction = [0.0, 1.0, 0.0]
/// order = 2
/// ```
///
/// A missing `point-group` reads as C1 and a missing bond `order` as single.
pub struct MoleculeToml;

impl MoleculeToml {
    pub fn parse(content: &str) -> Result<Molecule, MoleculeTomlError> {
        let record: MoleculeRecord = toml::from_str(content)?;

        let point_group = match record.point_group {
            Some(label) => label.parse::<PointGroup>()?,
            None => PointGroup::default(),
        };
        let atoms = record
            .atoms
            .into_iter()
            .map(|a| Atom::new(&a.element, Point3::from(a.position)))
            .collect();
        let bonds = record
            .bonds
            .into_iter()
            .enumerate()
            .map(|(bond, b)| {
                let order = match b.order {
                    Some(label) => label
                        .parse::<BondOrder>()
                        .map_err(|source| MoleculeTomlError::BondOrder { bond, source })?,
                    None => BondOrder::default(),
                };
                Ok(Bond::new(b.atoms[0], b.atoms[1], order))
            })
            .collect::<Result<Vec<_>, MoleculeTomlError>>()?;
        let elements = record
            .symmetry_elements
            .into_iter()
            .map(SymmetryElement::from)
            .collect();

        Ok(Molecule::new(record.name, atoms, bonds, point_group, elements)?)
    }

    pub fn to_toml_string(molecule: &Molecule) -> Result<String, MoleculeTomlError> {
        let record = MoleculeRecord {
            name: molecule.name().to_string(),
            point_group: Some(molecule.point_group().to_string()),
            atoms: molecule
                .atoms()
                .iter()
                .map(|a| AtomRecord {
                    element: a.element.clone(),
                    position: components(&a.position.coords),
                })
                .collect(),
            bonds: molecule
                .bonds()
                .iter()
                .map(|b| BondRecord {
                    atoms: [b.atom1, b.atom2],
                    order: Some(b.order.to_string()),
                })
                .collect(),
            symmetry_elements: molecule
                .symmetry_elements()
                .iter()
                .map(ElementRecord::from)
                .collect(),
        };
        Ok(toml::to_string(&record)?)
    }
}

impl MoleculeFile for MoleculeToml {
    type Error = MoleculeTomlError;

    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content)
    }

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        let content = Self::to_toml_string(molecule)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }
}
