use crate::core::models::builder::MoleculeBuilder;
use crate::core::models::molecule::{Molecule, MoleculeError};
use crate::core::models::point_group::PointGroup;
use crate::core::models::symmetry::SymmetryElement;
use crate::core::models::topology::BondOrder;
use nalgebra::Vector3;
use std::f64::consts::{FRAC_PI_3, TAU};

const NH_RADIUS: f64 = 0.8;
const CH_BOND_METHANE: f64 = 1.09;
const CC_RING_RADIUS: f64 = 1.40;
const CH_RING_RADIUS: f64 = 2.48;
const BF_BOND: f64 = 1.31;

/// Bent water in the xy-plane with its C2 axis along y.
pub fn water() -> Result<Molecule, MoleculeError> {
    MoleculeBuilder::new("water")
        .atom("O", 0.0, 0.0, 0.0)
        .atom("H", 0.76, 0.59, 0.0)
        .atom("H", -0.76, 0.59, 0.0)
        .bond(0, 1)
        .bond(0, 2)
        .point_group(PointGroup::C2v)
        .element(SymmetryElement::rotation_axis(Vector3::y(), 2))
        .element(SymmetryElement::mirror_plane(Vector3::x()))
        .element(SymmetryElement::mirror_plane(Vector3::z()))
        .build()
}

/// Trigonal-pyramidal ammonia with its C3 axis along y.
pub fn ammonia() -> Result<Molecule, MoleculeError> {
    let mut builder = MoleculeBuilder::new("ammonia").atom("N", 0.0, 0.5, 0.0);
    for k in 0..3 {
        let theta = k as f64 * TAU / 3.0;
        builder = builder
            .atom("H", NH_RADIUS * theta.sin(), -0.5, NH_RADIUS * theta.cos())
            .bond(0, k + 1);
    }
    // Each σv contains the y axis and one N-H bond.
    let planes = (0..3).map(|k| {
        let theta = k as f64 * TAU / 3.0;
        SymmetryElement::mirror_plane(Vector3::new(theta.cos(), 0.0, -theta.sin()))
    });
    builder
        .point_group(PointGroup::C3v)
        .element(SymmetryElement::rotation_axis(Vector3::y(), 3))
        .elements(planes)
        .build()
}

/// Tetrahedral methane with hydrogens on alternate cube corners.
pub fn methane() -> Result<Molecule, MoleculeError> {
    let s = CH_BOND_METHANE / 3f64.sqrt();
    let corners = [
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(-1.0, -1.0, 1.0),
        Vector3::new(-1.0, 1.0, -1.0),
        Vector3::new(1.0, -1.0, -1.0),
    ];

    let mut builder = MoleculeBuilder::new("methane")
        .atom("C", 0.0, 0.0, 0.0)
        .point_group(PointGroup::Td);
    for (i, c) in corners.iter().enumerate() {
        builder = builder.atom("H", s * c.x, s * c.y, s * c.z).bond(0, i + 1);
    }

    let c3 = [
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, -1.0, -1.0),
        Vector3::new(-1.0, 1.0, -1.0),
        Vector3::new(-1.0, -1.0, 1.0),
    ];
    let cartesian = [Vector3::x(), Vector3::y(), Vector3::z()];
    let sigma_d = [
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(1.0, -1.0, 0.0),
        Vector3::new(1.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, -1.0),
        Vector3::new(0.0, 1.0, 1.0),
        Vector3::new(0.0, 1.0, -1.0),
    ];

    builder
        .elements(c3.map(|axis| SymmetryElement::rotation_axis(axis, 3)))
        .elements(cartesian.map(|axis| SymmetryElement::rotation_axis(axis, 2)))
        .elements(cartesian.map(|axis| SymmetryElement::improper_rotation_axis(axis, 4)))
        .elements(sigma_d.map(SymmetryElement::mirror_plane))
        .build()
}

/// Planar benzene in the xy-plane, principal C6 axis along z.
pub fn benzene() -> Result<Molecule, MoleculeError> {
    let mut builder = MoleculeBuilder::new("benzene").point_group(PointGroup::D6h);
    for k in 0..6 {
        let theta = k as f64 * FRAC_PI_3;
        builder = builder.atom(
            "C",
            CC_RING_RADIUS * theta.cos(),
            CC_RING_RADIUS * theta.sin(),
            0.0,
        );
    }
    for k in 0..6 {
        let theta = k as f64 * FRAC_PI_3;
        builder = builder.atom(
            "H",
            CH_RING_RADIUS * theta.cos(),
            CH_RING_RADIUS * theta.sin(),
            0.0,
        );
    }
    for k in 0..6 {
        builder = builder
            .bond_with_order(k, (k + 1) % 6, BondOrder::Aromatic)
            .bond(k, k + 6);
    }

    builder
        .element(SymmetryElement::rotation_axis(Vector3::z(), 6))
        .element(SymmetryElement::rotation_axis(Vector3::x(), 2))
        .element(SymmetryElement::rotation_axis(Vector3::y(), 2))
        .element(SymmetryElement::mirror_plane(Vector3::z()))
        .element(SymmetryElement::mirror_plane(Vector3::x()))
        .element(SymmetryElement::mirror_plane(Vector3::y()))
        .element(SymmetryElement::inversion_center())
        .element(SymmetryElement::improper_rotation_axis(Vector3::z(), 6))
        .build()
}

/// Trigonal-planar BF3 in the xy-plane, principal C3 axis along z.
pub fn boron_trifluoride() -> Result<Molecule, MoleculeError> {
    let mut builder = MoleculeBuilder::new("boron-trifluoride")
        .atom("B", 0.0, 0.0, 0.0)
        .point_group(PointGroup::D3h)
        .element(SymmetryElement::rotation_axis(Vector3::z(), 3));

    for k in 0..3 {
        let theta = k as f64 * TAU / 3.0;
        let (sin, cos) = theta.sin_cos();
        builder = builder
            .atom("F", BF_BOND * cos, BF_BOND * sin, 0.0)
            .bond(0, k + 1)
            .element(SymmetryElement::rotation_axis(Vector3::new(cos, sin, 0.0), 2))
            .element(SymmetryElement::mirror_plane(Vector3::new(-sin, cos, 0.0)));
    }

    builder
        .element(SymmetryElement::mirror_plane(Vector3::z()))
        .element(SymmetryElement::improper_rotation_axis(Vector3::z(), 3))
        .build()
}
