use super::load_molecule;
use crate::cli::ShowArgs;
use crate::error::Result;
use molsym::core::models::molecule::{MirrorPlaneKind, Molecule};
use molsym::core::models::symmetry::SymmetryElement;

pub fn run(args: ShowArgs) -> Result<()> {
    let molecule = load_molecule(&args.source)?;
    print!("{}", render(&molecule));
    Ok(())
}

fn render(molecule: &Molecule) -> String {
    let mut out = String::new();
    let pg = molecule.point_group();
    out.push_str(&format!(
        "{} ({}), point group {} (order {})\n",
        molecule.name(),
        molecule.formula(),
        pg,
        pg.order()
    ));
    if let Some(axis) = molecule.principal_axis() {
        out.push_str(&format!(
            "Principal axis: ({:.3}, {:.3}, {:.3})\n",
            axis.x, axis.y, axis.z
        ));
    }

    out.push_str(&format!("\nAtoms ({}):\n", molecule.atom_count()));
    for (i, atom) in molecule.atoms().iter().enumerate() {
        let p = atom.position;
        out.push_str(&format!(
            "  {:>3}  {:<3} {:>9.4} {:>9.4} {:>9.4}\n",
            i, atom.element, p.x, p.y, p.z
        ));
    }

    out.push_str(&format!("\nBonds ({}):\n", molecule.bonds().len()));
    for bond in molecule.bonds() {
        out.push_str(&format!(
            "  {:>3} - {:<3} {}\n",
            bond.atom1, bond.atom2, bond.order
        ));
    }

    out.push_str(&format!(
        "\nSymmetry elements ({}):\n",
        molecule.symmetry_elements().len()
    ));
    for (i, element) in molecule.symmetry_elements().iter().enumerate() {
        let label = match element {
            SymmetryElement::MirrorPlane { normal } => match molecule.mirror_plane_kind(normal) {
                MirrorPlaneKind::Unclassified => element.symbol(),
                kind => kind.symbol().to_string(),
            },
            _ => element.symbol(),
        };
        out.push_str(&format!("  [{}] {:<4} {}\n", i, label, element));
    }
    out
}
