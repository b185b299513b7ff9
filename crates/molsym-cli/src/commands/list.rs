use crate::error::Result;
use molsym::core::library;
use tracing::info;

pub fn run() -> Result<()> {
    let molecules = library::load_all()?;
    info!("Listing {} built-in molecule(s).", molecules.len());

    println!(
        "{:<20} {:<10} {:<12} {:>6} {:>9}",
        "NAME", "FORMULA", "POINT GROUP", "ATOMS", "ELEMENTS"
    );
    for molecule in &molecules {
        println!(
            "{:<20} {:<10} {:<12} {:>6} {:>9}",
            molecule.name(),
            molecule.formula(),
            molecule.point_group().to_string(),
            molecule.atom_count(),
            molecule.symmetry_elements().len()
        );
    }
    Ok(())
}
