pub mod animate;
pub mod apply;
pub mod list;
pub mod show;
pub mod validate;

use crate::cli::MoleculeSource;
use crate::error::{CliError, Result};
use molsym::core::io::molecule_toml::MoleculeToml;
use molsym::core::io::traits::MoleculeFile;
use molsym::core::library;
use molsym::core::models::molecule::Molecule;
use nalgebra::Vector3;
use std::path::Path;
use tracing::info;

/// Loads the molecule named on the command line, either from the built-in
/// library or from a TOML definition.
pub(crate) fn load_molecule(source: &MoleculeSource) -> Result<Molecule> {
    match (&source.molecule, &source.file) {
        (_, Some(path)) => load_molecule_file(path),
        (Some(name), None) => {
            info!("Loading built-in molecule '{}'.", name);
            Ok(library::load(name)?)
        }
        (None, None) => Err(CliError::Argument(
            "Either a molecule name or --file must be given.".to_string(),
        )),
    }
}

pub(crate) fn load_molecule_file(path: &Path) -> Result<Molecule> {
    info!("Loading molecule definition from {:?}", path);
    MoleculeToml::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// The axis used for rotations given without one: the molecule's principal
/// axis, or z if it has none.
pub(crate) fn default_axis(molecule: &Molecule) -> Vector3<f64> {
    molecule.principal_axis().unwrap_or_else(Vector3::z)
}
