//! Built-in molecules with curated point groups and symmetry elements.
//!
//! Molecules are looked up by a canonical key (`water`, `ammonia`, ...) or by
//! a case-insensitive alias such as a formula (`h2o`, `nh3`).

mod catalog;

use crate::core::models::molecule::{Molecule, MoleculeError};
use phf::{Map, phf_map};
use thiserror::Error;

pub type MoleculeFactory = fn() -> Result<Molecule, MoleculeError>;

static CATALOG: Map<&'static str, MoleculeFactory> = phf_map! {
    "water" => catalog::water as MoleculeFactory,
    "ammonia" => catalog::ammonia as MoleculeFactory,
    "methane" => catalog::methane as MoleculeFactory,
    "benzene" => catalog::benzene as MoleculeFactory,
    "boron-trifluoride" => catalog::boron_trifluoride as MoleculeFactory,
};

static ALIASES: Map<&'static str, &'static str> = phf_map! {
    "h2o" => "water",
    "nh3" => "ammonia",
    "ch4" => "methane",
    "c6h6" => "benzene",
    "bf3" => "boron-trifluoride",
    "boron_trifluoride" => "boron-trifluoride",
};

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Unknown molecule '{0}'. Available: {available}", available = names().join(", "))]
    UnknownMolecule(String),

    #[error("Built-in molecule '{name}' is malformed: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: MoleculeError,
    },
}

/// Canonical keys of all built-in molecules, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CATALOG.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Resolves a key or alias to its canonical key.
pub fn resolve(name: &str) -> Option<&'static str> {
    let lowered = name.trim().to_ascii_lowercase();
    if let Some((key, _)) = CATALOG.get_entry(lowered.as_str()) {
        return Some(*key);
    }
    ALIASES.get(lowered.as_str()).copied()
}

pub fn load(name: &str) -> Result<Molecule, LibraryError> {
    let key = resolve(name).ok_or_else(|| LibraryError::UnknownMolecule(name.to_string()))?;
    let factory = CATALOG
        .get(key)
        .ok_or_else(|| LibraryError::UnknownMolecule(name.to_string()))?;
    factory().map_err(|source| LibraryError::Invalid { name: key, source })
}

pub fn load_all() -> Result<Vec<Molecule>, LibraryError> {
    names().into_iter().map(load).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::point_group::PointGroup;
    use crate::core::symmetry::{apply, find_atom_mapping, is_invariant};

    #[test]
    fn names_are_sorted_and_complete() {
        assert_eq!(
            names(),
            vec!["ammonia", "benzene", "boron-trifluoride", "methane", "water"]
        );
    }

    #[test]
    fn resolve_accepts_keys_and_aliases_case_insensitively() {
        assert_eq!(resolve("Water"), Some("water"));
        assert_eq!(resolve("H2O"), Some("water"));
        assert_eq!(resolve(" nh3 "), Some("ammonia"));
        assert_eq!(resolve("BF3"), Some("boron-trifluoride"));
        assert_eq!(resolve("ethanol"), None);
    }

    #[test]
    fn load_unknown_molecule_fails() {
        let err = load("unobtainium").unwrap_err();
        assert!(matches!(err, LibraryError::UnknownMolecule(ref n) if n == "unobtainium"));
        assert!(err.to_string().contains("water"));
    }

    #[test]
    fn every_builtin_molecule_loads() {
        let all = load_all().unwrap();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn point_groups_and_element_counts_match_declarations() {
        let expect = [
            ("water", PointGroup::C2v, 3, 3),
            ("ammonia", PointGroup::C3v, 4, 4),
            ("methane", PointGroup::Td, 5, 16),
            ("benzene", PointGroup::D6h, 12, 8),
            ("boron-trifluoride", PointGroup::D3h, 4, 9),
        ];
        for (name, pg, atoms, elements) in expect {
            let mol = load(name).unwrap();
            assert_eq!(mol.point_group(), pg, "{}", name);
            assert_eq!(mol.atom_count(), atoms, "{}", name);
            assert_eq!(mol.symmetry_elements().len(), elements, "{}", name);
        }
    }

    #[test]
    fn every_declared_element_maps_each_builtin_onto_itself() {
        for mol in load_all().unwrap() {
            let original = mol.atom_positions();
            for element in mol.symmetry_elements() {
                let transformed = apply(&original, &element.operation()).unwrap();
                assert!(
                    is_invariant(&original, &transformed, 1e-6),
                    "{}: {} is not a symmetry element",
                    mol.name(),
                    element
                );
                assert!(
                    find_atom_mapping(mol.atoms(), &transformed, 1e-6).is_some(),
                    "{}: {} mixes elements",
                    mol.name(),
                    element
                );
            }
        }
    }
}
