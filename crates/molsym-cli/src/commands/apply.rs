use super::{default_axis, load_molecule};
use crate::cli::ApplyArgs;
use crate::config::builder::{ConfigOverrides, build_config};
use crate::error::{CliError, Result};
use crate::utils::parser;
use molsym::core::models::molecule::Molecule;
use molsym::core::symmetry::find_atom_mapping;
use molsym::workflows::session::{OperationOutcome, SymmetrySession};
use std::path::Path;
use tracing::info;

pub fn run(args: ApplyArgs, config_path: Option<&Path>, set_values: &[String]) -> Result<()> {
    let overrides = ConfigOverrides {
        tolerance: args.tolerance,
        ..Default::default()
    };
    let app_config = build_config(config_path, set_values, &overrides)?;
    let molecule = load_molecule(&args.source)?;
    let tolerance = app_config.session.tolerance;

    let mut session = SymmetrySession::new(molecule, app_config.session);
    let outcome = match (&args.op, args.element) {
        (_, Some(index)) => {
            info!("Applying declared element {}.", index);
            session.perform_element(index)?
        }
        (Some(op), None) => {
            let op = parser::parse_operation(op, default_axis(session.molecule()))
                .map_err(|e| CliError::Argument(e.to_string()))?;
            session.perform(&op)?
        }
        (None, None) => {
            return Err(CliError::Argument(
                "Either --op or --element must be given.".to_string(),
            ));
        }
    };

    print!("{}", render(session.molecule(), &outcome, tolerance));
    Ok(())
}

fn render(molecule: &Molecule, outcome: &OperationOutcome, tolerance: f64) -> String {
    let mut out = format!("{}\n\n", outcome.description);
    out.push_str(&format!(
        "  {:>3}  {:<3} {:>29}    {:>29}\n",
        "#", "El", "original (x, y, z)", "transformed (x, y, z)"
    ));
    for (i, (atom, image)) in molecule.atoms().iter().zip(&outcome.transformed).enumerate() {
        let p = atom.position;
        out.push_str(&format!(
            "  {:>3}  {:<3} {:>9.4} {:>9.4} {:>9.4} -> {:>9.4} {:>9.4} {:>9.4}\n",
            i, atom.element, p.x, p.y, p.z, image.x, image.y, image.z
        ));
    }

    out.push('\n');
    if outcome.invariant {
        out.push_str(&format!(
            "{} is a symmetry operation of {} (tolerance {} Å).\n",
            outcome.operation.symbol(),
            molecule.name(),
            tolerance
        ));
        if let Some(mapping) = find_atom_mapping(molecule.atoms(), &outcome.transformed, tolerance)
        {
            let pairs: Vec<String> = mapping
                .iter()
                .enumerate()
                .filter(|(from, to)| from != *to)
                .map(|(from, to)| format!("{}->{}", from, to))
                .collect();
            if pairs.is_empty() {
                out.push_str("Every atom stays in place.\n");
            } else {
                out.push_str(&format!("Atoms exchanged: {}\n", pairs.join(", ")));
            }
        }
    } else {
        out.push_str(&format!(
            "{} is NOT a symmetry operation of {} (tolerance {} Å).\n",
            outcome.operation.symbol(),
            molecule.name(),
            tolerance
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use molsym::core::library;
    use molsym::core::symmetry::SymmetryOperation;
    use molsym::engine::config::SessionConfig;
    use nalgebra::Vector3;

    #[test]
    fn reports_exchanged_atoms_for_water_c2() {
        let mut session =
            SymmetrySession::new(library::load("water").unwrap(), SessionConfig::default());
        let outcome = session.perform_element(0).unwrap();
        let text = render(session.molecule(), &outcome, 1e-3);

        assert!(text.starts_with("C2 rotation: 180° about the principal axis"));
        assert!(text.contains("C2 is a symmetry operation of water"));
        assert!(text.contains("Atoms exchanged: 1->2, 2->1"));
    }

    #[test]
    fn reports_non_symmetry_operation() {
        let mut session =
            SymmetrySession::new(library::load("water").unwrap(), SessionConfig::default());
        let outcome = session
            .perform(&SymmetryOperation::rotation(Vector3::z(), 4))
            .unwrap();
        let text = render(session.molecule(), &outcome, 1e-3);
        assert!(text.contains("C4 is NOT a symmetry operation of water"));
        assert!(!text.contains("Atoms exchanged"));
    }

    #[test]
    fn identity_keeps_every_atom_in_place() {
        let mut session =
            SymmetrySession::new(library::load("methane").unwrap(), SessionConfig::default());
        let outcome = session.perform(&SymmetryOperation::Identity).unwrap();
        let text = render(session.molecule(), &outcome, 1e-3);
        assert!(text.contains("Every atom stays in place."));
    }
}
