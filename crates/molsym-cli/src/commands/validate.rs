use super::load_molecule_file;
use crate::cli::ValidateArgs;
use crate::config::builder::{ConfigOverrides, build_config};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use molsym::core::library;
use molsym::core::models::molecule::Molecule;
use molsym::engine::progress::ProgressReporter;
use molsym::workflows::validate::{self, ValidationReport};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: ValidateArgs, config_path: Option<&Path>, set_values: &[String]) -> Result<()> {
    let overrides = ConfigOverrides {
        tolerance: args.tolerance,
        ..Default::default()
    };
    let app_config = build_config(config_path, set_values, &overrides)?;
    let tolerance = app_config.session.tolerance;

    let molecules = collect_molecules(&args)?;
    info!(
        "Validating {} molecule(s) at tolerance {} Å.",
        molecules.len(),
        tolerance
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let mut failed = 0;
    for molecule in &molecules {
        let report = validate::run(molecule, tolerance, &reporter)?;
        print!("{}", render(&report));
        if !report.is_valid() {
            warn!(
                "'{}' failed on: {}",
                report.molecule,
                progress_handler.failed_elements().join(", ")
            );
            failed += 1;
        }
    }

    if failed > 0 {
        warn!("{} of {} molecule(s) failed validation.", failed, molecules.len());
        return Err(CliError::ValidationFailed {
            failed,
            total: molecules.len(),
        });
    }
    Ok(())
}

fn collect_molecules(args: &ValidateArgs) -> Result<Vec<Molecule>> {
    let mut molecules = if args.all {
        library::load_all()?
    } else {
        args.molecules
            .iter()
            .map(|name| library::load(name))
            .collect::<std::result::Result<Vec<_>, _>>()?
    };
    for path in &args.files {
        molecules.push(load_molecule_file(path)?);
    }
    if molecules.is_empty() {
        return Err(CliError::Argument(
            "Nothing to validate. Name molecules, pass --all, or give --file.".to_string(),
        ));
    }
    Ok(molecules)
}

fn render(report: &ValidationReport) -> String {
    let mark = if report.is_valid() { "✓" } else { "✗" };
    let mut out = format!(
        "{} {} ({}): {}/{} declared element(s) verified\n",
        mark,
        report.molecule,
        report.point_group,
        report.passed_count(),
        report.checks.len()
    );
    for check in report.failures() {
        let deviation = check
            .max_deviation
            .map(|d| format!("{:.4} Å", d))
            .unwrap_or_else(|| "n/a".to_string());
        let reason = if check.invariant {
            "atoms land on sites of another element"
        } else {
            "configuration changes"
        };
        out.push_str(&format!(
            "    [{}] {}: {} (max deviation {})\n",
            check.index, check.element, reason, deviation
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use molsym::core::models::builder::MoleculeBuilder;
    use molsym::core::models::symmetry::SymmetryElement;
    use nalgebra::Vector3;

    fn args(molecules: &[&str], all: bool) -> ValidateArgs {
        ValidateArgs {
            molecules: molecules.iter().map(|s| s.to_string()).collect(),
            all,
            files: Vec::new(),
            tolerance: None,
        }
    }

    #[test]
    fn all_flag_collects_every_builtin_molecule() {
        let molecules = collect_molecules(&args(&[], true)).unwrap();
        assert_eq!(molecules.len(), library::names().len());
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert!(matches!(
            collect_molecules(&args(&[], false)),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn renders_passing_report_on_one_line() {
        let water = library::load("water").unwrap();
        let report = validate::run(&water, 1e-3, &ProgressReporter::new()).unwrap();
        assert_eq!(
            render(&report),
            "✓ water (C2v): 3/3 declared element(s) verified\n"
        );
    }

    #[test]
    fn renders_each_failure() {
        let mol = MoleculeBuilder::new("bent")
            .atom("O", 0.0, 0.0, 0.0)
            .atom("H", 0.76, 0.59, 0.0)
            .atom("H", -0.76, 0.59, 0.0)
            .element(SymmetryElement::rotation_axis(Vector3::x(), 2))
            .build()
            .unwrap();
        let report = validate::run(&mol, 1e-3, &ProgressReporter::new()).unwrap();
        let text = render(&report);
        assert!(text.starts_with("✗ bent"));
        assert!(text.contains("[0] C2 axis along (1.000, 0.000, 0.000): configuration changes"));
    }
}
