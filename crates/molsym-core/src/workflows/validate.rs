use super::error::SessionError;
use crate::core::models::molecule::Molecule;
use crate::core::models::point_group::PointGroup;
use crate::core::models::symmetry::SymmetryElement;
use crate::core::symmetry::{
    SymmetryOperation, apply, find_atom_mapping, is_invariant, max_deviation,
};
use crate::engine::config::ConfigError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

/// Outcome of checking one declared symmetry element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementCheck {
    pub index: usize,
    pub element: SymmetryElement,
    pub operation: SymmetryOperation,
    /// Positional invariance, ignoring element types.
    pub invariant: bool,
    /// Where each atom's image lands, if every image lands on a distinct atom
    /// of the same element.
    pub mapping: Option<Vec<usize>>,
    /// Largest distance from an image to its nearest original atom.
    pub max_deviation: Option<f64>,
}

impl ElementCheck {
    pub fn passed(&self) -> bool {
        self.invariant && self.mapping.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub molecule: String,
    pub point_group: PointGroup,
    pub tolerance: f64,
    pub checks: Vec<ElementCheck>,
}

impl ValidationReport {
    /// `true` iff every declared element maps the molecule onto itself.
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(ElementCheck::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ElementCheck> {
        self.checks.iter().filter(|c| !c.passed())
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }
}

/// Applies every declared element of `molecule` and checks that the result
/// coincides with the original configuration.
///
/// Declared elements are curated data, not derived from the geometry, so
/// this is how a wrong axis or plane is caught.
///
/// # Errors
///
/// Returns [`SessionError::Config`] for a negative or non-finite tolerance.
#[instrument(skip_all, name = "validation_workflow", fields(molecule = molecule.name()))]
pub fn run(
    molecule: &Molecule,
    tolerance: f64,
    reporter: &ProgressReporter,
) -> Result<ValidationReport, SessionError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ConfigError::InvalidValue {
            parameter: "tolerance",
            reason: format!("must be a finite, non-negative distance (got {})", tolerance),
        }
        .into());
    }

    reporter.report(Progress::PhaseStart {
        name: "Symmetry Validation",
    });
    info!(
        "Validating {} declared symmetry element(s) of '{}' ({}).",
        molecule.symmetry_elements().len(),
        molecule.name(),
        molecule.point_group()
    );

    let original = molecule.atom_positions();
    let elements = molecule.symmetry_elements();
    reporter.report(Progress::TaskStart {
        total_steps: elements.len() as u64,
    });

    let mut checks = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let operation = element.operation();
        let transformed = apply(&original, &operation)?;
        let check = ElementCheck {
            index,
            element: *element,
            operation,
            invariant: is_invariant(&original, &transformed, tolerance),
            mapping: find_atom_mapping(molecule.atoms(), &transformed, tolerance),
            max_deviation: max_deviation(&original, &transformed),
        };

        if !check.passed() {
            warn!(
                "Declared element {} ({}) does not map '{}' onto itself (max deviation {:.4} Å).",
                index,
                element,
                molecule.name(),
                check.max_deviation.unwrap_or(0.0)
            );
        }
        reporter.report(Progress::ElementChecked {
            symbol: element.symbol(),
            passed: check.passed(),
        });
        reporter.report(Progress::TaskIncrement);
        checks.push(check);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let report = ValidationReport {
        molecule: molecule.name().to_string(),
        point_group: molecule.point_group(),
        tolerance,
        checks,
    };
    info!(
        "Validation complete: {}/{} element(s) passed.",
        report.passed_count(),
        report.checks.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::library;
    use crate::core::models::builder::MoleculeBuilder;
    use nalgebra::Vector3;
    use std::sync::{Arc, Mutex};

    fn methane_with_axis_aligned_planes() -> Molecule {
        let methane = library::load("methane").unwrap();
        let mut builder = MoleculeBuilder::new("methane (axis-aligned planes)")
            .point_group(PointGroup::Td);
        for atom in methane.atoms() {
            builder = builder.atom_at(&atom.element, atom.position);
        }
        builder
            .elements([
                SymmetryElement::mirror_plane(Vector3::x()),
                SymmetryElement::mirror_plane(Vector3::y()),
                SymmetryElement::mirror_plane(Vector3::z()),
                SymmetryElement::rotation_axis(Vector3::new(1.0, 1.0, 1.0), 3),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn every_builtin_molecule_validates() {
        for mol in library::load_all().unwrap() {
            let report = run(&mol, 1e-6, &ProgressReporter::new()).unwrap();
            assert!(report.is_valid(), "{} failed validation", mol.name());
            assert_eq!(report.checks.len(), mol.symmetry_elements().len());
        }
    }

    #[test]
    fn axis_aligned_planes_are_not_methane_mirror_planes() {
        let mol = methane_with_axis_aligned_planes();
        let report = run(&mol, 1e-3, &ProgressReporter::new()).unwrap();

        assert!(!report.is_valid());
        let failed: Vec<usize> = report.failures().map(|c| c.index).collect();
        assert_eq!(failed, vec![0, 1, 2]);
        assert!(report.checks[3].passed());
        assert!(report.checks[0].max_deviation.unwrap() > 0.5);
    }

    #[test]
    fn ammonia_sigma_v_passes_and_wrong_normal_fails() {
        let ammonia = library::load("ammonia").unwrap();
        let mut builder = MoleculeBuilder::new("ammonia").point_group(PointGroup::C3v);
        for atom in ammonia.atoms() {
            builder = builder.atom_at(&atom.element, atom.position);
        }
        let mol = builder
            .element(SymmetryElement::mirror_plane(Vector3::x()))
            .element(SymmetryElement::mirror_plane(Vector3::z()))
            .build()
            .unwrap();

        let report = run(&mol, 1e-6, &ProgressReporter::new()).unwrap();
        assert!(report.checks[0].passed());
        assert_eq!(report.checks[0].mapping, Some(vec![0, 1, 3, 2]));
        assert!(!report.checks[1].passed());
        assert!(!report.checks[1].invariant);
    }

    #[test]
    fn position_match_with_wrong_element_fails_mapping() {
        let mol = MoleculeBuilder::new("hydrogen fluoride")
            .atom("H", 0.0, 0.0, 0.46)
            .atom("F", 0.0, 0.0, -0.46)
            .element(SymmetryElement::mirror_plane(Vector3::z()))
            .build()
            .unwrap();
        let report = run(&mol, 1e-6, &ProgressReporter::new()).unwrap();
        assert!(report.checks[0].invariant);
        assert!(report.checks[0].mapping.is_none());
        assert!(!report.is_valid());
    }

    #[test]
    fn progress_events_cover_every_element() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let reporter = ProgressReporter::with_callback(Box::new(move |e| {
            sink.lock().unwrap().push(e);
        }));

        let water = library::load("water").unwrap();
        run(&water, 1e-6, &reporter).unwrap();

        let events = events.lock().unwrap();
        assert_eq!(
            events.first(),
            Some(&Progress::PhaseStart {
                name: "Symmetry Validation"
            })
        );
        assert!(events.contains(&Progress::TaskStart { total_steps: 3 }));
        let checked = events
            .iter()
            .filter(|e| matches!(e, Progress::ElementChecked { passed: true, .. }))
            .count();
        assert_eq!(checked, 3);
        assert_eq!(events.last(), Some(&Progress::PhaseFinish));
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let water = library::load("water").unwrap();
        let result = run(&water, -1.0, &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(SessionError::Config(ConfigError::InvalidValue { .. }))
        ));
    }
}
