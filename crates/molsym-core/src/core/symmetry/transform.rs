use super::error::SymmetryError;
use super::operation::{SymmetryOperation, finite_center, rotation_for, unit_for};
use crate::core::utils::geometry::{invert_through, reflect_across_plane};
use nalgebra::{Matrix4, Point3};

/// Applies a symmetry operation to every position.
///
/// The output has the same length and order as the input; atom `k` of the
/// result is the image of atom `k` of the input. The input is never modified.
///
/// # Arguments
///
/// * `positions` - The configuration to transform.
/// * `op` - The operation to apply.
///
/// # Errors
///
/// Returns [`SymmetryError::InvalidOperationParameter`] for a rotation order
/// below 2 or a zero-length / non-finite axis or normal. Nothing is computed
/// in that case, so no degenerate geometry ever escapes.
pub fn apply(
    positions: &[Point3<f64>],
    op: &SymmetryOperation,
) -> Result<Vec<Point3<f64>>, SymmetryError> {
    match op {
        SymmetryOperation::Identity => Ok(positions.to_vec()),
        SymmetryOperation::Rotation { axis, order } => {
            let rot = rotation_for(axis, *order)?;
            Ok(positions.iter().map(|p| rot * p).collect())
        }
        SymmetryOperation::Reflection { plane_normal } => {
            let n = unit_for(plane_normal, "plane_normal")?;
            Ok(positions
                .iter()
                .map(|p| reflect_across_plane(p, &n))
                .collect())
        }
        SymmetryOperation::Inversion { center } => {
            finite_center(center)?;
            Ok(positions.iter().map(|p| invert_through(p, center)).collect())
        }
        SymmetryOperation::ImproperRotation { axis, order } => {
            let rot = rotation_for(axis, *order)?;
            let n = unit_for(axis, "axis")?;
            Ok(positions
                .iter()
                .map(|p| reflect_across_plane(&(rot * p), &n))
                .collect())
        }
    }
}

/// Applies `op` to `positions` `times` times in sequence.
pub fn apply_repeated(
    positions: &[Point3<f64>],
    op: &SymmetryOperation,
    times: u32,
) -> Result<Vec<Point3<f64>>, SymmetryError> {
    op.validate()?;
    let mut current = positions.to_vec();
    for _ in 0..times {
        current = apply(&current, op)?;
    }
    Ok(current)
}

/// Homogeneous matrix of "apply `first`, then `second`".
pub fn compose(
    first: &SymmetryOperation,
    second: &SymmetryOperation,
) -> Result<Matrix4<f64>, SymmetryError> {
    Ok(second.affine()? * first.affine()?)
}

/// Applies an arbitrary homogeneous transform, e.g. one built with [`compose`].
pub fn apply_affine(positions: &[Point3<f64>], m: &Matrix4<f64>) -> Vec<Point3<f64>> {
    positions.iter().map(|p| m.transform_point(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TOL: f64 = 1e-9;

    fn sample_positions() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.76, 0.59, 0.0),
            Point3::new(-0.76, 0.59, 0.0),
            Point3::new(1.3, -2.1, 0.7),
            Point3::new(-0.4, 0.25, -1.9),
        ]
    }

    fn assert_close(a: &[Point3<f64>], b: &[Point3<f64>], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert!((p - q).norm() < tol, "{:?} vs {:?}", p, q);
        }
    }

    #[test]
    fn identity_returns_input_unchanged() {
        let positions = sample_positions();
        assert_eq!(apply(&positions, &SymmetryOperation::Identity).unwrap(), positions);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = apply(&[], &SymmetryOperation::rotation(Vector3::z(), 3)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_parameters_are_rejected_before_computing() {
        let positions = sample_positions();
        assert!(apply(&positions, &SymmetryOperation::rotation(Vector3::z(), 1)).is_err());
        assert!(apply(&positions, &SymmetryOperation::reflection(Vector3::zeros())).is_err());
        assert!(
            apply(
                &positions,
                &SymmetryOperation::improper_rotation(Vector3::zeros(), 4)
            )
            .is_err()
        );
    }

    #[test]
    fn reflection_is_an_involution() {
        let positions = sample_positions();
        for normal in [
            Vector3::x(),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.3, -2.0, 0.9),
        ] {
            let op = SymmetryOperation::reflection(normal);
            let twice = apply(&apply(&positions, &op).unwrap(), &op).unwrap();
            assert_close(&twice, &positions, TOL);
        }
    }

    #[test]
    fn reflection_through_diagonal_plane_swaps_coordinates() {
        let op = SymmetryOperation::reflection(Vector3::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2, 0.0));
        let out = apply(&[Point3::new(1.0, 2.0, 3.0)], &op).unwrap();
        assert_close(&out, &[Point3::new(2.0, 1.0, 3.0)], TOL);
    }

    #[test]
    fn inversion_is_an_involution() {
        let positions = sample_positions();
        for center in [Point3::origin(), Point3::new(0.5, -1.0, 2.0)] {
            let op = SymmetryOperation::Inversion { center };
            let twice = apply(&apply(&positions, &op).unwrap(), &op).unwrap();
            assert_close(&twice, &positions, TOL);
        }
    }

    #[test]
    fn inversion_through_origin_negates_positions() {
        let out = apply(&[Point3::new(1.0, -2.0, 3.0)], &SymmetryOperation::inversion()).unwrap();
        assert_eq!(out, vec![Point3::new(-1.0, 2.0, -3.0)]);
    }

    #[test]
    fn rotation_applied_order_times_returns_original() {
        let positions = sample_positions();
        for order in [2, 3, 4, 5, 6, 8] {
            let op = SymmetryOperation::rotation(Vector3::new(0.2, 1.0, -0.4), order);
            let cycled = apply_repeated(&positions, &op, order).unwrap();
            assert_close(&cycled, &positions, TOL);
        }
    }

    #[test]
    fn rotation_uses_right_hand_rule() {
        let op = SymmetryOperation::rotation(Vector3::z(), 4);
        let out = apply(&[Point3::new(1.0, 0.0, 0.0)], &op).unwrap();
        assert_close(&out, &[Point3::new(0.0, 1.0, 0.0)], TOL);
    }

    #[test]
    fn improper_rotation_closes_after_group_order() {
        let positions = sample_positions();
        for order in [3, 4, 5, 6] {
            let op = SymmetryOperation::improper_rotation(Vector3::new(0.0, 0.0, 2.0), order);
            let cycled = apply_repeated(&positions, &op, op.order()).unwrap();
            assert_close(&cycled, &positions, TOL);
        }
    }

    #[test]
    fn odd_improper_rotation_does_not_close_after_n_steps() {
        let positions = vec![Point3::new(1.0, 0.0, 1.0)];
        let op = SymmetryOperation::improper_rotation(Vector3::z(), 3);
        let after_three = apply_repeated(&positions, &op, 3).unwrap();
        // S3^3 is the horizontal reflection.
        assert_close(&after_three, &[Point3::new(1.0, 0.0, -1.0)], TOL);
    }

    #[test]
    fn s4_matches_rotation_then_reflection() {
        let positions = sample_positions();
        let axis = Vector3::new(1.0, 1.0, 1.0);
        let s4 = apply(&positions, &SymmetryOperation::improper_rotation(axis, 4)).unwrap();
        let rotated = apply(&positions, &SymmetryOperation::rotation(axis, 4)).unwrap();
        let manual = apply(&rotated, &SymmetryOperation::reflection(axis)).unwrap();
        assert_close(&s4, &manual, TOL);
    }

    #[test]
    fn s2_is_equivalent_to_inversion() {
        let positions = sample_positions();
        let s2 = apply(&positions, &SymmetryOperation::improper_rotation(Vector3::y(), 2)).unwrap();
        let inv = apply(&positions, &SymmetryOperation::inversion()).unwrap();
        assert_close(&s2, &inv, TOL);
    }

    #[test]
    fn affine_matrix_agrees_with_apply() {
        let positions = sample_positions();
        let ops = [
            SymmetryOperation::Identity,
            SymmetryOperation::rotation(Vector3::new(1.0, -1.0, 0.5), 3),
            SymmetryOperation::reflection(Vector3::new(0.0, 1.0, 1.0)),
            SymmetryOperation::Inversion {
                center: Point3::new(0.1, 0.2, 0.3),
            },
            SymmetryOperation::improper_rotation(Vector3::new(0.0, 1.0, 0.0), 6),
        ];
        for op in ops {
            let via_matrix = apply_affine(&positions, &op.affine().unwrap());
            assert_close(&via_matrix, &apply(&positions, &op).unwrap(), TOL);
        }
    }

    #[test]
    fn composing_two_perpendicular_c2_gives_third_c2() {
        let first = SymmetryOperation::rotation(Vector3::x(), 2);
        let second = SymmetryOperation::rotation(Vector3::y(), 2);
        let composed = compose(&first, &second).unwrap();
        let expected = SymmetryOperation::rotation(Vector3::z(), 2).affine().unwrap();
        assert!((composed - expected).norm() < TOL);
    }

    #[test]
    fn apply_repeated_zero_times_is_identity() {
        let positions = sample_positions();
        let op = SymmetryOperation::rotation(Vector3::z(), 3);
        assert_eq!(apply_repeated(&positions, &op, 0).unwrap(), positions);
        assert!(apply_repeated(&positions, &SymmetryOperation::rotation(Vector3::z(), 0), 0).is_err());
    }
}
