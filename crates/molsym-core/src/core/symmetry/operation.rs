use super::error::SymmetryError;
use crate::core::utils::geometry::{rotation_from_axis_angle, try_unit};
use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Unit, Vector3};
use std::f64::consts::TAU;
use std::fmt;

/// A point-group symmetry operation requested by the user.
///
/// Operations are transient values that carry nothing beyond their geometric
/// parameters. Axes and plane normals need not be normalized, but must be
/// finite and non-zero; rotation orders must be at least 2. All rotations and
/// planes pass through the origin, while the inversion center may be placed
/// anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SymmetryOperation {
    /// The identity operation `E`.
    #[default]
    Identity,
    /// Proper rotation `Cn` by `2π/order` about `axis`.
    Rotation { axis: Vector3<f64>, order: u32 },
    /// Reflection `σ` through the plane with the given normal.
    Reflection { plane_normal: Vector3<f64> },
    /// Point inversion `i` through `center`.
    Inversion { center: Point3<f64> },
    /// Improper rotation `Sn`: rotation by `2π/order` about `axis`, then
    /// reflection through the plane perpendicular to `axis`.
    ImproperRotation { axis: Vector3<f64>, order: u32 },
}

impl SymmetryOperation {
    pub fn rotation(axis: Vector3<f64>, order: u32) -> Self {
        Self::Rotation { axis, order }
    }

    pub fn reflection(plane_normal: Vector3<f64>) -> Self {
        Self::Reflection { plane_normal }
    }

    /// Inversion through the origin.
    pub fn inversion() -> Self {
        Self::Inversion {
            center: Point3::origin(),
        }
    }

    pub fn improper_rotation(axis: Vector3<f64>, order: u32) -> Self {
        Self::ImproperRotation { axis, order }
    }

    /// Checks the operation's parameters without applying it.
    ///
    /// # Errors
    ///
    /// Returns [`SymmetryError::InvalidOperationParameter`] if a rotation order
    /// is below 2, if an axis or plane normal is zero-length or non-finite, or
    /// if the inversion center is non-finite.
    pub fn validate(&self) -> Result<(), SymmetryError> {
        match self {
            Self::Identity => Ok(()),
            Self::Rotation { axis, order } | Self::ImproperRotation { axis, order } => {
                rotation_for(axis, *order).map(|_| ())
            }
            Self::Reflection { plane_normal } => unit_for(plane_normal, "plane_normal").map(|_| ()),
            Self::Inversion { center } => finite_center(center),
        }
    }

    /// Number of successive applications that bring every configuration back
    /// to itself.
    ///
    /// For `Sn` this is `n` when `n` is even and `2n` when `n` is odd, since
    /// an odd number of reflections leaves a net reflection behind.
    pub fn order(&self) -> u32 {
        match self {
            Self::Identity => 1,
            Self::Rotation { order, .. } => *order,
            Self::Reflection { .. } | Self::Inversion { .. } => 2,
            Self::ImproperRotation { order, .. } => {
                if order % 2 == 0 {
                    *order
                } else {
                    order.saturating_mul(2)
                }
            }
        }
    }

    /// `true` for operations that preserve handedness (determinant +1).
    pub fn is_proper(&self) -> bool {
        matches!(self, Self::Identity | Self::Rotation { .. })
    }

    /// Rotation angle in degrees for `Cn` and `Sn`.
    pub fn angle_degrees(&self) -> Option<f64> {
        match self {
            Self::Rotation { order, .. } | Self::ImproperRotation { order, .. } if *order > 0 => {
                Some(360.0 / *order as f64)
            }
            _ => None,
        }
    }

    /// The rotation axis or plane normal the operation is defined by, if any.
    pub fn direction(&self) -> Option<Vector3<f64>> {
        match self {
            Self::Rotation { axis, .. } | Self::ImproperRotation { axis, .. } => Some(*axis),
            Self::Reflection { plane_normal } => Some(*plane_normal),
            Self::Identity | Self::Inversion { .. } => None,
        }
    }

    /// Schoenflies symbol of the operation, e.g. `C3`, `σ`, `S4`.
    pub fn symbol(&self) -> String {
        match self {
            Self::Identity => "E".to_string(),
            Self::Rotation { order, .. } => format!("C{}", order),
            Self::Reflection { .. } => "σ".to_string(),
            Self::Inversion { .. } => "i".to_string(),
            Self::ImproperRotation { order, .. } => format!("S{}", order),
        }
    }

    /// Human-readable description with caller-supplied wording for the axis
    /// and for the mirror-plane symbol.
    ///
    /// `axis_phrase` replaces the formatted axis vector (e.g. "the principal
    /// axis") and `plane_symbol` replaces the generic `σ` (e.g. `σv`).
    pub fn describe_with(&self, axis_phrase: Option<&str>, plane_symbol: Option<&str>) -> String {
        let axis_text = |axis: &Vector3<f64>| {
            axis_phrase
                .map(str::to_string)
                .unwrap_or_else(|| format_vector(axis))
        };
        match self {
            Self::Identity => "E identity: the molecule is left unchanged".to_string(),
            Self::Rotation { axis, .. } => format!(
                "{} rotation: {} about {}",
                self.symbol(),
                format_angle(self.angle_degrees().unwrap_or(0.0)),
                axis_text(axis)
            ),
            Self::Reflection { plane_normal } => format!(
                "{} reflection: mirror plane with normal {}",
                plane_symbol.unwrap_or("σ"),
                format_vector(plane_normal)
            ),
            Self::Inversion { center } => format!(
                "i inversion: every atom is sent through {} to the opposite side",
                if center.coords.norm() == 0.0 {
                    "the origin".to_string()
                } else {
                    format_vector(&center.coords)
                }
            ),
            Self::ImproperRotation { axis, .. } => format!(
                "{} improper rotation: {} about {}, then reflection through the perpendicular plane",
                self.symbol(),
                format_angle(self.angle_degrees().unwrap_or(0.0)),
                axis_text(axis)
            ),
        }
    }

    /// Homogeneous 4x4 matrix of the operation.
    ///
    /// # Errors
    ///
    /// Fails with the same conditions as [`SymmetryOperation::validate`].
    pub fn affine(&self) -> Result<Matrix4<f64>, SymmetryError> {
        match self {
            Self::Identity => Ok(Matrix4::identity()),
            Self::Rotation { axis, order } => Ok(rotation_for(axis, *order)?.to_homogeneous()),
            Self::Reflection { plane_normal } => {
                let n = unit_for(plane_normal, "plane_normal")?;
                Ok(householder(&n).to_homogeneous())
            }
            Self::Inversion { center } => {
                finite_center(center)?;
                let mut m = (-Matrix3::<f64>::identity()).to_homogeneous();
                m.fixed_view_mut::<3, 1>(0, 3)
                    .copy_from(&(center.coords * 2.0));
                Ok(m)
            }
            Self::ImproperRotation { axis, order } => {
                let rot = rotation_for(axis, *order)?;
                let n = unit_for(axis, "axis")?;
                Ok((householder(&n) * rot.matrix()).to_homogeneous())
            }
        }
    }
}

impl fmt::Display for SymmetryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe_with(None, None))
    }
}

pub(crate) fn unit_for(
    v: &Vector3<f64>,
    parameter: &'static str,
) -> Result<Unit<Vector3<f64>>, SymmetryError> {
    try_unit(v).ok_or_else(|| {
        SymmetryError::invalid(
            parameter,
            format!("{} must be a finite, non-zero vector", format_vector(v)),
        )
    })
}

pub(crate) fn rotation_for(axis: &Vector3<f64>, order: u32) -> Result<Rotation3<f64>, SymmetryError> {
    if order < 2 {
        return Err(SymmetryError::invalid(
            "order",
            format!("rotation order must be at least 2, got {}", order),
        ));
    }
    let axis = unit_for(axis, "axis")?;
    Ok(rotation_from_axis_angle(&axis, TAU / order as f64))
}

pub(crate) fn finite_center(center: &Point3<f64>) -> Result<(), SymmetryError> {
    if center.coords.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(SymmetryError::invalid(
            "center",
            "inversion center must have finite coordinates",
        ))
    }
}

fn householder(n: &Unit<Vector3<f64>>) -> Matrix3<f64> {
    Matrix3::identity() - (n.as_ref() * n.transpose()) * 2.0
}

fn format_vector(v: &Vector3<f64>) -> String {
    format!("({}, {}, {})", trim_number(v.x), trim_number(v.y), trim_number(v.z))
}

fn format_angle(degrees: f64) -> String {
    format!("{}°", trim_number(degrees))
}

fn trim_number(x: f64) -> String {
    let rounded = (x * 1000.0).round() / 1000.0;
    // Avoid printing "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
