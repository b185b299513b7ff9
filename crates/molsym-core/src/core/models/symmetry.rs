use crate::core::symmetry::error::SymmetryError;
use crate::core::symmetry::operation::SymmetryOperation;
use crate::core::utils::geometry::try_unit;
use nalgebra::{Point3, Vector3};
use std::fmt;

/// A symmetry element declared for a molecule.
///
/// Elements are descriptive metadata: they record which rotation axes, mirror
/// planes, inversion centers and improper axes the molecule is claimed to
/// have. Each element generates one [`SymmetryOperation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymmetryElement {
    /// Proper rotation axis `Cn`.
    RotationAxis { direction: Vector3<f64>, order: u32 },
    /// Mirror plane through the origin.
    MirrorPlane { normal: Vector3<f64> },
    /// Inversion center, usually the origin.
    InversionCenter { point: Point3<f64> },
    /// Improper rotation axis `Sn`.
    ImproperRotationAxis { direction: Vector3<f64>, order: u32 },
}

impl SymmetryElement {
    pub fn rotation_axis(direction: Vector3<f64>, order: u32) -> Self {
        Self::RotationAxis { direction, order }
    }

    pub fn mirror_plane(normal: Vector3<f64>) -> Self {
        Self::MirrorPlane { normal }
    }

    pub fn inversion_center() -> Self {
        Self::InversionCenter {
            point: Point3::origin(),
        }
    }

    pub fn improper_rotation_axis(direction: Vector3<f64>, order: u32) -> Self {
        Self::ImproperRotationAxis { direction, order }
    }

    /// The operation this element generates: `Cn` for a rotation axis, `σ`
    /// for a plane, `i` for a center and `Sn` for an improper axis.
    pub fn operation(&self) -> SymmetryOperation {
        match *self {
            Self::RotationAxis { direction, order } => SymmetryOperation::Rotation {
                axis: direction,
                order,
            },
            Self::MirrorPlane { normal } => SymmetryOperation::Reflection {
                plane_normal: normal,
            },
            Self::InversionCenter { point } => SymmetryOperation::Inversion { center: point },
            Self::ImproperRotationAxis { direction, order } => SymmetryOperation::ImproperRotation {
                axis: direction,
                order,
            },
        }
    }

    pub fn validate(&self) -> Result<(), SymmetryError> {
        self.operation().validate()
    }

    /// Returns a copy with unit-length direction / normal. Degenerate vectors
    /// are left untouched; call [`SymmetryElement::validate`] first.
    pub fn normalized(&self) -> Self {
        let unit = |v: Vector3<f64>| try_unit(&v).map(|u| u.into_inner()).unwrap_or(v);
        match *self {
            Self::RotationAxis { direction, order } => Self::RotationAxis {
                direction: unit(direction),
                order,
            },
            Self::MirrorPlane { normal } => Self::MirrorPlane {
                normal: unit(normal),
            },
            Self::InversionCenter { point } => Self::InversionCenter { point },
            Self::ImproperRotationAxis { direction, order } => Self::ImproperRotationAxis {
                direction: unit(direction),
                order,
            },
        }
    }

    /// Axis direction of a proper or improper rotation axis.
    pub fn axis(&self) -> Option<Vector3<f64>> {
        match self {
            Self::RotationAxis { direction, .. } | Self::ImproperRotationAxis { direction, .. } => {
                Some(*direction)
            }
            _ => None,
        }
    }

    pub fn symbol(&self) -> String {
        self.operation().symbol()
    }
}

impl fmt::Display for SymmetryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = |v: &Vector3<f64>| format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z);
        match self {
            Self::RotationAxis { direction, order } => {
                write!(f, "C{} axis along {}", order, v(direction))
            }
            Self::MirrorPlane { normal } => write!(f, "mirror plane with normal {}", v(normal)),
            Self::InversionCenter { point } => {
                write!(f, "inversion center at {}", v(&point.coords))
            }
            Self::ImproperRotationAxis { direction, order } => {
                write!(f, "S{} axis along {}", order, v(direction))
            }
        }
    }
}
