use molsym::core::symmetry::SymmetryOperation;
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Operation cannot be empty.")]
    Empty,

    #[error(
        "Unknown operation '{0}'. Expected E, i, Cn, Sn or sigma (e.g., 'C3', 'S4@0,0,1', 'sigma@1,0,0')."
    )]
    UnknownOperation(String),

    #[error("Invalid order '{order}' in operation '{op}'. Expected a positive integer.")]
    InvalidOrder { op: String, order: String },

    #[error("Invalid vector '{0}'. Expected three comma-separated numbers (e.g., '0,0,1').")]
    InvalidVector(String),

    #[error("Operation '{0}' requires a plane normal (e.g., 'sigma@0,0,1').")]
    MissingPlaneNormal(String),

    #[error("The identity operation takes no parameters: '{0}'.")]
    UnexpectedParameter(String),
}

/// Parses the command-line operation syntax.
///
/// Rotation axes that are not given default to `default_axis`. Parameter
/// checks such as a minimum rotation order are left to the library.
pub fn parse_operation(
    input: &str,
    default_axis: Vector3<f64>,
) -> Result<SymmetryOperation, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let (head, vector) = match input.split_once('@') {
        Some((head, tail)) => (head.trim(), Some(parse_vector(tail)?)),
        None => (input, None),
    };

    match head {
        "E" | "e" => match vector {
            None => Ok(SymmetryOperation::Identity),
            Some(_) => Err(ParseError::UnexpectedParameter(input.to_string())),
        },
        "i" | "I" => Ok(match vector {
            None => SymmetryOperation::inversion(),
            Some(v) => SymmetryOperation::Inversion {
                center: Point3::from(v),
            },
        }),
        _ if head.eq_ignore_ascii_case("sigma") || head == "σ" => vector
            .map(SymmetryOperation::reflection)
            .ok_or_else(|| ParseError::MissingPlaneNormal(input.to_string())),
        _ => {
            let mut chars = head.chars();
            let kind = chars.next().map(|c| c.to_ascii_uppercase());
            let order_str = chars.as_str();
            let axis = vector.unwrap_or(default_axis);
            match kind {
                Some('C') => Ok(SymmetryOperation::rotation(axis, parse_order(input, order_str)?)),
                Some('S') => Ok(SymmetryOperation::improper_rotation(
                    axis,
                    parse_order(input, order_str)?,
                )),
                _ => Err(ParseError::UnknownOperation(input.to_string())),
            }
        }
    }
}

fn parse_order(op: &str, order: &str) -> Result<u32, ParseError> {
    order.parse::<u32>().map_err(|_| ParseError::InvalidOrder {
        op: op.to_string(),
        order: order.to_string(),
    })
}

pub fn parse_vector(s: &str) -> Result<Vector3<f64>, ParseError> {
    let components = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ParseError::InvalidVector(s.to_string()))?;
    match components.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(ParseError::InvalidVector(s.to_string())),
    }
}
