use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SymmetryError {
    #[error("Invalid operation parameter '{parameter}': {reason}")]
    InvalidOperationParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl SymmetryError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOperationParameter {
            parameter,
            reason: reason.into(),
        }
    }
}
