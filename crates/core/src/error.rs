use thiserror::Error;

/// Errors raised before a run touches any field values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    #[error("profile produced {actual} values for {expected} coordinates")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { name, reason }
    }
}
