//! Error types for value conversions.

use thiserror::Error;

/// Errors raised when a [`Value`](super::Value) cannot be viewed as the
/// requested Rust type.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    /// The value holds a different variant than the one requested
    #[error("Value type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ValueError {
    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }
}

impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
