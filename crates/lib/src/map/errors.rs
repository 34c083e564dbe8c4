//! Error types for [`ArrayMap`](super::ArrayMap) operations.
//!
//! Every error is raised before the receiver is touched, so a failed
//! operation leaves the map exactly as it was.

use thiserror::Error;

/// Structured errors for transform operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ArrayMapError {
    /// A callback could not produce a usable result
    #[error("Invalid callback for '{operation}': {reason}")]
    InvalidCallback { operation: String, reason: String },

    /// An argument had the wrong type or an out-of-range value
    #[error("Invalid argument for '{operation}': {reason}")]
    InvalidArgument { operation: String, reason: String },
}

impl ArrayMapError {
    /// Check if this error was raised by a callback
    pub fn is_invalid_callback(&self) -> bool {
        matches!(self, ArrayMapError::InvalidCallback { .. })
    }

    /// Check if this error was raised by argument validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ArrayMapError::InvalidArgument { .. })
    }

    /// Get the name of the operation that failed
    pub fn operation(&self) -> &str {
        match self {
            ArrayMapError::InvalidCallback { operation, .. }
            | ArrayMapError::InvalidArgument { operation, .. } => operation,
        }
    }
}

// Conversion from ArrayMapError to the main Error type
impl From<ArrayMapError> for crate::Error {
    fn from(err: ArrayMapError) -> Self {
        crate::Error::ArrayMap(err)
    }
}
