//! Error types for array coercion and shape handling.

use thiserror::Error;

/// Errors that can occur while building or aligning numeric arrays.
#[derive(Debug, Error)]
pub enum ArrayError {
    /// Input could not be interpreted as a numeric array.
    #[error("cannot interpret input as a numeric array: {reason}")]
    TypeCoercion { reason: String },

    /// Two shapes cannot be broadcast together.
    #[error("shapes {lhs:?} and {rhs:?} cannot be broadcast together")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    /// Requested reduction axis does not exist in the array.
    #[error("axis {axis} is out of bounds for an array with {ndim} dimension(s)")]
    AxisOutOfBounds { axis: usize, ndim: usize },
}

/// Result type for array operations.
pub type ArrayResult<T> = Result<T, ArrayError>;
