//! Error types for decibel conversions.

use lib_array::ArrayError;
use thiserror::Error;

/// Errors that can occur during unit conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input could not be coerced, or an input/reference pair could not be
    /// broadcast together.
    #[error(transparent)]
    Array(#[from] ArrayError),
}

/// Result type for unit conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;
