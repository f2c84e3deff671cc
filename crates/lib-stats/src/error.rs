//! Error types for summary statistics.

use lib_array::ArrayError;
use thiserror::Error;

/// Errors that can occur while computing a statistic.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Unrecognized NaN-policy token.
    #[error("invalid NaN policy {0:?}, expected \"propagate\", \"omit\", or \"raise\"")]
    InvalidNanPolicy(String),

    /// Input contains NaN values and the policy is [`NanPolicy::Raise`].
    ///
    /// [`NanPolicy::Raise`]: crate::policy::NanPolicy::Raise
    #[error("input contains NaN values")]
    NanPresent,

    /// Input could not be coerced, or the axis selector is invalid.
    #[error(transparent)]
    Array(#[from] ArrayError),
}

/// Result type for statistics.
pub type StatsResult<T> = Result<T, StatsError>;
