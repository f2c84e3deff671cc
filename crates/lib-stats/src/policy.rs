//! NaN handling policy.

use crate::error::StatsError;
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a statistic treats NaN values in its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NanPolicy {
    /// NaNs flow through the reduction and contaminate the result.
    #[default]
    Propagate,

    /// NaNs are excluded from the reduction, as if absent from the input.
    Omit,

    /// The presence of any NaN is a usage error.
    Raise,
}

impl FromStr for NanPolicy {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, StatsError> {
        match s.to_ascii_lowercase().as_str() {
            "propagate" => Ok(NanPolicy::Propagate),
            "omit" => Ok(NanPolicy::Omit),
            "raise" => Ok(NanPolicy::Raise),
            other => Err(StatsError::InvalidNanPolicy(other.to_string())),
        }
    }
}

/// Check whether an array contains any NaN value.
#[inline]
pub(crate) fn contains_nan(a: &ArrayD<f64>) -> bool {
    a.iter().any(|v| v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_array::ArrayLike;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!("propagate".parse::<NanPolicy>().unwrap(), NanPolicy::Propagate);
        assert_eq!("omit".parse::<NanPolicy>().unwrap(), NanPolicy::Omit);
        assert_eq!("Raise".parse::<NanPolicy>().unwrap(), NanPolicy::Raise);
    }

    #[test]
    fn test_parse_unknown_token() {
        let result = "drop".parse::<NanPolicy>();
        assert!(matches!(result, Err(StatsError::InvalidNanPolicy(t)) if t == "drop"));
    }

    #[test]
    fn test_contains_nan() {
        let clean = vec![1.0, 2.0].into_array().unwrap();
        let dirty = vec![1.0, f64::NAN].into_array().unwrap();
        assert!(!contains_nan(&clean));
        assert!(contains_nan(&dirty));
    }
}
