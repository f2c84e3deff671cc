//! Dispersion statistics: Fano factor and signal-to-noise ratio.

use crate::error::{StatsError, StatsResult};
use crate::policy::{contains_nan, NanPolicy};
use crate::reduce::{self, lane_mean, lane_nanmean, lane_nanvar, lane_std, lane_var};
use lib_array::{ArrayLike, AxisSpec};
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

/// Options for [`fano_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanoOptions {
    /// Axis to reduce over. Default is the first axis.
    pub axis: AxisSpec,

    /// Delta degrees of freedom for the variance divisor. Default 0
    /// (biased variance).
    pub ddof: usize,

    /// NaN handling. Default [`NanPolicy::Propagate`].
    pub nan_policy: NanPolicy,
}

impl Default for FanoOptions {
    fn default() -> Self {
        Self {
            axis: AxisSpec::Axis(0),
            ddof: 0,
            nan_policy: NanPolicy::Propagate,
        }
    }
}

/// Options for [`signaltonoise_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnrOptions {
    /// Axis to reduce over. Default is the first axis.
    pub axis: AxisSpec,

    /// Delta degrees of freedom for the standard-deviation divisor.
    /// Default 0.
    pub ddof: usize,
}

impl Default for SnrOptions {
    fn default() -> Self {
        Self {
            axis: AxisSpec::Axis(0),
            ddof: 0,
        }
    }
}

/// Fano factor along the first axis with default options.
///
/// The Fano factor is the ratio of the (biased, for `ddof = 0`) variance to
/// the mean, characterizing dispersion relative to a Poisson baseline.
pub fn fano(a: impl ArrayLike) -> StatsResult<ArrayD<f64>> {
    fano_with(a, FanoOptions::default())
}

/// Fano factor: `var(a, axis, ddof) / mean(a, axis)`.
///
/// # Arguments
///
/// * `a` - Input values (array-like)
/// * `options` - Axis, ddof, and NaN policy
///
/// # Returns
///
/// The Fano factor along the requested axis.
///
/// # Errors
///
/// [`StatsError::NanPresent`] when the policy is [`NanPolicy::Raise`] and the
/// input contains NaN; no numeric work is done in that case.
pub fn fano_with(a: impl ArrayLike, options: FanoOptions) -> StatsResult<ArrayD<f64>> {
    let a = a.into_array()?;
    let has_nan = contains_nan(&a);

    if has_nan && options.nan_policy == NanPolicy::Raise {
        return Err(StatsError::NanPresent);
    }

    let omit = has_nan && options.nan_policy == NanPolicy::Omit;
    if omit {
        let nan_count = a.iter().filter(|v| v.is_nan()).count();
        tracing::debug!(nan_count, "omitting NaN samples from Fano factor");
    }

    let ddof = options.ddof;
    reduce::reduce_axis(a, options.axis, false, move |lane| {
        if omit {
            lane_nanvar(lane, ddof) / lane_nanmean(lane)
        } else {
            lane_var(lane, ddof) / lane_mean(lane)
        }
    })
}

/// Signal-to-noise ratio along the first axis with default options.
pub fn signaltonoise(a: impl ArrayLike) -> StatsResult<ArrayD<f64>> {
    signaltonoise_with(a, SnrOptions::default())
}

/// Signal-to-noise ratio: `mean(a, axis) / std(a, axis, ddof)`.
///
/// Wherever the standard deviation along the axis is exactly zero the result
/// at that position is defined to be zero, never infinite or NaN.
pub fn signaltonoise_with(a: impl ArrayLike, options: SnrOptions) -> StatsResult<ArrayD<f64>> {
    let a = a.into_array()?;
    let ddof = options.ddof;
    reduce::reduce_axis(a, options.axis, false, move |lane| {
        let sd = lane_std(lane, ddof);
        if sd == 0.0 {
            0.0
        } else {
            lane_mean(lane) / sd
        }
    })
}
