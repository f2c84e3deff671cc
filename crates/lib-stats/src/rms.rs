//! Root-mean-square reductions.

use crate::error::StatsResult;
use crate::reduce::{self, lane_mean_square, lane_nanmean_square};
use lib_array::{ArrayLike, AxisSpec};
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

/// Options for the RMS reductions.
///
/// The defaults reduce the whole array and drop the reduced dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceOptions {
    /// Axis to reduce over. Default is [`AxisSpec::Flat`].
    pub axis: AxisSpec,

    /// Keep the reduced dimension with length 1 instead of dropping it.
    pub keep_dims: bool,
}

/// Root mean square of an array: `sqrt(mean(a²))` over the whole array.
///
/// # Arguments
///
/// * `a` - Input values (array-like)
///
/// # Returns
///
/// A 0-d array holding the RMS value; see [`rms_with`] for axis-wise
/// reduction.
pub fn rms(a: impl ArrayLike) -> StatsResult<ArrayD<f64>> {
    rms_with(a, ReduceOptions::default())
}

/// Root mean square along a selected axis.
pub fn rms_with(a: impl ArrayLike, options: ReduceOptions) -> StatsResult<ArrayD<f64>> {
    let a = a.into_array()?;
    reduce::reduce_axis(a, options.axis, options.keep_dims, |lane| {
        lane_mean_square(lane).sqrt()
    })
}

/// Root mean square ignoring NaNs, over the whole array.
///
/// NaN entries are treated as absent from the reduction, not as zero. A
/// reduction whose every element is NaN yields NaN.
pub fn nanrms(a: impl ArrayLike) -> StatsResult<ArrayD<f64>> {
    nanrms_with(a, ReduceOptions::default())
}

/// Root mean square ignoring NaNs, along a selected axis.
pub fn nanrms_with(a: impl ArrayLike, options: ReduceOptions) -> StatsResult<ArrayD<f64>> {
    let a = a.into_array()?;
    reduce::reduce_axis(a, options.axis, options.keep_dims, |lane| {
        lane_nanmean_square(lane).sqrt()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_array::to_scalar;

    #[test]
    fn test_rms_of_three_four() {
        let out = rms(vec![3.0, 4.0]).unwrap();
        // sqrt((9 + 16) / 2)
        assert!((to_scalar(&out).unwrap() - 12.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_rms_along_each_axis() {
        let a = vec![vec![3.0, 4.0], vec![3.0, 4.0]];
        let rows = rms_with(
            a.clone(),
            ReduceOptions {
                axis: AxisSpec::Axis(0),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(rows.shape(), &[2]);
        assert!((rows[[0]] - 3.0).abs() < 1e-12);
        assert!((rows[[1]] - 4.0).abs() < 1e-12);

        let cols = rms_with(
            a,
            ReduceOptions {
                axis: AxisSpec::Axis(1),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(cols.shape(), &[2]);
        assert!((cols[[0]] - 12.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_keep_dims_shapes() {
        let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let kept = rms_with(
            a.clone(),
            ReduceOptions {
                axis: AxisSpec::Axis(1),
                keep_dims: true,
            },
        )
        .unwrap();
        assert_eq!(kept.shape(), &[2, 1]);

        let flat_kept = rms_with(
            a,
            ReduceOptions {
                axis: AxisSpec::Flat,
                keep_dims: true,
            },
        )
        .unwrap();
        assert_eq!(flat_kept.shape(), &[1, 1]);
    }

    #[test]
    fn test_rms_and_nanrms_agree_without_nan() {
        let a = vec![1.5, 2.5, 4.0, 8.0];
        let plain = rms(a.clone()).unwrap();
        let nan_aware = nanrms(a).unwrap();
        assert_eq!(to_scalar(&plain), to_scalar(&nan_aware));
    }

    #[test]
    fn test_nanrms_ignores_nan() {
        let with_nan = nanrms(vec![1.0, 2.0, f64::NAN, 3.0]).unwrap();
        let without = rms(vec![1.0, 2.0, 3.0]).unwrap();
        assert!((to_scalar(&with_nan).unwrap() - to_scalar(&without).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn test_rms_propagates_nan() {
        let out = rms(vec![1.0, f64::NAN]).unwrap();
        assert!(to_scalar(&out).unwrap().is_nan());
    }

    #[test]
    fn test_nanrms_all_nan_lane() {
        let a = vec![vec![1.0, f64::NAN], vec![2.0, f64::NAN]];
        let out = nanrms_with(
            a,
            ReduceOptions {
                axis: AxisSpec::Axis(0),
                ..Default::default()
            },
        )
        .unwrap();
        assert!((out[[0]] - 2.5f64.sqrt()).abs() < 1e-12);
        assert!(out[[1]].is_nan());
    }

    #[test]
    fn test_axis_out_of_bounds() {
        let result = rms_with(
            vec![1.0, 2.0],
            ReduceOptions {
                axis: AxisSpec::Axis(1),
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }
}
