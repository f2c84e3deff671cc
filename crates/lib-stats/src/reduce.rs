//! Per-lane reductions shared by the public statistics.
//!
//! Each statistic reduces one concrete axis of a resolved array. The driver
//! here applies a lane function over that axis; the lane functions implement
//! the plain and NaN-ignoring moments. Empty lanes (and all-NaN lanes in the
//! NaN-ignoring variants) reduce to NaN rather than an error.

use crate::error::StatsResult;
use lib_array::AxisSpec;
use ndarray::{ArrayD, ArrayView1, IxDyn};

/// Reduce `a` along `axis` with the given lane function.
///
/// With `keep_dims` the reduced dimension is retained with length 1; for a
/// `Flat` reduction the result keeps the input's full rank with every
/// dimension collapsed to 1.
pub(crate) fn reduce_axis<F>(
    a: ArrayD<f64>,
    axis: AxisSpec,
    keep_dims: bool,
    f: F,
) -> StatsResult<ArrayD<f64>>
where
    F: Fn(&ArrayView1<'_, f64>) -> f64,
{
    let orig_ndim = a.ndim();
    let (resolved, ax) = axis.resolve(a)?;
    let reduced = resolved.map_axis(ax, |lane| f(&lane));

    if !keep_dims {
        return Ok(reduced);
    }

    match axis {
        AxisSpec::Flat => {
            let value = reduced.iter().next().copied().unwrap_or(f64::NAN);
            Ok(ArrayD::from_elem(IxDyn(&vec![1; orig_ndim]), value))
        }
        AxisSpec::Axis(_) => Ok(reduced.insert_axis(ax)),
    }
}

/// Arithmetic mean of a lane. Empty lane reduces to NaN.
pub(crate) fn lane_mean(lane: &ArrayView1<'_, f64>) -> f64 {
    let n = lane.len();
    if n == 0 {
        return f64::NAN;
    }
    lane.sum() / n as f64
}

/// Mean of squares of a lane. Empty lane reduces to NaN.
pub(crate) fn lane_mean_square(lane: &ArrayView1<'_, f64>) -> f64 {
    let n = lane.len();
    if n == 0 {
        return f64::NAN;
    }
    lane.iter().map(|&v| v * v).sum::<f64>() / n as f64
}

/// Mean of squares ignoring NaNs. All-NaN lane reduces to NaN.
pub(crate) fn lane_nanmean_square(lane: &ArrayView1<'_, f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in lane.iter() {
        if !v.is_nan() {
            sum += v * v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Mean ignoring NaNs. All-NaN lane reduces to NaN.
pub(crate) fn lane_nanmean(lane: &ArrayView1<'_, f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in lane.iter() {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Variance of a lane with `ddof` delta degrees of freedom.
///
/// The normalizing divisor is `n - ddof`; a non-positive divisor yields
/// NaN/inf per floating-point arithmetic, matching the degeneracy-as-value
/// policy.
pub(crate) fn lane_var(lane: &ArrayView1<'_, f64>, ddof: usize) -> f64 {
    let n = lane.len();
    if n == 0 {
        return f64::NAN;
    }
    let mean = lane.sum() / n as f64;
    let ss: f64 = lane
        .iter()
        .map(|&v| {
            let d = v - mean;
            d * d
        })
        .sum();
    ss / (n as f64 - ddof as f64)
}

/// Variance ignoring NaNs, with `ddof` delta degrees of freedom.
pub(crate) fn lane_nanvar(lane: &ArrayView1<'_, f64>, ddof: usize) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in lane.iter() {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        return f64::NAN;
    }
    let mean = sum / count as f64;
    let mut ss = 0.0;
    for &v in lane.iter() {
        if !v.is_nan() {
            let d = v - mean;
            ss += d * d;
        }
    }
    ss / (count as f64 - ddof as f64)
}

/// Standard deviation of a lane with `ddof` delta degrees of freedom.
pub(crate) fn lane_std(lane: &ArrayView1<'_, f64>, ddof: usize) -> f64 {
    lane_var(lane, ddof).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_lane_mean_and_var() {
        let data = array![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let lane = data.view();
        assert!((lane_mean(&lane) - 5.0).abs() < 1e-12);
        assert!((lane_var(&lane, 0) - 4.0).abs() < 1e-12);
        assert!((lane_var(&lane, 1) - 32.0 / 7.0).abs() < 1e-12);
        assert!((lane_std(&lane, 0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_nan_variants_skip_nan() {
        let data = array![1.0, f64::NAN, 3.0];
        let lane = data.view();
        assert!((lane_nanmean(&lane) - 2.0).abs() < 1e-12);
        assert!((lane_nanvar(&lane, 0) - 1.0).abs() < 1e-12);
        assert!(lane_mean(&lane).is_nan());
    }

    #[test]
    fn test_all_nan_lane_is_nan() {
        let data = array![f64::NAN, f64::NAN];
        let lane = data.view();
        assert!(lane_nanmean(&lane).is_nan());
        assert!(lane_nanvar(&lane, 0).is_nan());
    }

    #[test]
    fn test_empty_lane_is_nan() {
        let data: ndarray::Array1<f64> = ndarray::Array1::from_vec(Vec::new());
        let lane = data.view();
        assert!(lane_mean(&lane).is_nan());
        assert!(lane_mean_square(&lane).is_nan());
        assert!(lane_var(&lane, 0).is_nan());
    }

    #[test]
    fn test_ddof_equal_to_count_is_nan() {
        let data = array![3.0, 3.0];
        let lane = data.view();
        // Zero sum of squares over zero divisor
        assert!(lane_var(&lane, 2).is_nan());
    }
}
