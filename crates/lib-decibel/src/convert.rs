//! Linear/decibel conversion functions.

use crate::error::ConvertResult;
use lib_array::{co_broadcast, ArrayLike};
use ndarray::ArrayD;

/// Convert linear power values to decibels: `10·log10(x)` elementwise.
///
/// # Arguments
///
/// * `x` - Power values (array-like)
///
/// # Returns
///
/// The values of `x` in decibels, same shape as the coerced input.
pub fn pow2db(x: impl ArrayLike) -> ConvertResult<ArrayD<f64>> {
    let x = x.into_array()?;
    Ok(x.mapv(|v| 10.0 * v.log10()))
}

/// Convert linear power values to decibels relative to a reference power:
/// `10·log10(x/ref)`.
///
/// `x` and `reference` are broadcast against each other; incompatible shapes
/// fail with a shape-mismatch error.
pub fn pow2db_ref(x: impl ArrayLike, reference: impl ArrayLike) -> ConvertResult<ArrayD<f64>> {
    let (x, r) = co_broadcast(&x.into_array()?, &reference.into_array()?)?;
    Ok((&x / &r).mapv(|v| 10.0 * v.log10()))
}

/// Convert linear magnitude values to decibels: `20·log10(x)` elementwise.
///
/// # Arguments
///
/// * `x` - Magnitude values (array-like)
///
/// # Returns
///
/// The values of `x` in decibels, same shape as the coerced input.
pub fn mag2db(x: impl ArrayLike) -> ConvertResult<ArrayD<f64>> {
    let x = x.into_array()?;
    Ok(x.mapv(|v| 20.0 * v.log10()))
}

/// Convert linear magnitude values to decibels relative to a reference
/// magnitude: `20·log10(x/ref)`.
pub fn mag2db_ref(x: impl ArrayLike, reference: impl ArrayLike) -> ConvertResult<ArrayD<f64>> {
    let (x, r) = co_broadcast(&x.into_array()?, &reference.into_array()?)?;
    Ok((&x / &r).mapv(|v| 20.0 * v.log10()))
}

/// Convert decibel values to linear power: `10^(y/10)` elementwise.
///
/// Exact inverse of [`pow2db`].
pub fn db2pow(y: impl ArrayLike) -> ConvertResult<ArrayD<f64>> {
    let y = y.into_array()?;
    Ok(y.mapv(|v| 10f64.powf(v / 10.0)))
}

/// Convert decibel values to linear power relative to a reference power:
/// `10^(y/10)·ref`.
///
/// Exact inverse of [`pow2db_ref`] for the same reference.
pub fn db2pow_ref(y: impl ArrayLike, reference: impl ArrayLike) -> ConvertResult<ArrayD<f64>> {
    let (y, r) = co_broadcast(&y.into_array()?, &reference.into_array()?)?;
    let lin = y.mapv(|v| 10f64.powf(v / 10.0));
    Ok(&lin * &r)
}

/// Convert decibel values to linear magnitude: `10^(y/20)` elementwise.
///
/// Exact inverse of [`mag2db`].
pub fn db2mag(y: impl ArrayLike) -> ConvertResult<ArrayD<f64>> {
    let y = y.into_array()?;
    Ok(y.mapv(|v| 10f64.powf(v / 20.0)))
}

/// Convert decibel values to linear magnitude relative to a reference
/// magnitude: `10^(y/20)·ref`.
///
/// Exact inverse of [`mag2db_ref`] for the same reference.
pub fn db2mag_ref(y: impl ArrayLike, reference: impl ArrayLike) -> ConvertResult<ArrayD<f64>> {
    let (y, r) = co_broadcast(&y.into_array()?, &reference.into_array()?)?;
    let lin = y.mapv(|v| 10f64.powf(v / 20.0));
    Ok(&lin * &r)
}
