//! Coercion from array-like inputs into dynamic-dimensional arrays.
//!
//! Every public function in the workspace accepts "array-like" input: a
//! scalar, a slice, a `Vec`, a nested `Vec`, or any `ndarray` array. The
//! [`ArrayLike`] trait converts each of these into an owned
//! `ArrayD<f64>` at the entry point, without mutating the caller's value.

use crate::error::{ArrayError, ArrayResult};
use ndarray::{Array, Array1, Array2, ArrayBase, ArrayD, Data, Dimension, IxDyn};

/// Conversion into a dynamic-dimensional `f64` array.
///
/// Implemented for scalars, slices, vectors, nested vectors (rows must have
/// equal length), fixed-size arrays, and `ndarray` arrays and views.
pub trait ArrayLike {
    /// Convert into an owned `ArrayD<f64>`.
    ///
    /// Fails with [`ArrayError::TypeCoercion`] when the input has no
    /// well-defined rectangular shape (e.g. ragged nested vectors).
    fn into_array(self) -> ArrayResult<ArrayD<f64>>;
}

impl ArrayLike for f64 {
    fn into_array(self) -> ArrayResult<ArrayD<f64>> {
        Ok(ArrayD::from_elem(IxDyn(&[]), self))
    }
}

impl ArrayLike for Vec<f64> {
    fn into_array(self) -> ArrayResult<ArrayD<f64>> {
        Ok(Array1::from_vec(self).into_dyn())
    }
}

impl ArrayLike for &[f64] {
    fn into_array(self) -> ArrayResult<ArrayD<f64>> {
        Ok(Array1::from_vec(self.to_vec()).into_dyn())
    }
}

impl<const N: usize> ArrayLike for [f64; N] {
    fn into_array(self) -> ArrayResult<ArrayD<f64>> {
        Ok(Array1::from_vec(self.to_vec()).into_dyn())
    }
}

impl<const N: usize> ArrayLike for &[f64; N] {
    fn into_array(self) -> ArrayResult<ArrayD<f64>> {
        Ok(Array1::from_vec(self.to_vec()).into_dyn())
    }
}

impl ArrayLike for Vec<Vec<f64>> {
    fn into_array(self) -> ArrayResult<ArrayD<f64>> {
        let rows = self.len();
        let cols = self.first().map_or(0, Vec::len);

        let mut flat = Vec::with_capacity(rows * cols);
        for (i, row) in self.into_iter().enumerate() {
            if row.len() != cols {
                return Err(ArrayError::TypeCoercion {
                    reason: format!(
                        "ragged nested sequence: row {} has length {}, expected {}",
                        i,
                        row.len(),
                        cols
                    ),
                });
            }
            flat.extend(row);
        }

        let arr = Array2::from_shape_vec((rows, cols), flat).map_err(|e| {
            ArrayError::TypeCoercion {
                reason: e.to_string(),
            }
        })?;
        Ok(arr.into_dyn())
    }
}

impl<D: Dimension> ArrayLike for Array<f64, D> {
    fn into_array(self) -> ArrayResult<ArrayD<f64>> {
        Ok(self.into_dyn())
    }
}

impl<S: Data<Elem = f64>, D: Dimension> ArrayLike for &ArrayBase<S, D> {
    fn into_array(self) -> ArrayResult<ArrayD<f64>> {
        Ok(self.to_owned().into_dyn())
    }
}

/// Extract the single value of a zero-dimensional (or one-element) array.
///
/// Whole-array reductions return 0-d arrays; this is the convenience path
/// back to a plain `f64`. Returns `None` when the array holds more than one
/// element.
#[inline]
pub fn to_scalar(a: &ArrayD<f64>) -> Option<f64> {
    if a.len() == 1 {
        a.iter().next().copied()
    } else {
        None
    }
}
