//! Axis selection for reductions.

use crate::error::{ArrayError, ArrayResult};
use ndarray::{Array1, ArrayD, Axis};
use serde::{Deserialize, Serialize};

/// Selects the dimension a reduction operates over.
///
/// `Flat` treats the array as one flat sequence and reduces all of it to a
/// single value. `Axis(k)` reduces dimension `k`, leaving the remaining
/// dimensions intact in the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSpec {
    /// Reduce over the entire array.
    #[default]
    Flat,

    /// Reduce over one dimension, by index.
    Axis(usize),
}

impl AxisSpec {
    /// Resolve the selector against an array into the array to reduce and a
    /// concrete axis.
    ///
    /// For `Flat` the array is flattened (logical order) to one dimension and
    /// the concrete axis is 0. For `Axis(k)` the array passes through
    /// unchanged after bounds-checking `k`.
    pub fn resolve(self, a: ArrayD<f64>) -> ArrayResult<(ArrayD<f64>, Axis)> {
        match self {
            AxisSpec::Flat => {
                let flat: Array1<f64> = a.iter().copied().collect();
                Ok((flat.into_dyn(), Axis(0)))
            }
            AxisSpec::Axis(k) => {
                if k >= a.ndim() {
                    return Err(ArrayError::AxisOutOfBounds {
                        axis: k,
                        ndim: a.ndim(),
                    });
                }
                Ok((a, Axis(k)))
            }
        }
    }
}
