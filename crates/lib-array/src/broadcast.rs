//! Mutual shape broadcasting.
//!
//! `ndarray`'s arithmetic operators only broadcast the right-hand side into
//! the left-hand shape. Input/reference pairs need the symmetric rule: align
//! trailing dimensions, where each pair must be equal or one of them 1, and
//! expand both operands to the combined shape.

use crate::error::{ArrayError, ArrayResult};
use ndarray::{ArrayD, IxDyn};

/// Broadcast two arrays against each other.
///
/// Returns both operands expanded to their common broadcast shape.
///
/// # Errors
///
/// [`ArrayError::ShapeMismatch`] when the shapes are not broadcast-compatible.
pub fn co_broadcast(
    lhs: &ArrayD<f64>,
    rhs: &ArrayD<f64>,
) -> ArrayResult<(ArrayD<f64>, ArrayD<f64>)> {
    let mismatch = || ArrayError::ShapeMismatch {
        lhs: lhs.shape().to_vec(),
        rhs: rhs.shape().to_vec(),
    };

    let shape = broadcast_shape(lhs.shape(), rhs.shape()).ok_or_else(mismatch)?;
    let l = lhs.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?.to_owned();
    let r = rhs.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?.to_owned();
    Ok((l, r))
}

/// Compute the combined broadcast shape, or `None` if incompatible.
fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> Option<Vec<usize>> {
    let ndim = lhs.len().max(rhs.len());
    let mut out = Vec::with_capacity(ndim);

    let mut l_it = lhs.iter().rev();
    let mut r_it = rhs.iter().rev();
    for _ in 0..ndim {
        let l = l_it.next().copied().unwrap_or(1);
        let r = r_it.next().copied().unwrap_or(1);
        let dim = if l == r {
            l
        } else if l == 1 {
            r
        } else if r == 1 {
            l
        } else {
            return None;
        };
        out.push(dim);
    }

    out.reverse();
    Some(out)
}
