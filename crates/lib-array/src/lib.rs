//! # lib-array
//!
//! Shared numeric-array data model for the signal-analysis workspace.
//!
//! This crate provides the foundational pieces the computation crates build on:
//!
//! - **Coercion**: the [`ArrayLike`] adapter turning scalars, slices, vectors,
//!   and nested vectors into a dynamic-dimensional `ndarray::ArrayD<f64>`
//! - **Axis selection**: [`AxisSpec`] for whole-array vs. single-axis reduction
//! - **Broadcasting**: mutual (two-sided) shape broadcasting for input/reference
//!   pairs
//!
//! The computation crates (`lib-decibel`, `lib-stats`) are independent of each
//! other; this data model is the only thing they share.

pub mod axis;
pub mod broadcast;
pub mod coerce;
pub mod error;

pub use axis::AxisSpec;
pub use broadcast::co_broadcast;
pub use coerce::{to_scalar, ArrayLike};
pub use error::{ArrayError, ArrayResult};
