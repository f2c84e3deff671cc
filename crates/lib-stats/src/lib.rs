//! # lib-stats
//!
//! Axis-aware summary statistics over numeric arrays.
//!
//! Every statistic coerces its array-like input, resolves the axis selector
//! through one shared normalization step, and reduces:
//!
//! - [`rms`] / [`nanrms`]: root-mean-square, with a NaN-ignoring variant
//! - [`fano`]: Fano factor (variance over mean), with a configurable
//!   [`NanPolicy`]
//! - [`signaltonoise`]: mean over standard deviation, with an explicit
//!   zero-guard where the standard deviation is exactly zero
//!
//! Axis defaults follow the conventions these statistics are historically
//! used with: `rms`/`nanrms` default to whole-array reduction, while
//! `fano`/`signaltonoise` default to the first axis.
//!
//! Numeric degeneracies (empty reductions, division by zero) are values, not
//! errors; only malformed input and the `Raise` NaN policy produce an `Err`.

pub mod dispersion;
pub mod error;
pub mod policy;
pub mod rms;

mod reduce;

pub use dispersion::{fano, fano_with, signaltonoise, signaltonoise_with, FanoOptions, SnrOptions};
pub use error::{StatsError, StatsResult};
pub use policy::NanPolicy;
pub use rms::{nanrms, nanrms_with, rms, rms_with, ReduceOptions};
