//! # lib-decibel
//!
//! Bidirectional conversions between linear and decibel scales.
//!
//! Power-like quantities scale by `10·log10`, amplitude/magnitude-like
//! quantities by `20·log10`. Each conversion has a plain form (implicit
//! reference of 1) and a `_ref` form that normalizes against a
//! broadcast-compatible reference first:
//!
//! - [`pow2db`] / [`pow2db_ref`] and the inverse [`db2pow`] / [`db2pow_ref`]
//! - [`mag2db`] / [`mag2db_ref`] and the inverse [`db2mag`] / [`db2mag_ref`]
//!
//! These functions never validate their numeric domain: `log10` of zero or a
//! negative value yields `-inf` or NaN in the result, exactly as IEEE 754
//! arithmetic produces it.

pub mod convert;
pub mod error;

pub use convert::{db2mag, db2mag_ref, db2pow, db2pow_ref, mag2db, mag2db_ref, pow2db, pow2db_ref};
pub use error::{ConvertError, ConvertResult};
