//! # numina-integers
//!
//! Arbitrary precision integer arithmetic for the numina kernel.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision signed integers (`Integer`)
//! - Unsigned magnitudes (`Natural`) used for monomial exponents
//!
//! ## Performance Notes
//!
//! - Values fitting in two machine words are stored inline
//! - Larger values are heap-allocated

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::Integer;

/// Unsigned arbitrary precision integer.
///
/// Monomial exponents use this type directly so that powers far beyond
/// the native word size stay representable.
pub type Natural = dashu::integer::UBig;
