//! # numina-poly
//!
//! Sparse multivariate polynomials with integer coefficients.
//!
//! This crate provides:
//! - A shared, immutable polynomial [`Context`] (variables, monomial order,
//!   representation limits)
//! - Monomials with arbitrary precision exponents
//! - [`MPoly`], sparse polynomials over Z kept in canonical term order
//! - Exact division, powers and multivariate GCD
//! - Random generators driven by caller-supplied RNG handles
//!
//! Operations that can hit a representation limit or an undefined case
//! return [`PolyError`] instead of panicking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod context;
pub mod error;
pub mod monomial;
pub mod mpoly;
pub mod ordering;
pub mod random;

#[cfg(test)]
mod proptests;

pub use context::{Context, ContextBuilder};
pub use error::PolyError;
pub use monomial::Monomial;
pub use mpoly::MPoly;
pub use ordering::MonomialOrder;
pub use random::RandomPolyParams;
