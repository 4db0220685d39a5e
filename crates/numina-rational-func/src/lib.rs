//! Multivariate rational functions over Z for the numina algebra kernel.
//!
//! This crate provides:
//! - [`RationalFunction`], a quotient of two [`MPoly`] kept in canonical
//!   form (coprime parts, positive leading coefficient in the denominator)
//! - Field arithmetic (add, sub, mul, div, inv, neg)
//! - Exact integer powers with machine-word and arbitrary precision
//!   exponents, see [`Exponent`]
//!
//! Every operation that can fail returns a [`FracError`] and leaves its
//! inputs untouched.
//!
//! [`MPoly`]: numina_poly::MPoly

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
pub mod error;
pub mod pow;
mod rational_func;

#[cfg(test)]
mod naive;
#[cfg(test)]
mod proptests;

pub use error::FracError;
pub use pow::Exponent;
pub use rational_func::RationalFunction;
