//! Polynomial algorithms.
//!
//! This module contains:
//! - Exact division (by polynomials, integers and monomials)
//! - Powers with machine-word and arbitrary precision exponents
//! - Multivariate GCD over Z (recursive primitive PRS)

pub mod division;
pub mod gcd;
pub mod power;

pub use gcd::gcd;
