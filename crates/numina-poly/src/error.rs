//! Error type for polynomial operations.

use thiserror::Error;

/// Failure of a polynomial operation.
///
/// `ExponentOverflow` and `ExponentTooLarge` are representation limits:
/// the mathematical result exists but cannot be built in this context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A monomial exponent needs more bits than the context allows.
    #[error("exponent needs {bits} bits but the context allows at most {limit}")]
    ExponentOverflow {
        /// Bits required by the offending exponent.
        bits: u64,
        /// The context limit.
        limit: u64,
    },

    /// A power that cannot be expanded: the exponent does not fit a
    /// machine word and the base is not a single term with coefficient
    /// `±1`.
    ///
    /// With `terms == 1` the base is a single term whose coefficient
    /// power would need an exponent beyond `usize`.
    #[error("exponent too large to expand a polynomial with {terms} terms")]
    ExponentTooLarge {
        /// Number of terms of the base.
        terms: usize,
    },

    /// A negative exponent was passed to a polynomial power.
    #[error("negative exponent on a polynomial")]
    NegativeExponent,

    /// Division by the zero polynomial.
    #[error("division by zero polynomial")]
    DivisionByZero,

    /// The divisor does not divide the dividend.
    #[error("polynomial division is not exact")]
    InexactDivision,
}
