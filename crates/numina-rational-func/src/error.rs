//! Error type for rational function operations.

use numina_poly::PolyError;
use thiserror::Error;

/// Failure of a rational function operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FracError {
    /// Zero raised to a negative power.
    #[error("zero raised to a negative power")]
    NegativePowerOfZero,

    /// Division by (or inversion of) zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An exponent outside the machine range applied to a base that is not
    /// a ratio of unit monomials; the result cannot be written down.
    #[error("arbitrary precision exponent on a base that is not a unit monomial ratio")]
    Unsupported,

    /// Failure in the underlying polynomial arithmetic.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

impl FracError {
    /// Returns true if the operation has no mathematical value.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(
            self,
            Self::NegativePowerOfZero | Self::DivisionByZero | Self::Poly(PolyError::DivisionByZero)
        )
    }

    /// Returns true if the value exists but cannot be represented.
    #[must_use]
    pub fn is_representation_limit(&self) -> bool {
        matches!(
            self,
            Self::Unsupported
                | Self::Poly(PolyError::ExponentOverflow { .. } | PolyError::ExponentTooLarge { .. })
        )
    }
}
