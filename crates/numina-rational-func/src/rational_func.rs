//! Core rational function type.
//!
//! A rational function is a quotient of two polynomials P/Q over Z.
//! The representation is kept canonical:
//! - The numerator and denominator are coprime (gcd = 1)
//! - The denominator is non-zero with a positive leading coefficient
//!   (leading with respect to the context's monomial order)
//! - Zero is represented as `0 / 1`

use std::fmt;
use std::sync::Arc;

use numina_integers::Integer;
use numina_poly::random::RandomPolyParams;
use numina_poly::{Context, MPoly};
use rand::Rng;

use crate::error::FracError;

/// A rational function P/Q with P, Q in Z[x_0, ..., x_{n-1}].
///
/// # Invariants
///
/// - `gcd(numerator, denominator) = 1`
/// - `denominator` is non-zero and its leading coefficient is positive
/// - Zero is `0 / 1`, one is `1 / 1`
///
/// Both parts share the same [`Context`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RationalFunction {
    numerator: MPoly,
    denominator: MPoly,
}

impl RationalFunction {
    /// Creates a rational function from numerator and denominator.
    ///
    /// The result is reduced to lowest terms and the sign is moved into the
    /// numerator.
    ///
    /// # Errors
    ///
    /// Returns [`FracError::DivisionByZero`] if the denominator is zero.
    ///
    /// # Panics
    ///
    /// Panics if the parts belong to different contexts.
    pub fn from_parts(numerator: MPoly, denominator: MPoly) -> Result<Self, FracError> {
        assert_eq!(
            numerator.context(),
            denominator.context(),
            "numerator and denominator belong to different contexts"
        );
        if denominator.is_zero() {
            return Err(FracError::DivisionByZero);
        }
        if numerator.is_zero() {
            return Ok(Self::zero(numerator.context()));
        }

        let g = numerator.gcd(&denominator)?;
        let (numerator, denominator) = if g.is_one() {
            (numerator, denominator)
        } else {
            (numerator.divexact(&g)?, denominator.divexact(&g)?)
        };
        Ok(Self::with_positive_denominator(numerator, denominator))
    }

    /// Wraps coprime parts, flipping both signs if the denominator's
    /// leading coefficient is negative.
    pub(crate) fn with_positive_denominator(numerator: MPoly, denominator: MPoly) -> Self {
        let rf = if denominator.leading_sign() < 0 {
            Self {
                numerator: numerator.neg(),
                denominator: denominator.neg(),
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        };
        debug_assert!(rf.denominator.leading_sign() > 0);
        rf
    }

    /// Creates the zero rational function (0/1).
    #[must_use]
    pub fn zero(ctx: &Arc<Context>) -> Self {
        Self {
            numerator: MPoly::zero(ctx),
            denominator: MPoly::one(ctx),
        }
    }

    /// Creates the constant rational function 1/1.
    #[must_use]
    pub fn one(ctx: &Arc<Context>) -> Self {
        Self {
            numerator: MPoly::one(ctx),
            denominator: MPoly::one(ctx),
        }
    }

    /// Creates the generator x_i as a rational function.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a variable of the context.
    #[must_use]
    pub fn gen(ctx: &Arc<Context>, i: usize) -> Self {
        Self::from_poly(MPoly::var(ctx, i))
    }

    /// Creates a rational function from a polynomial (denominator = 1).
    #[must_use]
    pub fn from_poly(p: MPoly) -> Self {
        let denominator = MPoly::one(p.context());
        Self {
            numerator: p,
            denominator,
        }
    }

    /// Creates a constant rational function c/1.
    #[must_use]
    pub fn from_integer(ctx: &Arc<Context>, c: Integer) -> Self {
        Self::from_poly(MPoly::constant(ctx, c))
    }

    /// Creates the constant `num / den` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`FracError::DivisionByZero`] if `den` is zero.
    pub fn from_i64_ratio(ctx: &Arc<Context>, num: i64, den: i64) -> Result<Self, FracError> {
        Self::from_parts(
            MPoly::constant(ctx, Integer::new(num)),
            MPoly::constant(ctx, Integer::new(den)),
        )
    }

    /// Returns the numerator polynomial.
    #[must_use]
    pub fn numerator(&self) -> &MPoly {
        &self.numerator
    }

    /// Returns the denominator polynomial.
    #[must_use]
    pub fn denominator(&self) -> &MPoly {
        &self.denominator
    }

    /// Returns the shared context.
    #[must_use]
    pub fn context(&self) -> &Arc<Context> {
        self.numerator.context()
    }

    /// Returns true if this is the zero rational function.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }

    /// Returns true if this is a polynomial (denominator = 1).
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns true if numerator and denominator are each a single term
    /// with coefficient `±1`.
    #[must_use]
    pub fn is_unit_monomial_ratio(&self) -> bool {
        self.numerator.is_unit_term() && self.denominator.is_unit_term()
    }

    /// Checks the canonical form invariants.
    ///
    /// Both parts must be canonical polynomials of the same context, the
    /// denominator must have a positive leading coefficient, and the parts
    /// must be coprime.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.numerator.is_canonical()
            && self.denominator.is_canonical()
            && self.numerator.context() == self.denominator.context()
            && self.denominator.leading_sign() > 0
            && self
                .numerator
                .gcd(&self.denominator)
                .is_ok_and(|g| g.is_one())
    }

    /// Draws a random canonical rational function.
    ///
    /// Numerator and denominator are drawn independently with `params`
    /// and then reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// Propagates failures of the reduction.
    pub fn random<R: Rng>(
        rng: &mut R,
        ctx: &Arc<Context>,
        params: RandomPolyParams,
    ) -> Result<Self, FracError> {
        let numerator = MPoly::random(rng, ctx, params);
        let denominator = MPoly::random_not_zero(rng, ctx, params);
        Self::from_parts(numerator, denominator)
    }
}

impl fmt::Display for RationalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_polynomial() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "({})/({})", self.numerator, self.denominator)
        }
    }
}
