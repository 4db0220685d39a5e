//! Field operations on rational functions.
//!
//! Every operation returns a canonical result. Multiplication cancels
//! common factors crosswise before multiplying, so the product is already
//! in lowest terms and needs no final gcd.

use std::ops::Neg;

use crate::error::FracError;
use crate::RationalFunction;

impl RationalFunction {
    /// Adds two rational functions.
    ///
    /// a/b + c/d = (ad + bc) / bd, or (a + c) / b when the denominators
    /// agree.
    ///
    /// # Errors
    ///
    /// Propagates polynomial failures (representation limits).
    pub fn add(&self, other: &Self) -> Result<Self, FracError> {
        if other.is_zero() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(other.clone());
        }
        if self.denominator() == other.denominator() {
            let num = self.numerator().add(other.numerator());
            return Self::from_parts(num, self.denominator().clone());
        }

        let num = self
            .numerator()
            .mul(other.denominator())?
            .add(&other.numerator().mul(self.denominator())?);
        let den = self.denominator().mul(other.denominator())?;
        Self::from_parts(num, den)
    }

    /// Subtracts another rational function from this one.
    ///
    /// # Errors
    ///
    /// Propagates polynomial failures (representation limits).
    pub fn sub(&self, other: &Self) -> Result<Self, FracError> {
        self.add(&other.neg())
    }

    /// Multiplies two rational functions.
    ///
    /// With `g1 = gcd(a, d)` and `g2 = gcd(c, b)`,
    /// (a/b) * (c/d) = ((a/g1)(c/g2)) / ((b/g2)(d/g1)).
    ///
    /// # Errors
    ///
    /// Propagates polynomial failures (representation limits).
    pub fn mul(&self, other: &Self) -> Result<Self, FracError> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero(self.context()));
        }

        let g1 = self.numerator().gcd(other.denominator())?;
        let g2 = other.numerator().gcd(self.denominator())?;

        let num = self
            .numerator()
            .divexact(&g1)?
            .mul(&other.numerator().divexact(&g2)?)?;
        let den = self
            .denominator()
            .divexact(&g2)?
            .mul(&other.denominator().divexact(&g1)?)?;

        Ok(Self::with_positive_denominator(num, den))
    }

    /// Divides this rational function by another.
    ///
    /// # Errors
    ///
    /// Returns [`FracError::DivisionByZero`] if `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, FracError> {
        self.mul(&other.inv()?)
    }

    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`FracError::DivisionByZero`] if this is zero.
    pub fn inv(&self) -> Result<Self, FracError> {
        if self.is_zero() {
            return Err(FracError::DivisionByZero);
        }
        Ok(Self::with_positive_denominator(
            self.denominator().clone(),
            self.numerator().clone(),
        ))
    }

    /// Negates the rational function.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::with_positive_denominator(self.numerator().neg(), self.denominator().clone())
    }
}

impl Neg for RationalFunction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        RationalFunction::neg(&self)
    }
}

impl Neg for &RationalFunction {
    type Output = RationalFunction;

    fn neg(self) -> Self::Output {
        RationalFunction::neg(self)
    }
}
