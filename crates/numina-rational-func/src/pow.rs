//! Exact integer powers of rational functions.
//!
//! There are three entry points, each extending the previous one:
//! - [`RationalFunction::pow_unsigned`] raises numerator and denominator
//!   independently. Equal powers of coprime polynomials stay coprime and a
//!   positive leading coefficient stays positive, so the result needs no
//!   reduction.
//! - [`RationalFunction::pow_signed`] adds negative exponents by powering
//!   the reciprocal.
//! - [`RationalFunction::pow_arbitrary_precision`] adds exponents outside
//!   the `i64` range, which can only be written down for zero and for
//!   ratios of unit monomials.
//!
//! [`RationalFunction::pow`] dispatches on an [`Exponent`].

use std::fmt;

use numina_integers::Integer;

use crate::error::FracError;
use crate::RationalFunction;

/// An exponent for [`RationalFunction::pow`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Exponent {
    /// A non-negative machine word.
    Unsigned(u64),
    /// A signed machine word.
    Signed(i64),
    /// An arbitrary precision integer.
    Big(Integer),
}

impl From<u64> for Exponent {
    fn from(k: u64) -> Self {
        Self::Unsigned(k)
    }
}

impl From<u32> for Exponent {
    fn from(k: u32) -> Self {
        Self::Unsigned(u64::from(k))
    }
}

impl From<i64> for Exponent {
    fn from(k: i64) -> Self {
        Self::Signed(k)
    }
}

impl From<i32> for Exponent {
    fn from(k: i32) -> Self {
        Self::Signed(i64::from(k))
    }
}

impl From<Integer> for Exponent {
    fn from(k: Integer) -> Self {
        Self::Big(k)
    }
}

impl From<&Integer> for Exponent {
    fn from(k: &Integer) -> Self {
        Self::Big(k.clone())
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(k) => write!(f, "{k}"),
            Self::Signed(k) => write!(f, "{k}"),
            Self::Big(k) => write!(f, "{k}"),
        }
    }
}

impl RationalFunction {
    /// Computes `self^k`.
    ///
    /// `0^0` is `1`.
    ///
    /// # Errors
    ///
    /// Propagates [`FracError::Poly`] if a power of the numerator or
    /// denominator exceeds the context's exponent bound.
    pub fn pow_unsigned(&self, k: u64) -> Result<Self, FracError> {
        if k == 0 {
            return Ok(Self::one(self.context()));
        }
        let num = self.numerator().pow_u64(k)?;
        let den = self.denominator().pow_u64(k)?;
        Ok(Self::with_positive_denominator(num, den))
    }

    /// Computes `self^k` for a signed exponent.
    ///
    /// # Errors
    ///
    /// Returns [`FracError::NegativePowerOfZero`] for zero with `k < 0`, and
    /// propagates representation limits like [`Self::pow_unsigned`].
    pub fn pow_signed(&self, k: i64) -> Result<Self, FracError> {
        if k >= 0 {
            return self.pow_unsigned(k.unsigned_abs());
        }
        if self.is_zero() {
            return Err(FracError::NegativePowerOfZero);
        }

        let m = k.unsigned_abs();
        let num = self.denominator().pow_u64(m)?;
        let den = self.numerator().pow_u64(m)?;
        Ok(Self::with_positive_denominator(num, den))
    }

    /// Computes `self^k` for an arbitrary precision exponent.
    ///
    /// Exponents that fit an `i64` go through [`Self::pow_signed`]. Larger
    /// exponents are only supported when the base is zero or numerator and
    /// denominator are single terms with coefficient `±1`; such bases are
    /// raised termwise.
    ///
    /// # Errors
    ///
    /// Returns [`FracError::NegativePowerOfZero`] for zero with `k < 0`,
    /// [`FracError::Unsupported`] for a huge exponent on any other base,
    /// and propagates the context's exponent bound.
    pub fn pow_arbitrary_precision(&self, k: &Integer) -> Result<Self, FracError> {
        if let Some(k) = k.to_i64() {
            return self.pow_signed(k);
        }
        if self.is_zero() {
            return if k.is_negative() {
                Err(FracError::NegativePowerOfZero)
            } else {
                Ok(self.clone())
            };
        }
        if !self.is_unit_monomial_ratio() {
            return Err(FracError::Unsupported);
        }

        tracing::trace!(bits = k.bit_len(), "raising unit monomial ratio termwise");
        let magnitude = Integer::from(k.unsigned_abs());
        let num = self.numerator().pow_integer(&magnitude)?;
        let den = self.denominator().pow_integer(&magnitude)?;
        let rf = if k.is_negative() {
            Self::with_positive_denominator(den, num)
        } else {
            Self::with_positive_denominator(num, den)
        };
        Ok(rf)
    }

    /// Computes `self^k`, dispatching on the kind of exponent.
    ///
    /// # Errors
    ///
    /// See [`Self::pow_unsigned`], [`Self::pow_signed`] and
    /// [`Self::pow_arbitrary_precision`].
    pub fn pow(&self, k: impl Into<Exponent>) -> Result<Self, FracError> {
        let k = k.into();
        tracing::debug!(exponent = %k, terms = self.numerator().len() + self.denominator().len(), "pow");
        match k {
            Exponent::Unsigned(k) => self.pow_unsigned(k),
            Exponent::Signed(k) => self.pow_signed(k),
            Exponent::Big(k) => self.pow_arbitrary_precision(&k),
        }
    }

    /// In-place [`Self::pow_unsigned`]; `self` is unchanged on failure.
    ///
    /// # Errors
    ///
    /// See [`Self::pow_unsigned`].
    pub fn pow_unsigned_assign(&mut self, k: u64) -> Result<(), FracError> {
        *self = self.pow_unsigned(k)?;
        Ok(())
    }

    /// In-place [`Self::pow_signed`]; `self` is unchanged on failure.
    ///
    /// # Errors
    ///
    /// See [`Self::pow_signed`].
    pub fn pow_signed_assign(&mut self, k: i64) -> Result<(), FracError> {
        *self = self.pow_signed(k)?;
        Ok(())
    }

    /// In-place [`Self::pow_arbitrary_precision`]; `self` is unchanged on
    /// failure.
    ///
    /// # Errors
    ///
    /// See [`Self::pow_arbitrary_precision`].
    pub fn pow_arbitrary_precision_assign(&mut self, k: &Integer) -> Result<(), FracError> {
        *self = self.pow_arbitrary_precision(k)?;
        Ok(())
    }

    /// In-place [`Self::pow`]; `self` is unchanged on failure.
    ///
    /// # Errors
    ///
    /// See [`Self::pow`].
    pub fn pow_assign(&mut self, k: impl Into<Exponent>) -> Result<(), FracError> {
        *self = self.pow(k)?;
        Ok(())
    }
}
