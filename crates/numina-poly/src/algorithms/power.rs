//! Powers of multivariate polynomials.
//!
//! Single terms are raised termwise (exponents scaled, coefficient
//! powered); longer polynomials use binary exponentiation. Exponents that
//! do not fit a machine word are only accepted for single terms with a
//! `±1` coefficient, since anything else cannot be written down.

use dashu::base::BitTest;
use num_traits::One;
use numina_integers::{Integer, Natural};

use crate::error::PolyError;
use crate::mpoly::MPoly;

impl MPoly {
    /// Computes `self^k`.
    ///
    /// `0^0` is `1`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if the result needs larger
    /// exponents than the context allows.
    pub fn pow_u64(&self, k: u64) -> Result<Self, PolyError> {
        if k == 0 {
            return Ok(Self::one(self.context()));
        }
        if self.is_zero() || k == 1 {
            return Ok(self.clone());
        }
        if self.len() == 1 {
            return self.pow_term(&Natural::from(k));
        }

        self.check_power_fits(k)?;

        let mut result = Self::one(self.context());
        let mut base = self.clone();
        let mut exp = k;
        loop {
            if exp & 1 == 1 {
                result = result.mul_unchecked(&base);
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = base.mul_unchecked(&base);
        }

        Ok(result)
    }

    /// Computes `self^k` for an arbitrary precision exponent.
    ///
    /// Exponents that fit a `u64` go through [`MPoly::pow_u64`]. Larger
    /// exponents are only supported for zero and for a single term with
    /// coefficient `±1`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NegativeExponent`] for `k < 0`,
    /// [`PolyError::ExponentTooLarge`] if a huge exponent is applied to
    /// anything else than a zero or unit term, and
    /// [`PolyError::ExponentOverflow`] if the context bound is exceeded.
    pub fn pow_integer(&self, k: &Integer) -> Result<Self, PolyError> {
        if k.is_negative() {
            return Err(PolyError::NegativeExponent);
        }
        if let Some(k) = k.to_u64() {
            return self.pow_u64(k);
        }
        if self.is_zero() {
            return Ok(self.clone());
        }
        if !self.is_unit_term() {
            return Err(PolyError::ExponentTooLarge { terms: self.len() });
        }
        self.pow_term(&k.unsigned_abs())
    }

    /// Raises a single-term polynomial to a positive power.
    fn pow_term(&self, k: &Natural) -> Result<Self, PolyError> {
        debug_assert_eq!(self.len(), 1);
        let (m, c) = &self.terms()[0];

        let m = m.pow(k);
        self.context().check_monomial(&m)?;

        let c = if c.is_pm1() {
            if c.is_negative() && k.bit(0) {
                -Integer::one()
            } else {
                Integer::one()
            }
        } else {
            // Only the coefficient power overflows here; the monomial is fine
            let k = usize::try_from(k.clone()).map_err(|_| PolyError::ExponentTooLarge { terms: 1 })?;
            c.pow(k)
        };

        Ok(Self::from_sorted(self.context(), vec![(m, c)]))
    }

    /// Rejects powers whose degree in some variable would exceed the
    /// context's exponent bound.
    fn check_power_fits(&self, k: u64) -> Result<(), PolyError> {
        let Some(limit) = self.context().max_exponent_bits() else {
            return Ok(());
        };
        let k = Natural::from(k);
        for v in 0..self.context().num_vars() {
            let Some(d) = self.degree_in(v) else { continue };
            if d == Natural::ZERO {
                continue;
            }
            let bits = (d * &k).bit_len() as u64;
            if bits > limit {
                return Err(PolyError::ExponentOverflow { bits, limit });
            }
        }
        Ok(())
    }
}
