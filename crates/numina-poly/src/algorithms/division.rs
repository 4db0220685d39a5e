//! Exact division of multivariate polynomials.

use num_traits::Zero;
use numina_integers::Integer;

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::mpoly::MPoly;

impl MPoly {
    /// Divides by `divisor`, failing unless the division is exact.
    ///
    /// Repeatedly cancels the leading term of the remainder against the
    /// leading term of the divisor; any leading term that is not divisible
    /// proves the division inexact.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] for a zero divisor and
    /// [`PolyError::InexactDivision`] if `divisor` does not divide `self`.
    pub fn divexact(&self, divisor: &Self) -> Result<Self, PolyError> {
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(self.clone());
        }
        if let [(m, c)] = divisor.terms() {
            return self.divexact_term(m, c);
        }

        let (dm, dc) = &divisor.terms()[0];
        let mut rem = self.clone();
        let mut quotient = Vec::new();

        while let Some((rm, rc)) = rem.terms().first() {
            let qm = rm.div(dm).ok_or(PolyError::InexactDivision)?;
            let qc = rc.div_exact(dc).ok_or(PolyError::InexactDivision)?;
            rem = rem.sub(&divisor.mul_term_unchecked(&qm, &qc));
            quotient.push((qm, qc));
        }

        Ok(Self::from_sorted(self.context(), quotient))
    }

    /// Divides every coefficient by `c`.
    ///
    /// # Errors
    ///
    /// Fails if `c` is zero or does not divide every coefficient.
    pub fn divexact_integer(&self, c: &Integer) -> Result<Self, PolyError> {
        self.divexact_term(&Monomial::one(self.context().num_vars()), c)
    }

    /// Divides every monomial by `m`.
    ///
    /// # Errors
    ///
    /// Fails if `m` does not divide every monomial of `self`.
    pub fn divexact_monomial(&self, m: &Monomial) -> Result<Self, PolyError> {
        self.divexact_term(m, &Integer::from(1))
    }

    fn divexact_term(&self, m: &Monomial, c: &Integer) -> Result<Self, PolyError> {
        if c.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        let terms = self
            .terms()
            .iter()
            .map(|(tm, tc)| {
                let qm = tm.div(m).ok_or(PolyError::InexactDivision)?;
                let qc = tc.div_exact(c).ok_or(PolyError::InexactDivision)?;
                Ok((qm, qc))
            })
            .collect::<Result<Vec<_>, PolyError>>()?;
        Ok(Self::from_sorted(self.context(), terms))
    }

    /// Returns true if `self` divides `other`.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        other.divexact(self).is_ok()
    }
}
