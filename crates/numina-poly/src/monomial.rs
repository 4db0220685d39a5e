//! Exponent vectors for multivariate polynomials.
//!
//! Exponents are arbitrary precision naturals so that monomials such as
//! `x^(2^100)` stay representable. Small variable counts are stored
//! inline without a heap allocation for the vector itself.

use std::cmp::Ordering;

use dashu::base::BitTest;
use numina_integers::Natural;
use smallvec::SmallVec;

/// An exponent vector, one entry per context variable.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(SmallVec<[Natural; 4]>);

impl Monomial {
    /// Creates the monomial 1 (all exponents zero).
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self(std::iter::repeat(Natural::ZERO).take(num_vars).collect())
    }

    /// Creates the monomial x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index {i} out of range for {num_vars} variables");
        let mut m = Self::one(num_vars);
        m.0[i] = Natural::ONE;
        m
    }

    /// Creates a monomial from machine-word exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u64]) -> Self {
        Self(exps.iter().map(|&e| Natural::from(e)).collect())
    }

    /// Creates a monomial from arbitrary precision exponents.
    #[must_use]
    pub fn from_naturals(exps: Vec<Natural>) -> Self {
        Self(exps.into())
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Returns the exponent of variable i.
    #[must_use]
    pub fn exponent(&self, i: usize) -> &Natural {
        &self.0[i]
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[Natural] {
        &self.0
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.iter().all(|e| *e == Natural::ZERO)
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars(), other.num_vars());
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Divides by another monomial if possible.
    ///
    /// Returns `Some(quotient)` if self is divisible by other.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !other.divides(self) {
            return None;
        }
        Some(Self(self.0.iter().zip(&other.0).map(|(a, b)| a - b).collect()))
    }

    /// Returns true if self divides other.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a <= b)
    }

    /// Raises the monomial to a power (scales every exponent).
    #[must_use]
    pub fn pow(&self, k: &Natural) -> Self {
        Self(self.0.iter().map(|e| e * k).collect())
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> Natural {
        self.0.iter().fold(Natural::ZERO, |acc, e| acc + e)
    }

    /// Computes the least common multiple of two monomials.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a.max(b).clone()).collect())
    }

    /// Computes the greatest common divisor of two monomials.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a.min(b).clone()).collect())
    }

    /// Returns the bit length of the largest exponent.
    #[must_use]
    pub fn max_exponent_bits(&self) -> usize {
        self.0.iter().map(|e| e.bit_len()).max().unwrap_or(0)
    }

    /// Formats the monomial with the given variable names.
    #[must_use]
    pub fn format_with(&self, names: &[String]) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .zip(names)
            .filter(|(e, _)| **e != Natural::ZERO)
            .map(|(e, name)| {
                if *e == Natural::ONE {
                    name.clone()
                } else {
                    format!("{name}^{e}")
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

/// Compares two monomials lexicographically.
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    a.0.iter().cmp(b.0.iter())
}

/// Compares two monomials by graded reverse lexicographic order.
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Smaller exponent in the last differing variable wins
    for (ea, eb) in a.0.iter().zip(&b.0).rev() {
        match eb.cmp(ea) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares two monomials by graded lexicographic order.
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => cmp_lex(a, b),
        ord => ord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let x = Monomial::var(0, 3);
        let y = Monomial::var(1, 3);

        assert_eq!(*x.exponent(0), Natural::ONE);
        assert_eq!(*x.exponent(1), Natural::ZERO);
        assert_eq!(*y.exponent(1), Natural::ONE);
        assert!(Monomial::one(3).is_one());
    }

    #[test]
    fn test_mul_div() {
        let x2y = Monomial::from_exponents(&[2, 1, 0]);
        let xy = Monomial::from_exponents(&[1, 1, 0]);
        let x = Monomial::var(0, 3);

        assert_eq!(x.mul(&xy), x2y);
        assert_eq!(x2y.div(&xy), Some(x));
        assert_eq!(xy.div(&x2y), None);
    }

    #[test]
    fn test_gcd_lcm() {
        let a = Monomial::from_exponents(&[3, 0, 2]);
        let b = Monomial::from_exponents(&[1, 4, 5]);
        assert_eq!(a.gcd(&b), Monomial::from_exponents(&[1, 0, 2]));
        assert_eq!(a.lcm(&b), Monomial::from_exponents(&[3, 4, 5]));
    }

    #[test]
    fn test_huge_pow() {
        let x = Monomial::var(0, 2);
        let k = Natural::ONE << 100;
        let big = x.pow(&k);
        assert_eq!(*big.exponent(0), k);
        assert_eq!(big.max_exponent_bits(), 101);
    }

    #[test]
    fn test_grevlex_order() {
        let x2 = Monomial::from_exponents(&[2, 0]);
        let xy = Monomial::from_exponents(&[1, 1]);
        let y2 = Monomial::from_exponents(&[0, 2]);

        assert_eq!(cmp_grevlex(&x2, &xy), Ordering::Greater);
        assert_eq!(cmp_grevlex(&xy, &y2), Ordering::Greater);
    }

    #[test]
    fn test_format() {
        let names: Vec<String> = ["x", "y"].iter().map(ToString::to_string).collect();
        assert_eq!(Monomial::from_exponents(&[2, 1]).format_with(&names), "x^2*y");
        assert_eq!(Monomial::one(2).format_with(&names), "1");
    }
}
