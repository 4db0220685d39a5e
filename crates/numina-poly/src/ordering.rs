//! Monomial orderings.
//!
//! The ordering fixes which term of a polynomial is leading, and with it
//! the sign convention of canonical rational functions.

use std::cmp::Ordering;

use rand::Rng;

use crate::monomial::{cmp_grevlex, cmp_grlex, cmp_lex, Monomial};

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    #[default]
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then uses reverse lex (last variable first)
    /// with the comparison reversed.
    Grevlex,
}

impl MonomialOrder {
    /// All supported orderings.
    pub const ALL: [MonomialOrder; 3] = [MonomialOrder::Lex, MonomialOrder::Grlex, MonomialOrder::Grevlex];

    /// Compares two monomials according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Grlex => cmp_grlex(a, b),
            MonomialOrder::Grevlex => cmp_grevlex(a, b),
        }
    }

    /// Picks an ordering uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
