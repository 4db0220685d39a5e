//! Sparse multivariate polynomials over Z.
//!
//! Terms are kept strictly descending in the context's monomial order,
//! with no zero coefficients, so structural equality is mathematical
//! equality and the leading term is always `terms[0]`.

use std::cmp::Ordering;
use std::sync::Arc;

use num_traits::{One, Zero};
use numina_integers::{Integer, Natural};
use rustc_hash::FxHashMap;

use crate::context::Context;
use crate::error::PolyError;
use crate::monomial::Monomial;

/// A sparse multivariate polynomial with integer coefficients.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MPoly {
    /// Terms in strictly descending monomial order.
    terms: Vec<(Monomial, Integer)>,
    ctx: Arc<Context>,
}

impl MPoly {
    /// Creates a polynomial from arbitrary terms.
    ///
    /// Terms are sorted, like terms are combined and zero terms dropped.
    ///
    /// # Panics
    ///
    /// Panics if a monomial does not have one exponent per context variable.
    #[must_use]
    pub fn new(ctx: &Arc<Context>, terms: Vec<(Monomial, Integer)>) -> Self {
        for (m, _) in &terms {
            assert_eq!(m.num_vars(), ctx.num_vars(), "monomial width does not match context");
        }
        let mut poly = Self {
            terms,
            ctx: Arc::clone(ctx),
        };
        poly.normalize();
        poly
    }

    /// Builds a polynomial from `(coefficient, exponents)` pairs.
    #[must_use]
    pub fn from_i64_terms(ctx: &Arc<Context>, terms: &[(i64, &[u64])]) -> Self {
        let terms = terms
            .iter()
            .map(|&(c, exps)| (Monomial::from_exponents(exps), Integer::new(c)))
            .collect();
        Self::new(ctx, terms)
    }

    /// Wraps terms that are already canonical.
    pub(crate) fn from_sorted(ctx: &Arc<Context>, terms: Vec<(Monomial, Integer)>) -> Self {
        let poly = Self {
            terms,
            ctx: Arc::clone(ctx),
        };
        debug_assert!(poly.is_canonical());
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(ctx: &Arc<Context>) -> Self {
        Self {
            terms: Vec::new(),
            ctx: Arc::clone(ctx),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(ctx: &Arc<Context>) -> Self {
        Self::constant(ctx, Integer::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(ctx: &Arc<Context>, c: Integer) -> Self {
        if c.is_zero() {
            return Self::zero(ctx);
        }
        Self {
            terms: vec![(Monomial::one(ctx.num_vars()), c)],
            ctx: Arc::clone(ctx),
        }
    }

    /// Creates the variable x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a variable of the context.
    #[must_use]
    pub fn var(ctx: &Arc<Context>, i: usize) -> Self {
        Self {
            terms: vec![(Monomial::var(i, ctx.num_vars()), Integer::one())],
            ctx: Arc::clone(ctx),
        }
    }

    /// Creates the single term `c * m`.
    #[must_use]
    pub fn term(ctx: &Arc<Context>, m: Monomial, c: Integer) -> Self {
        Self::new(ctx, vec![(m, c)])
    }

    /// Returns the shared context.
    #[must_use]
    pub fn context(&self) -> &Arc<Context> {
        &self.ctx
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].0.is_one() && self.terms[0].1.is_one()
    }

    /// Returns true if the polynomial has no variables (including zero).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty() || (self.terms.len() == 1 && self.terms[0].0.is_one())
    }

    /// Returns true if this is a single term with coefficient `±1`.
    #[must_use]
    pub fn is_unit_term(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].1.is_pm1()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms in descending order.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, Integer)] {
        &self.terms
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&Integer> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Returns the sign of the leading coefficient (0 for zero).
    #[must_use]
    pub fn leading_sign(&self) -> i8 {
        self.leading_coeff().map_or(0, Integer::signum)
    }

    /// Returns the degree in variable `v`, or `None` for zero.
    #[must_use]
    pub fn degree_in(&self, v: usize) -> Option<Natural> {
        self.terms.iter().map(|(m, _)| m.exponent(v).clone()).max()
    }

    /// Computes the total degree, or `None` for zero.
    #[must_use]
    pub fn total_degree(&self) -> Option<Natural> {
        self.terms.iter().map(|(m, _)| m.total_degree()).max()
    }

    /// Checks the structural invariants.
    ///
    /// Terms must be strictly descending, coefficients non-zero, and every
    /// monomial must have the context width and respect its exponent bound.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        let order = self.ctx.order();
        let widths_ok = self.terms.iter().all(|(m, c)| {
            m.num_vars() == self.ctx.num_vars() && !c.is_zero() && self.ctx.check_monomial(m).is_ok()
        });
        widths_ok
            && self
                .terms
                .windows(2)
                .all(|w| order.compare(&w[0].0, &w[1].0) == Ordering::Greater)
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        let order = self.ctx.order();
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut merged: Vec<(Monomial, Integer)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            if let Some(last) = merged.last_mut() {
                if last.0 == m {
                    last.1 += c;
                    continue;
                }
                if last.1.is_zero() {
                    merged.pop();
                }
            }
            merged.push((m, c));
        }
        if merged.last().is_some_and(|last| last.1.is_zero()) {
            merged.pop();
        }
        self.terms = merged;
    }

    fn assert_same_context(&self, other: &Self) {
        assert!(
            Arc::ptr_eq(&self.ctx, &other.ctx) || self.ctx == other.ctx,
            "polynomials belong to different contexts"
        );
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c)).collect(),
            ctx: Arc::clone(&self.ctx),
        }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.merge(other, false)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.merge(other, true)
    }

    /// Merges two sorted term lists.
    fn merge(&self, other: &Self, negate_other: bool) -> Self {
        self.assert_same_context(other);
        let order = self.ctx.order();
        let rhs = |c: &Integer| if negate_other { -c } else { c.clone() };

        let mut terms = Vec::with_capacity(self.len() + other.len());
        let mut i = 0;
        let mut j = 0;
        while i < self.terms.len() && j < other.terms.len() {
            let (ma, ca) = &self.terms[i];
            let (mb, cb) = &other.terms[j];
            match order.compare(ma, mb) {
                Ordering::Greater => {
                    terms.push((ma.clone(), ca.clone()));
                    i += 1;
                }
                Ordering::Less => {
                    terms.push((mb.clone(), rhs(cb)));
                    j += 1;
                }
                Ordering::Equal => {
                    let c = ca + &rhs(cb);
                    if !c.is_zero() {
                        terms.push((ma.clone(), c));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        terms.extend(self.terms[i..].iter().cloned());
        terms.extend(other.terms[j..].iter().map(|(m, c)| (m.clone(), rhs(c))));

        Self::from_sorted(&self.ctx, terms)
    }

    /// Multiplies by an integer scalar.
    #[must_use]
    pub fn scale(&self, c: &Integer) -> Self {
        if c.is_zero() {
            return Self::zero(&self.ctx);
        }
        Self {
            terms: self.terms.iter().map(|(m, x)| (m.clone(), x * c)).collect(),
            ctx: Arc::clone(&self.ctx),
        }
    }

    /// Multiplies by the term `c * m` without checking exponent bounds.
    pub(crate) fn mul_term_unchecked(&self, m: &Monomial, c: &Integer) -> Self {
        if c.is_zero() {
            return Self::zero(&self.ctx);
        }
        // Monomial orders are compatible with multiplication, so the
        // term order is preserved.
        Self {
            terms: self.terms.iter().map(|(m2, c2)| (m.mul(m2), c2 * c)).collect(),
            ctx: Arc::clone(&self.ctx),
        }
    }

    /// Multiplies two polynomials without checking exponent bounds.
    pub(crate) fn mul_unchecked(&self, other: &Self) -> Self {
        self.assert_same_context(other);

        if self.is_zero() || other.is_zero() {
            return Self::zero(&self.ctx);
        }
        if other.len() == 1 {
            let (m, c) = &other.terms[0];
            return self.mul_term_unchecked(m, c);
        }
        if self.len() == 1 {
            let (m, c) = &self.terms[0];
            return other.mul_term_unchecked(m, c);
        }

        let mut acc: FxHashMap<Monomial, Integer> = FxHashMap::default();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                *acc.entry(m1.mul(m2)).or_insert_with(Integer::zero) += c1 * c2;
            }
        }

        let mut terms: Vec<(Monomial, Integer)> = acc.into_iter().filter(|(_, c)| !c.is_zero()).collect();
        let order = self.ctx.order();
        terms.sort_by(|a, b| order.compare(&b.0, &a.0));
        Self::from_sorted(&self.ctx, terms)
    }

    /// Multiplies two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if the product is not
    /// representable in the context.
    pub fn mul(&self, other: &Self) -> Result<Self, PolyError> {
        let product = self.mul_unchecked(other);
        product.check_exponents()?;
        Ok(product)
    }

    /// Checks every monomial against the context bound.
    pub(crate) fn check_exponents(&self) -> Result<(), PolyError> {
        if self.ctx.max_exponent_bits().is_none() {
            return Ok(());
        }
        self.terms.iter().try_for_each(|(m, _)| self.ctx.check_monomial(m))
    }

    /// Returns the integer content: the gcd of all coefficients, carrying
    /// the sign of the leading coefficient. Zero has content zero.
    #[must_use]
    pub fn content(&self) -> Integer {
        let mut g = Integer::zero();
        for (_, c) in &self.terms {
            g = g.gcd(c);
            if g.is_one() {
                break;
            }
        }
        if self.leading_sign() < 0 {
            -g
        } else {
            g
        }
    }

    /// Divides every coefficient by the integer content.
    ///
    /// The result has a positive leading coefficient.
    #[must_use]
    pub fn primitive_part(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let content = self.content();
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), c / &content)).collect(),
            ctx: Arc::clone(&self.ctx),
        }
    }

    /// Returns the gcd of all monomials (componentwise minimum exponent).
    #[must_use]
    pub fn monomial_content(&self) -> Monomial {
        let mut terms = self.terms.iter();
        let Some((first, _)) = terms.next() else {
            return Monomial::one(self.ctx.num_vars());
        };
        terms.fold(first.clone(), |acc, (m, _)| acc.gcd(m))
    }

    /// Returns `-self` if the leading coefficient is negative.
    #[must_use]
    pub fn with_positive_leading_coeff(self) -> Self {
        if self.leading_sign() < 0 {
            self.neg()
        } else {
            self
        }
    }
}

impl std::fmt::Display for MPoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let names = self.ctx.names();
        for (i, (m, c)) in self.terms.iter().enumerate() {
            let (sign, abs) = if c.is_negative() { ("-", c.abs()) } else { ("+", c.clone()) };
            if i == 0 {
                if sign == "-" {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {sign} ")?;
            }

            if m.is_one() {
                write!(f, "{abs}")?;
            } else if abs.is_one() {
                write!(f, "{}", m.format_with(names))?;
            } else {
                write!(f, "{abs}*{}", m.format_with(names))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::MonomialOrder;

    fn ctx2() -> Arc<Context> {
        Context::new(2, MonomialOrder::Lex)
    }

    #[test]
    fn test_normalize_combines_and_drops() {
        let ctx = ctx2();
        let p = MPoly::from_i64_terms(&ctx, &[(1, &[0, 1]), (2, &[1, 0]), (-1, &[0, 1]), (3, &[0, 0])]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.to_string(), "2*x + 3");
        assert!(p.is_canonical());
    }

    #[test]
    fn test_add_sub() {
        let ctx = ctx2();
        let x = MPoly::var(&ctx, 0);
        let y = MPoly::var(&ctx, 1);

        let sum = x.add(&y);
        assert_eq!(sum.len(), 2);
        assert!(sum.sub(&x).sub(&y).is_zero());
    }

    #[test]
    fn test_mul() {
        let ctx = ctx2();
        let x = MPoly::var(&ctx, 0);
        let one = MPoly::one(&ctx);

        // (x + 1)^2 = x^2 + 2x + 1
        let xp1 = x.add(&one);
        let sq = xp1.mul(&xp1).unwrap();
        assert_eq!(sq.to_string(), "x^2 + 2*x + 1");
        assert!(sq.is_canonical());
    }

    #[test]
    fn test_mul_respects_exponent_bound() {
        let ctx = Context::builder(1).max_exponent_bits(3).build();
        let x4 = MPoly::from_i64_terms(&ctx, &[(1, &[4])]);
        assert_eq!(
            x4.mul(&x4),
            Err(PolyError::ExponentOverflow { bits: 4, limit: 3 })
        );
    }

    #[test]
    fn test_content_and_primitive_part() {
        let ctx = ctx2();
        let p = MPoly::from_i64_terms(&ctx, &[(-6, &[1, 0]), (4, &[0, 1])]);
        assert_eq!(p.content(), Integer::new(-2));
        assert_eq!(p.primitive_part().to_string(), "3*x - 2*y");
    }

    #[test]
    fn test_monomial_content() {
        let ctx = ctx2();
        let p = MPoly::from_i64_terms(&ctx, &[(1, &[3, 1]), (1, &[1, 2])]);
        assert_eq!(p.monomial_content(), Monomial::from_exponents(&[1, 1]));
    }

    #[test]
    fn test_leading_term_follows_order() {
        let grevlex = Context::new(2, MonomialOrder::Grevlex);
        let p = MPoly::from_i64_terms(&grevlex, &[(-1, &[0, 3]), (5, &[2, 0])]);
        assert_eq!(p.leading_sign(), -1);

        let lex = ctx2();
        let q = MPoly::from_i64_terms(&lex, &[(-1, &[0, 3]), (5, &[2, 0])]);
        assert_eq!(q.leading_sign(), 1);
    }
}
