//! Multivariate polynomial GCD over Z.
//!
//! The algorithm is the classical recursive one:
//! 1. Split off the integer content and the monomial content
//! 2. Variables present in only one argument cannot occur in the GCD, so
//!    that argument is replaced by its content with respect to them
//! 3. Otherwise pick a main variable, split both arguments into content
//!    (a GCD over the remaining variables) and primitive part, and run a
//!    primitive pseudo-remainder sequence on the primitive parts
//!
//! Results are normalized to a positive leading coefficient.

use std::sync::Arc;

use num_traits::One;
use numina_integers::{Integer, Natural};
use rustc_hash::FxHashMap;

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::mpoly::MPoly;

/// Computes the GCD of two polynomials.
///
/// The result has a positive leading coefficient; `gcd(0, 0) = 0`.
///
/// # Errors
///
/// Only fails if an internal exact division turns out inexact, which
/// indicates inconsistent inputs (e.g. non-canonical polynomials).
pub fn gcd(a: &MPoly, b: &MPoly) -> Result<MPoly, PolyError> {
    if a.is_zero() {
        return Ok(b.clone().with_positive_leading_coeff());
    }
    if b.is_zero() {
        return Ok(a.clone().with_positive_leading_coeff());
    }
    let ctx = a.context();

    let ca = a.content().abs();
    let cb = b.content().abs();
    let ma = a.monomial_content();
    let mb = b.monomial_content();

    let a1 = a.divexact_integer(&ca)?.divexact_monomial(&ma)?;
    let b1 = b.divexact_integer(&cb)?.divexact_monomial(&mb)?;

    let core = if a1.is_constant() || b1.is_constant() {
        MPoly::one(ctx)
    } else if a1 == b1 || a1 == b1.neg() {
        a1
    } else {
        gcd_recursive(&a1, &b1)?
    };

    Ok(core
        .mul_term_unchecked(&ma.gcd(&mb), &ca.gcd(&cb))
        .with_positive_leading_coeff())
}

impl MPoly {
    /// Computes the GCD with another polynomial.
    ///
    /// # Errors
    ///
    /// See [`gcd`].
    pub fn gcd(&self, other: &Self) -> Result<Self, PolyError> {
        gcd(self, other)
    }
}

fn gcd_recursive(a: &MPoly, b: &MPoly) -> Result<MPoly, PolyError> {
    let ctx = a.context();
    if a.is_constant() || b.is_constant() {
        return Ok(MPoly::constant(ctx, a.content().gcd(&b.content())));
    }

    let in_a = present_vars(a);
    let in_b = present_vars(b);
    let n = ctx.num_vars();

    if let Some(v) = (0..n).find(|&v| in_a[v] && !in_b[v]) {
        return gcd_recursive(&content_in(a, v)?, b);
    }
    if let Some(v) = (0..n).find(|&v| in_b[v] && !in_a[v]) {
        return gcd_recursive(a, &content_in(b, v)?);
    }
    let Some(v) = (0..n).find(|&v| in_a[v]) else {
        return Ok(MPoly::constant(ctx, a.content().gcd(&b.content())));
    };

    let ca = content_in(a, v)?;
    let cb = content_in(b, v)?;
    let content = gcd_recursive(&ca, &cb)?;

    let pa = a.divexact(&ca)?;
    let pb = b.divexact(&cb)?;
    let primitive = primitive_prs(pa, pb, v)?;

    Ok(primitive.mul_unchecked(&content).with_positive_leading_coeff())
}

/// Runs the primitive PRS on polynomials primitive with respect to `v`.
fn primitive_prs(a: MPoly, b: MPoly, v: usize) -> Result<MPoly, PolyError> {
    let ctx = Arc::clone(a.context());
    let (mut f, mut g) = if a.degree_in(v) >= b.degree_in(v) { (a, b) } else { (b, a) };
    let mut steps = 0usize;

    loop {
        let r = pseudo_remainder(&f, &g, v);
        steps += 1;
        if r.is_zero() {
            tracing::trace!(var = v, steps, "primitive PRS terminated with a common factor");
            return Ok(g.with_positive_leading_coeff());
        }
        if r.degree_in(v) == Some(Natural::ZERO) {
            tracing::trace!(var = v, steps, "primitive PRS proved coprimality");
            return Ok(MPoly::one(&ctx));
        }
        let cr = content_in(&r, v)?;
        f = g;
        g = r.divexact(&cr)?;
    }
}

/// Pseudo-remainder of `f` by `g` with respect to `v`.
///
/// Integer content is removed after every elimination step; this only
/// changes the result by a constant factor, which the caller discards
/// when taking the primitive part.
fn pseudo_remainder(f: &MPoly, g: &MPoly, v: usize) -> MPoly {
    let num_vars = f.context().num_vars();
    let dg = g.degree_in(v).unwrap_or(Natural::ZERO);
    let lg = coefficient_in(g, v, &dg);
    let one = Integer::one();

    let mut r = f.clone();
    while let Some(dr) = r.degree_in(v) {
        if dr < dg {
            break;
        }
        let lr = coefficient_in(&r, v, &dr);
        let shift = var_power(v, dr - &dg, num_vars);
        let elim = g.mul_unchecked(&lr).mul_term_unchecked(&shift, &one);
        r = r.mul_unchecked(&lg).sub(&elim).primitive_part();
    }
    r
}

/// GCD of the coefficients of `p` viewed as a polynomial in `v`.
fn content_in(p: &MPoly, v: usize) -> Result<MPoly, PolyError> {
    let mut coeffs = coefficients_in(p, v).into_iter();
    let Some(mut content) = coeffs.next() else {
        return Ok(MPoly::zero(p.context()));
    };
    for c in coeffs {
        if content.is_one() {
            break;
        }
        content = gcd_recursive(&content, &c)?;
    }
    Ok(content.with_positive_leading_coeff())
}

/// Splits `p` into its coefficients with respect to `v` (which no longer
/// contain `v`).
fn coefficients_in(p: &MPoly, v: usize) -> Vec<MPoly> {
    let mut groups: FxHashMap<Natural, Vec<(Monomial, Integer)>> = FxHashMap::default();
    for (m, c) in p.terms() {
        groups
            .entry(m.exponent(v).clone())
            .or_default()
            .push((without_var(m, v), c.clone()));
    }
    groups
        .into_values()
        .map(|terms| MPoly::new(p.context(), terms))
        .collect()
}

/// Coefficient of `v^d` in `p`.
fn coefficient_in(p: &MPoly, v: usize, d: &Natural) -> MPoly {
    let terms = p
        .terms()
        .iter()
        .filter(|(m, _)| m.exponent(v) == d)
        .map(|(m, c)| (without_var(m, v), c.clone()))
        .collect();
    MPoly::new(p.context(), terms)
}

fn present_vars(p: &MPoly) -> Vec<bool> {
    let mut present = vec![false; p.context().num_vars()];
    for (m, _) in p.terms() {
        for (slot, e) in present.iter_mut().zip(m.exponents()) {
            *slot |= *e != Natural::ZERO;
        }
    }
    present
}

fn without_var(m: &Monomial, v: usize) -> Monomial {
    let mut exps = m.exponents().to_vec();
    exps[v] = Natural::ZERO;
    Monomial::from_naturals(exps)
}

fn var_power(v: usize, e: Natural, num_vars: usize) -> Monomial {
    let mut exps = vec![Natural::ZERO; num_vars];
    exps[v] = e;
    Monomial::from_naturals(exps)
}

/// Returns true if `a` and `b` have no common factor of positive degree
/// and no common integer factor.
///
/// # Errors
///
/// See [`gcd`].
pub fn are_coprime(a: &MPoly, b: &MPoly) -> Result<bool, PolyError> {
    Ok(gcd(a, b)?.is_one())
}
