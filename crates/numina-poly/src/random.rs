//! Random polynomial generation.
//!
//! Generators take the RNG as an argument so that tests can drive them
//! from a seeded ChaCha stream and reproduce failures.

use std::sync::Arc;

use numina_integers::Integer;
use rand::Rng;

use crate::context::Context;
use crate::monomial::Monomial;
use crate::mpoly::MPoly;

/// Shape parameters for [`MPoly::random`].
#[derive(Clone, Copy, Debug)]
pub struct RandomPolyParams {
    /// Maximum number of generated terms (before merging).
    pub max_terms: usize,
    /// Maximum coefficient bit length.
    pub coeff_bits: usize,
    /// Every exponent is drawn from `0..exp_bound`.
    pub exp_bound: u64,
}

impl Default for RandomPolyParams {
    fn default() -> Self {
        Self {
            max_terms: 4,
            coeff_bits: 8,
            exp_bound: 3,
        }
    }
}

impl MPoly {
    /// Draws a random canonical polynomial.
    ///
    /// The term count is uniform in `0..=max_terms`; like terms are merged,
    /// so the result may have fewer terms (or be zero).
    pub fn random<R: Rng>(rng: &mut R, ctx: &Arc<Context>, params: RandomPolyParams) -> Self {
        let len = rng.gen_range(0..=params.max_terms);
        let terms = (0..len)
            .map(|_| {
                let m = random_monomial(rng, ctx.num_vars(), params.exp_bound);
                (m, Integer::random(rng, params.coeff_bits))
            })
            .collect();
        Self::new(ctx, terms)
    }

    /// Draws a random non-zero canonical polynomial.
    ///
    /// Falls back to a random non-zero constant if all drawn terms cancel.
    pub fn random_not_zero<R: Rng>(rng: &mut R, ctx: &Arc<Context>, params: RandomPolyParams) -> Self {
        let p = Self::random(rng, ctx, params);
        if p.is_zero() {
            Self::constant(ctx, Integer::random_not_zero(rng, params.coeff_bits))
        } else {
            p
        }
    }
}

fn random_monomial<R: Rng>(rng: &mut R, num_vars: usize, exp_bound: u64) -> Monomial {
    let exps: Vec<u64> = (0..num_vars)
        .map(|_| if exp_bound == 0 { 0 } else { rng.gen_range(0..exp_bound) })
        .collect();
    Monomial::from_exponents(&exps)
}
