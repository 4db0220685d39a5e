//! Polynomial ring contexts.
//!
//! A context describes the ring Z[x_0, ..., x_{n-1}]: the number of
//! variables, the monomial order, display names, and an optional bound
//! on exponent size. Contexts are immutable and shared through `Arc`.

use std::sync::Arc;

use rand::Rng;

use crate::error::PolyError;
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

const DEFAULT_NAMES: [&str; 6] = ["x", "y", "z", "w", "u", "v"];

/// Shared description of a multivariate polynomial ring over Z.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Context {
    num_vars: usize,
    order: MonomialOrder,
    names: Vec<String>,
    max_exponent_bits: Option<u64>,
}

impl Context {
    /// Creates a shared context with default names and no exponent bound.
    #[must_use]
    pub fn new(num_vars: usize, order: MonomialOrder) -> Arc<Self> {
        ContextBuilder::new(num_vars).order(order).build()
    }

    /// Starts building a context with `num_vars` variables.
    #[must_use]
    pub fn builder(num_vars: usize) -> ContextBuilder {
        ContextBuilder::new(num_vars)
    }

    /// Creates a context with a random variable count in `0..=max_vars`
    /// and a random ordering.
    pub fn random<R: Rng>(rng: &mut R, max_vars: usize) -> Arc<Self> {
        let num_vars = rng.gen_range(0..=max_vars);
        Self::new(num_vars, MonomialOrder::random(rng))
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the variable names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the exponent bit bound, if any.
    #[must_use]
    pub fn max_exponent_bits(&self) -> Option<u64> {
        self.max_exponent_bits
    }

    /// Checks that a monomial is representable in this context.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if an exponent needs more
    /// bits than the context allows.
    pub fn check_monomial(&self, m: &Monomial) -> Result<(), PolyError> {
        let Some(limit) = self.max_exponent_bits else {
            return Ok(());
        };
        let bits = m.max_exponent_bits() as u64;
        if bits > limit {
            return Err(PolyError::ExponentOverflow { bits, limit });
        }
        Ok(())
    }
}

/// Builder for [`Context`].
#[derive(Clone, Debug)]
pub struct ContextBuilder {
    num_vars: usize,
    order: MonomialOrder,
    names: Option<Vec<String>>,
    max_exponent_bits: Option<u64>,
}

impl ContextBuilder {
    /// Creates a builder for `num_vars` variables in lex order.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            order: MonomialOrder::default(),
            names: None,
            max_exponent_bits: None,
        }
    }

    /// Sets the monomial ordering.
    #[must_use]
    pub fn order(mut self, order: MonomialOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the variable names.
    ///
    /// # Panics
    ///
    /// Panics if the number of names differs from the variable count.
    #[must_use]
    pub fn names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert_eq!(names.len(), self.num_vars, "expected {} variable names", self.num_vars);
        self.names = Some(names);
        self
    }

    /// Bounds the bit length of every exponent.
    #[must_use]
    pub fn max_exponent_bits(mut self, bits: u64) -> Self {
        self.max_exponent_bits = Some(bits);
        self
    }

    /// Finishes the context.
    #[must_use]
    pub fn build(self) -> Arc<Context> {
        let num_vars = self.num_vars;
        let names = self.names.unwrap_or_else(|| {
            if num_vars <= DEFAULT_NAMES.len() {
                DEFAULT_NAMES[..num_vars].iter().map(ToString::to_string).collect()
            } else {
                (0..num_vars).map(|i| format!("x{i}")).collect()
            }
        });

        Arc::new(Context {
            num_vars,
            order: self.order,
            names,
            max_exponent_bits: self.max_exponent_bits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let ctx = Context::new(3, MonomialOrder::Grevlex);
        assert_eq!(ctx.names(), ["x", "y", "z"]);

        let wide = Context::new(8, MonomialOrder::Lex);
        assert_eq!(wide.names()[7], "x7");
    }

    #[test]
    fn test_exponent_bound() {
        let ctx = Context::builder(1).max_exponent_bits(8).build();
        assert!(ctx.check_monomial(&Monomial::from_exponents(&[255])).is_ok());
        assert_eq!(
            ctx.check_monomial(&Monomial::from_exponents(&[256])),
            Err(PolyError::ExponentOverflow { bits: 9, limit: 8 })
        );
    }

    #[test]
    fn test_custom_names() {
        let ctx = Context::builder(2).names(["s", "t"]).order(MonomialOrder::Grlex).build();
        assert_eq!(ctx.names(), ["s", "t"]);
        assert_eq!(ctx.order(), MonomialOrder::Grlex);
    }
}
