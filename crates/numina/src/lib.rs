//! # Numina
//!
//! Exact arithmetic on multivariate rational functions over Z.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: integer coefficients and monomial exponents
//! - **Sparse Polynomials**: canonical term order under lex, grlex or grevlex
//! - **Multivariate GCD**: recursive primitive PRS with content splitting
//! - **Rational Functions**: always in lowest terms with a normalized sign
//! - **Exact Powers**: native and arbitrary precision exponents with
//!   detectable failure on undefined or unrepresentable results
//!
//! ## Quick Start
//!
//! ```rust
//! use numina::prelude::*;
//!
//! let ctx = Context::new(2, MonomialOrder::Lex);
//! let x = RationalFunction::gen(&ctx, 0);
//! let y = RationalFunction::gen(&ctx, 1);
//!
//! let f = x.div(&y).unwrap().pow(-3).unwrap();
//! assert_eq!(f.to_string(), "(y^3)/(x^3)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numina_integers as integers;
pub use numina_poly as poly;
pub use numina_rational_func as rational_func;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numina_integers::{Integer, Natural};
    pub use numina_poly::{Context, ContextBuilder, MPoly, Monomial, MonomialOrder, PolyError};
    pub use numina_rational_func::{Exponent, FracError, RationalFunction};
}
