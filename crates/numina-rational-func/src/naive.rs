//! Reference power by repeated multiplication, used to cross-check
//! [`RationalFunction::pow`] in tests.

use crate::error::FracError;
use crate::RationalFunction;

/// Computes `b^n` with `|n| - 1` canonicalizing multiplications.
///
/// Zero raised to any non-zero power is zero here; callers check the
/// negative case separately.
pub(crate) fn pow_naive(b: &RationalFunction, n: i64) -> Result<RationalFunction, FracError> {
    if n == 0 {
        return Ok(RationalFunction::one(b.context()));
    }
    if b.is_zero() {
        return Ok(b.clone());
    }
    match n {
        1 => return Ok(b.clone()),
        -1 => return b.inv(),
        _ => {}
    }

    let mut acc = b.clone();
    for _ in 1..n.unsigned_abs() {
        acc = acc.mul(b)?;
    }
    if n < 0 {
        acc = acc.inv()?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use numina_poly::{Context, MPoly, MonomialOrder};

    use super::*;

    #[test]
    fn test_small_powers() {
        let ctx = Context::new(1, MonomialOrder::Lex);
        // (x + 1)/2
        let b = RationalFunction::from_parts(
            MPoly::from_i64_terms(&ctx, &[(1, &[1]), (1, &[0])]),
            MPoly::from_i64_terms(&ctx, &[(2, &[0])]),
        )
        .unwrap();

        let cube = pow_naive(&b, 3).unwrap();
        assert_eq!(cube.to_string(), "(x^3 + 3*x^2 + 3*x + 1)/(8)");
        let inv_sq = pow_naive(&b, -2).unwrap();
        assert_eq!(inv_sq.to_string(), "(4)/(x^2 + 2*x + 1)");
        assert!(pow_naive(&RationalFunction::zero(&ctx), -3).unwrap().is_zero());
    }
}
