//! Property-based tests for rational function arithmetic and powers.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use numina_integers::Integer;
    use numina_poly::{Context, MPoly, Monomial, MonomialOrder};

    use crate::naive::pow_naive;
    use crate::{FracError, RationalFunction};

    fn order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    // Raw terms over two variables with small coefficients and degrees
    fn raw_terms() -> impl Strategy<Value = Vec<(i64, [u64; 2])>> {
        proptest::collection::vec((-9i64..10i64, [0u64..3, 0u64..3]), 1..=3)
    }

    fn poly(ctx: &Arc<Context>, raw: &[(i64, [u64; 2])]) -> MPoly {
        let terms = raw
            .iter()
            .map(|(c, e)| (Monomial::from_exponents(e), Integer::new(*c)))
            .collect();
        MPoly::new(ctx, terms)
    }

    fn build(ctx: &Arc<Context>, num: &[(i64, [u64; 2])], den: &[(i64, [u64; 2])]) -> Option<RationalFunction> {
        RationalFunction::from_parts(poly(ctx, num), poly(ctx, den)).ok()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn from_parts_is_canonical(o in order(), num in raw_terms(), den in raw_terms()) {
            let ctx = Context::new(2, o);
            let den_poly = poly(&ctx, &den);
            match RationalFunction::from_parts(poly(&ctx, &num), den_poly.clone()) {
                Ok(f) => prop_assert!(f.is_canonical()),
                Err(e) => {
                    prop_assert!(den_poly.is_zero());
                    prop_assert_eq!(e, FracError::DivisionByZero);
                }
            }
        }

        #[test]
        fn mul_then_div_round_trips(o in order(), a in raw_terms(), b in raw_terms(), c in raw_terms(), d in raw_terms()) {
            let ctx = Context::new(2, o);
            let (Some(f), Some(g)) = (build(&ctx, &a, &b), build(&ctx, &c, &d)) else {
                return Ok(());
            };
            prop_assume!(!g.is_zero());
            let product = f.mul(&g).unwrap();
            prop_assert!(product.is_canonical());
            prop_assert_eq!(product.div(&g).unwrap(), f);
        }

        #[test]
        fn add_then_sub_round_trips(o in order(), a in raw_terms(), b in raw_terms(), c in raw_terms(), d in raw_terms()) {
            let ctx = Context::new(2, o);
            let (Some(f), Some(g)) = (build(&ctx, &a, &b), build(&ctx, &c, &d)) else {
                return Ok(());
            };
            let sum = f.add(&g).unwrap();
            prop_assert!(sum.is_canonical());
            prop_assert_eq!(sum.sub(&g).unwrap(), f);
        }

        #[test]
        fn pow_entry_points_agree_with_oracle(o in order(), a in raw_terms(), b in raw_terms(), n in -4i64..=4) {
            let ctx = Context::new(2, o);
            let Some(f) = build(&ctx, &a, &b) else {
                return Ok(());
            };
            if f.is_zero() && n < 0 {
                prop_assert_eq!(f.pow_signed(n), Err(FracError::NegativePowerOfZero));
                prop_assert_eq!(f.pow_arbitrary_precision(&Integer::new(n)), Err(FracError::NegativePowerOfZero));
                return Ok(());
            }
            let expected = pow_naive(&f, n).unwrap();
            let signed = f.pow_signed(n).unwrap();
            prop_assert!(signed.is_canonical());
            prop_assert_eq!(&signed, &expected);
            prop_assert_eq!(f.pow_arbitrary_precision(&Integer::new(n)).unwrap(), expected.clone());
            prop_assert_eq!(f.pow(n).unwrap(), expected);
        }

        #[test]
        fn pow_adds_exponents(o in order(), a in raw_terms(), b in raw_terms(), m in 0u64..4, n in 0u64..4) {
            let ctx = Context::new(2, o);
            let Some(f) = build(&ctx, &a, &b) else {
                return Ok(());
            };
            let lhs = f.pow_unsigned(m).unwrap().mul(&f.pow_unsigned(n).unwrap()).unwrap();
            prop_assert_eq!(lhs, f.pow_unsigned(m + n).unwrap());
        }
    }
}
