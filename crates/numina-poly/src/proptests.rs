//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::algorithms::gcd;
    use crate::context::Context;
    use crate::monomial::Monomial;
    use crate::mpoly::MPoly;
    use crate::ordering::MonomialOrder;
    use numina_integers::Integer;

    fn order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    // Raw terms over two variables with small coefficients and degrees
    fn raw_terms() -> impl Strategy<Value = Vec<(i64, [u64; 2])>> {
        proptest::collection::vec((-20i64..20i64, [0u64..3, 0u64..3]), 0..=4)
    }

    fn build(ctx: &Arc<Context>, raw: &[(i64, [u64; 2])]) -> MPoly {
        let terms = raw
            .iter()
            .map(|(c, e)| (Monomial::from_exponents(e), Integer::new(*c)))
            .collect();
        MPoly::new(ctx, terms)
    }

    proptest! {
        #[test]
        fn construction_is_canonical(o in order(), raw in raw_terms()) {
            let ctx = Context::new(2, o);
            prop_assert!(build(&ctx, &raw).is_canonical());
        }

        #[test]
        fn mul_commutative(o in order(), a in raw_terms(), b in raw_terms()) {
            let ctx = Context::new(2, o);
            let a = build(&ctx, &a);
            let b = build(&ctx, &b);
            prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
        }

        #[test]
        fn mul_distributes_over_add(a in raw_terms(), b in raw_terms(), c in raw_terms()) {
            let ctx = Context::new(2, MonomialOrder::Grevlex);
            let (a, b, c) = (build(&ctx, &a), build(&ctx, &b), build(&ctx, &c));
            let left = a.mul(&b.add(&c)).unwrap();
            let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap());
            prop_assert_eq!(left, right);
        }

        #[test]
        fn sub_self_is_zero(o in order(), a in raw_terms()) {
            let ctx = Context::new(2, o);
            let a = build(&ctx, &a);
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn divexact_inverts_mul(o in order(), a in raw_terms(), b in raw_terms()) {
            let ctx = Context::new(2, o);
            let a = build(&ctx, &a);
            let b = build(&ctx, &b);
            prop_assume!(!b.is_zero());
            let product = a.mul(&b).unwrap();
            prop_assert_eq!(product.divexact(&b).unwrap(), a);
        }

        #[test]
        fn pow_matches_repeated_mul(a in raw_terms(), k in 0u64..5) {
            let ctx = Context::new(2, MonomialOrder::Lex);
            let a = build(&ctx, &a);
            let mut expected = MPoly::one(&ctx);
            for _ in 0..k {
                expected = expected.mul(&a).unwrap();
            }
            prop_assert_eq!(a.pow_u64(k).unwrap(), expected);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn gcd_divides_both(o in order(), a in raw_terms(), b in raw_terms()) {
            let ctx = Context::new(2, o);
            let a = build(&ctx, &a);
            let b = build(&ctx, &b);
            prop_assume!(!a.is_zero() || !b.is_zero());

            let g = gcd(&a, &b).unwrap();
            prop_assert!(g.leading_sign() > 0);
            prop_assert!(a.divexact(&g).is_ok());
            prop_assert!(b.divexact(&g).is_ok());
        }

        #[test]
        fn gcd_recovers_common_factor(o in order(), c in raw_terms(), a in raw_terms(), b in raw_terms()) {
            let ctx = Context::new(2, o);
            let c = build(&ctx, &c);
            let a = build(&ctx, &a);
            let b = build(&ctx, &b);
            prop_assume!(!c.is_zero() && !a.is_zero() && !b.is_zero());

            let g = gcd(&c.mul(&a).unwrap(), &c.mul(&b).unwrap()).unwrap();
            // The common factor divides the gcd, and the cofactors are coprime
            prop_assert!(g.divexact(&c).is_ok());
            let ga = c.mul(&a).unwrap().divexact(&g).unwrap();
            let gb = c.mul(&b).unwrap().divexact(&g).unwrap();
            prop_assert!(gcd(&ga, &gb).unwrap().is_one());
        }
    }
}
