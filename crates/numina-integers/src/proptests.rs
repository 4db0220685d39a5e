//! Property-based tests for integer arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Integer;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!(g.is_positive());
            prop_assert!(g.divides(&a));
            prop_assert!(g.divides(&b));
        }

        #[test]
        fn gcd_of_cofactors_is_one(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            let a1 = a.div_exact(&g).unwrap();
            let b1 = b.div_exact(&g).unwrap();
            prop_assert!(a1.gcd(&b1).is_one());
        }

        #[test]
        fn div_exact_inverts_mul(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!((&a * &b).div_exact(&b), Some(a));
        }

        #[test]
        fn pow_matches_repeated_mul(a in -50i64..50i64, e in 0usize..12) {
            let a = Integer::new(a);
            let mut expected = Integer::one();
            for _ in 0..e {
                expected = expected * &a;
            }
            prop_assert_eq!(a.pow(e), expected);
        }

        #[test]
        fn sign_magnitude_round_trip(a in any::<i64>()) {
            let a = Integer::new(a);
            let rebuilt = Integer::from_sign_magnitude(a.is_negative(), a.unsigned_abs());
            prop_assert_eq!(rebuilt, a.clone());
            prop_assert_eq!(a.is_zero(), a.signum() == 0);
        }
    }
}
