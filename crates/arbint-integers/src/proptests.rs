//! Property-based tests for arbitrary precision arithmetic.
//!
//! Multi-limb results are checked against `dashu::IBig`.

#[cfg(test)]
mod tests {
    use dashu::base::Abs;
    use dashu::integer::IBig;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{add, div_mod, divide, modulo, multiply, negate, subtract, BigInteger, Sign};

    // Decimal literals spanning one to several limbs, with optional sign
    fn decimal() -> impl Strategy<Value = String> {
        "-?[0-9]{1,40}"
    }

    // Nonzero divisors up to three limbs
    fn nonzero_decimal() -> impl Strategy<Value = String> {
        "-?[1-9][0-9]{0,25}"
    }

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn both(text: &str) -> (BigInteger, IBig) {
        (text.parse().unwrap(), text.parse().unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn round_trip_is_canonical(text in "[ ]{0,2}[+-]?0{0,3}[0-9]{1,40}") {
            let ours: BigInteger = text.parse().unwrap();
            let reference: IBig = text.trim_start().trim_start_matches('+').parse().unwrap();
            prop_assert_eq!(ours.to_string(), reference.to_string());
            prop_assert!(ours.magnitude().is_normalized());
        }

        #[test]
        fn add_matches_reference(a in decimal(), b in decimal()) {
            let (a, ra) = both(&a);
            let (b, rb) = both(&b);
            prop_assert_eq!(add(&a, &b).unwrap().to_string(), (ra + rb).to_string());
        }

        #[test]
        fn subtract_matches_reference(a in decimal(), b in decimal()) {
            let (a, ra) = both(&a);
            let (b, rb) = both(&b);
            prop_assert_eq!(subtract(&a, &b).unwrap().to_string(), (ra - rb).to_string());
        }

        #[test]
        fn multiply_matches_reference(a in decimal(), b in decimal()) {
            let (a, ra) = both(&a);
            let (b, rb) = both(&b);
            prop_assert_eq!(multiply(&a, &b).unwrap().to_string(), (ra * rb).to_string());
        }

        #[test]
        fn divide_matches_reference(a in decimal(), n in nonzero_decimal()) {
            let (a, ra) = both(&a);
            let (n, rn) = both(&n);
            prop_assert_eq!(divide(&a, &n).unwrap().to_string(), (&ra / &rn).to_string());

            let mut expected = &ra % &rn;
            if expected < IBig::ZERO {
                expected += rn.abs();
            }
            prop_assert_eq!(modulo(&a, &n).unwrap().to_string(), expected.to_string());
        }

        #[test]
        fn compare_matches_reference(a in decimal(), b in decimal()) {
            let (a, ra) = both(&a);
            let (b, rb) = both(&b);
            prop_assert_eq!(a.cmp(&b), ra.cmp(&rb));
        }

        // Integer ring axioms

        #[test]
        fn add_commutative(a in decimal(), b in decimal()) {
            let (a, _) = both(&a);
            let (b, _) = both(&b);
            prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
        }

        #[test]
        fn mul_commutative(a in decimal(), b in decimal()) {
            let (a, _) = both(&a);
            let (b, _) = both(&b);
            prop_assert_eq!(multiply(&a, &b).unwrap(), multiply(&b, &a).unwrap());
        }

        #[test]
        fn distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInteger::new(a);
            let b = BigInteger::new(b);
            let c = BigInteger::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn additive_inverse(a in decimal()) {
            let (a, _) = both(&a);
            let zero = add(&a, &negate(&a)).unwrap();
            prop_assert_eq!(zero.sign(), Sign::Positive);
            prop_assert!(zero.is_zero());
            prop_assert_eq!(subtract(&a, &a).unwrap(), BigInteger::zero());
        }

        #[test]
        fn division_contract(a in decimal(), n in nonzero_decimal()) {
            let (a, _) = both(&a);
            let (n, _) = both(&n);
            let (q, r) = div_mod(&a, &n).unwrap();

            prop_assert!(!r.is_negative());
            prop_assert!(r < n.abs());

            // q * n + r lands on a, or on a + |n| when the truncated remainder was negative
            let rebuilt = add(&multiply(&q, &n).unwrap(), &r).unwrap();
            let shifted = add(&a, &n.abs()).unwrap();
            prop_assert!(rebuilt == a || rebuilt == shifted);
            prop_assert_eq!(modulo(&subtract(&a, &r).unwrap(), &n).unwrap(), BigInteger::zero());
        }

        #[test]
        fn multiply_sign_rule(a in decimal(), b in decimal()) {
            let (a, _) = both(&a);
            let (b, _) = both(&b);
            let product = multiply(&a, &b).unwrap();
            let expect_negative = a.is_negative() != b.is_negative() && !a.is_zero() && !b.is_zero();
            prop_assert_eq!(product.is_negative(), expect_negative);
        }

        #[test]
        fn from_i64_matches_parse(value in any::<i64>()) {
            let parsed: BigInteger = value.to_string().parse().unwrap();
            prop_assert_eq!(&BigInteger::new(value), &parsed);
            prop_assert_eq!(parsed.to_i64(), Some(value));
        }
    }
}
