//! Property-based tests for capped big integer arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::BigInt;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating decimal strings well past the native range
    fn decimal_string() -> impl Strategy<Value = String> {
        "-?[0-9]{1,60}"
    }

    fn non_zero_decimal_string() -> impl Strategy<Value = String> {
        "-?[1-9][0-9]{0,40}"
    }

    proptest! {
        // Ring axioms

        #[test]
        fn add_commutative(a in decimal_string(), b in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in decimal_string(), b in decimal_string(), c in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            let c: BigInt = c.parse().unwrap();
            prop_assert_eq!((&a + &b) + &c, a + (&b + &c));
        }

        #[test]
        fn mul_commutative(a in decimal_string(), b in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_associative(a in decimal_string(), b in decimal_string(), c in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            let c: BigInt = c.parse().unwrap();
            prop_assert_eq!((&a * &b) * &c, a * (&b * &c));
        }

        #[test]
        fn distributive(a in decimal_string(), b in decimal_string(), c in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            let c: BigInt = c.parse().unwrap();
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn add_identity(a in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let zero = BigInt::new(0);
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(zero + &a, a);
        }

        #[test]
        fn add_inverse_is_canonical_zero(a in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let sum = &a + &(-&a);
            prop_assert!(sum.is_zero());
            prop_assert!(!sum.is_negative());
            prop_assert_eq!(sum.to_string(), "0");
        }

        // Wire format

        #[test]
        fn parse_display_round_trip(a in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let back: BigInt = a.to_string().parse().unwrap();
            prop_assert_eq!(back, a);
        }

        #[test]
        fn display_has_no_leading_zeros(a in decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let s = a.to_string();
            let digits = s.strip_prefix('-').unwrap_or(&s);
            prop_assert!(digits == "0" || !digits.starts_with('0'));
        }

        // Division and modulo

        #[test]
        fn div_rem_identity(a in decimal_string(), b in non_zero_decimal_string()) {
            let a: BigInt = a.parse().unwrap();
            let b: BigInt = b.parse().unwrap();
            let (q, r) = a.checked_div_rem(&b).unwrap();
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            // Truncating convention: a nonzero remainder follows the dividend.
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }

        // Agreement with native arithmetic

        #[test]
        fn matches_i128_oracle(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (i128::from(a), i128::from(b));
            let (ba, bb) = (BigInt::from(a), BigInt::from(b));
            prop_assert_eq!((&ba + &bb).to_string(), (x + y).to_string());
            prop_assert_eq!((&ba - &bb).to_string(), (x - y).to_string());
            prop_assert_eq!((&ba * &bb).to_string(), (x * y).to_string());
            if b != 0 {
                prop_assert_eq!((&ba / &bb).to_string(), (x / y).to_string());
                prop_assert_eq!((&ba % &bb).to_string(), (x % y).to_string());
            }
        }

        #[test]
        fn ordering_matches_i64(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(BigInt::from(a).cmp(&BigInt::from(b)), a.cmp(&b));
        }

        #[test]
        fn small_ops_never_overflow(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert!(a.checked_add(&b).is_ok());
            prop_assert!(a.checked_sub(&b).is_ok());
            prop_assert!(a.checked_mul(&b).is_ok());
        }
    }
}
