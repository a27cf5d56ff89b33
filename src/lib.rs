//! Decimal Big Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers kept as base-10 digits, with
//!   `+ - * / %`, comparison, parsing and formatting.
//! - [`MulStrategy`]: three interchangeable multiplication algorithms (schoolbook,
//!   Karatsuba, complex FFT) plus an automatic size-based choice. All of them give
//!   identical digits.
//! - [`BigInt::mod_n`] and [`BigInt::mod_exp`] for modular arithmetic following
//!   truncating division.
//!
//! Fallible operations return [`BigIntResult`]. The operator forms of `/` and `%`
//! panic on a zero divisor, just like the primitive integers do.

mod big_int;
mod big_int_div;
mod big_int_fft;
mod big_int_mul;
mod big_int_pow;
mod big_num_cache;
mod big_num_constants;
mod big_num_error;
mod magnitude;

pub use big_int::BigInt;
pub use big_int_mul::MulStrategy;
pub use big_num_error::{BigIntError, BigIntResult};

#[cfg(test)]
mod tests {
    use crate::{BigInt, MulStrategy};
    use proptest::prelude::*;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }

    #[test]
    fn scenarios() {
        assert_eq!(BigInt::from(9) + BigInt::from(1), BigInt::from(10));
        assert_eq!(BigInt::from(9) - BigInt::from(-9), BigInt::from(18));
        assert_eq!(BigInt::from(9) * BigInt::from(-9), BigInt::from(-81));
        assert_eq!(BigInt::from(81) / BigInt::from(9), BigInt::from(9));
        assert_eq!(BigInt::from(81) / BigInt::from(-9), BigInt::from(-9));
    }

    fn any_big_int(max_digits: usize) -> impl Strategy<Value = BigInt> {
        (any::<bool>(), proptest::collection::vec(0u8..10, 1..=max_digits)).prop_map(
            |(negative, digits)| {
                let s: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
                let s = if negative { format!("-{}", s) } else { s };
                s.parse().unwrap()
            },
        )
    }

    fn non_zero_big_int(max_digits: usize) -> impl Strategy<Value = BigInt> {
        any_big_int(max_digits).prop_filter("divisor must be non-zero", |b| !b.is_zero())
    }

    proptest! {
        #[test]
        fn add_is_associative(a in any_big_int(40), b in any_big_int(40), c in any_big_int(40)) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn add_is_commutative(a in any_big_int(40), b in any_big_int(40)) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn sub_self_is_canonical_zero(a in any_big_int(40)) {
            let zero = &a - &a;
            prop_assert_eq!(zero.digits(), &[0u8][..]);
            prop_assert_eq!(zero.signum(), 1);
        }

        #[test]
        fn add_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let sum = BigInt::from(a) + BigInt::from(b);
            prop_assert_eq!(sum.to_string(), (a as i128 + b as i128).to_string());
        }

        #[test]
        fn strategies_agree(a in any_big_int(120), b in any_big_int(120)) {
            let expected = a.schoolbook_multiply(&b);
            prop_assert_eq!(a.karatsuba_multiply(&b), expected.clone());
            prop_assert_eq!(a.fft_multiply(&b), expected.clone());
            prop_assert_eq!(a.mul_with(&b, MulStrategy::Auto), expected);
        }

        #[test]
        fn mul_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let product = BigInt::from(a).karatsuba_multiply(&BigInt::from(b));
            prop_assert_eq!(product.to_string(), (a as i128 * b as i128).to_string());
        }

        #[test]
        fn div_rem_identity(a in any_big_int(60), b in non_zero_big_int(25)) {
            let q = &a / &b;
            let r = a.mod_n(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.less_abs(&b));
            prop_assert!(r.is_zero() || r.signum() == a.signum());
        }

        #[test]
        fn div_matches_i64(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
            // i64::MIN / -1 overflows the primitive
            prop_assume!(!(a == i64::MIN && b == -1));
            let (q, r) = BigInt::from(a).div_rem(&BigInt::from(b)).unwrap();
            prop_assert_eq!(q, BigInt::from(a / b));
            prop_assert_eq!(r, BigInt::from(a % b));
        }

        #[test]
        fn ordering_matches_i64(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(BigInt::from(a).cmp(&BigInt::from(b)), a.cmp(&b));
        }

        #[test]
        fn parse_format_round_trip(v in any_big_int(80)) {
            let s = v.to_string();
            prop_assert_eq!(s.parse::<BigInt>().unwrap(), v);
        }

        #[test]
        fn parse_accepts_decimal_strings(s in "-?[0-9]{1,50}") {
            let v: BigInt = s.parse().unwrap();
            let trimmed = s.trim_start_matches('-').trim_start_matches('0');
            let expected = if trimmed.is_empty() {
                "0".to_string()
            } else if s.starts_with('-') {
                format!("-{}", trimmed)
            } else {
                trimmed.to_string()
            };
            prop_assert_eq!(v.to_string(), expected);
        }

        #[test]
        fn parse_rejects_non_digits(prefix in "[0-9]{0,5}", bad in "[^0-9-]", suffix in "[0-9]{0,5}") {
            let s = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(s.parse::<BigInt>().is_err());
        }
    }
}
