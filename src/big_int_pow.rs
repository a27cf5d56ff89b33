use crate::BigInt;
use crate::big_num_cache::POS_CACHE;
use crate::big_num_error::{BigIntError, BigIntResult};

// 实现模幂
impl BigInt {
    /// `self^power mod modulus` by recursive squaring.
    ///
    /// Reductions use [`BigInt::mod_n`], so a negative base can give a negative result.
    /// A zero modulus is rejected for every `power`, including zero.
    /// A zero `power` returns `1` unreduced, so `mod_exp(x, 0, 1)` is `1`, not `0`.
    ///
    /// # Panics
    /// If `power` is negative.
    pub fn mod_exp(&self, power: &BigInt, modulus: &BigInt) -> BigIntResult<BigInt> {
        assert!(!power.is_negative(), "mod_exp: negative exponent {}", power);
        if modulus.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        mod_exp_rec(self, power, modulus)
    }
}

fn mod_exp_rec(base: &BigInt, power: &BigInt, modulus: &BigInt) -> BigIntResult<BigInt> {
    if power.is_zero() {
        return Ok(BigInt::one());
    }
    let two = &POS_CACHE[2];
    let base = base.mod_n(modulus)?;
    let half = mod_exp_rec(&base, &power.checked_div(two)?, modulus)?;
    let squared = half.square().mod_n(modulus)?;
    if power.is_even() {
        Ok(squared)
    } else {
        (&base * &squared).mod_n(modulus)
    }
}

#[test]
fn test_mod_exp() {
    let exp = |b: i64, p: i64, m: i64| {
        BigInt::from(b).mod_exp(&BigInt::from(p), &BigInt::from(m)).unwrap()
    };
    assert_eq!(exp(123, 4, 7), BigInt::from(4));
    assert_eq!(exp(12345, 6789, 167), BigInt::from(14));
    assert_eq!(exp(3, 5, 30), BigInt::from(3));
    assert_eq!(exp(249, 321, 499), BigInt::from(447));
    assert_eq!(exp(5, 1, 8), BigInt::from(5));
    assert_eq!(exp(5, 0, 8), BigInt::from(1));
    assert_eq!(exp(5, 0, 1), BigInt::from(1));
    assert_eq!(exp(5, 0, -1), BigInt::from(1));
    assert_eq!(exp(5, 3, 1), BigInt::zero());
    assert_eq!(exp(-2, 3, 5), BigInt::from(-3));
}

#[test]
fn test_mod_exp_mersenne() {
    // 2^89 - 1 is prime, so Fermat gives 3^(p-1) == 1 (mod p)
    let p: BigInt = "618970019642690137449562111".parse().unwrap();
    let power: BigInt = "618970019642690137449562110".parse().unwrap();
    assert_eq!(BigInt::from(3).mod_exp(&power, &p).unwrap(), BigInt::one());
}

#[test]
fn test_mod_exp_zero_modulus() {
    for power in [0, 1, 7] {
        assert_eq!(
            BigInt::from(5).mod_exp(&BigInt::from(power), &BigInt::zero()),
            Err(BigIntError::DivisionByZero)
        );
    }
}

#[test]
#[should_panic(expected = "negative exponent")]
fn test_mod_exp_negative_power() {
    let _ = BigInt::from(5).mod_exp(&BigInt::from(-1), &BigInt::from(7));
}
