use std::ops::{
    Div, DivAssign,
    Rem, RemAssign,
};

use crate::BigInt;
use crate::big_num_error::{BigIntError, BigIntResult};
use crate::magnitude::{self, less_abs, sub_abs};

// 实现除法
impl BigInt {
    /// Truncating division (towards zero).
    pub fn checked_div(&self, divisor: &BigInt) -> BigIntResult<BigInt> {
        self.div_rem(divisor).map(|(q, _)| q)
    }
    /// Quotient and remainder of truncating division. The remainder takes the sign of
    /// the dividend, so `q * divisor + r == self`.
    pub fn div_rem(&self, divisor: &BigInt) -> BigIntResult<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if self.less_abs(divisor) {
            return Ok((BigInt::zero(), self.clone()));
        }
        let (q, r) = divide_long(self.digits(), divisor.digits());
        Ok((
            BigInt::new(q, self.signum() * divisor.signum()),
            BigInt::new(r, self.signum()),
        ))
    }
    /// `self - m * (self / m)`. Follows truncating division, so a negative `self`
    /// gives a result that is zero or negative.
    pub fn mod_n(&self, m: &BigInt) -> BigIntResult<BigInt> {
        let q = self.checked_div(m)?;
        Ok(self - &(m * &q))
    }
}

/// Long division of magnitudes, most significant digit first. Each quotient digit is
/// the number of times the divisor can be subtracted from the running remainder, which
/// stays below ten times the divisor, so the count never exceeds 9.
fn divide_long(u: &[u8], v: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut q = vec![0u8; u.len()];
    let mut cur: Vec<u8> = vec![0];
    for j in (0..u.len()).rev() {
        // cur = cur * 10 + u[j]
        cur.insert(0, u[j]);
        magnitude::trim(&mut cur);
        let mut count = 0u8;
        while !less_abs(&cur, v) {
            cur = sub_abs(&cur, v);
            count += 1;
        }
        debug_assert!(count < 10);
        q[j] = count;
    }
    magnitude::trim(&mut q);
    (q, cur)
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

// 实现求余
impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        match self.mod_n(rhs) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = &*self % &rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

#[test]
fn test_div() {
    let (x, k, w, d) = (BigInt::from(9), BigInt::from(3), BigInt::from(81), BigInt::from(1));
    assert_eq!(&k / &x, BigInt::zero());
    assert_eq!(&x / &k, BigInt::from(3));
    assert_eq!(&w / &x, BigInt::from(9));
    assert_eq!(&w / &(-&x), BigInt::from(-9));
    assert_eq!(&k / &d, BigInt::from(3));
    assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
    assert_eq!(BigInt::from(-7) / BigInt::from(-2), BigInt::from(3));
    let mut x = x;
    x /= k;
    assert_eq!(x, BigInt::from(3));
    x /= &BigInt::from(-3);
    assert_eq!(x, BigInt::from(-1));

    let a: BigInt = "120".parse().unwrap();
    assert_eq!(a / BigInt::from(13), BigInt::from(9));
    let a: BigInt = "10000000000000000000000000000000000".parse().unwrap();
    let c: BigInt = "10000000000000000000000000000000".parse().unwrap();
    assert_eq!(a / BigInt::from(1000), c);
    let a: BigInt = "124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789".parse().unwrap();
    let b: BigInt = "5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376".parse().unwrap();
    let c: BigInt = "21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215".parse().unwrap();
    assert_eq!(a / b, c);
}

#[test]
fn test_div_by_zero() {
    assert_eq!(BigInt::from(3).checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(BigInt::zero().div_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    assert_eq!(BigInt::from(8).mod_n(&BigInt::zero()), Err(BigIntError::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = BigInt::from(3) / BigInt::zero();
}

#[test]
fn test_div_rem() {
    let (q, r) = BigInt::from(1234).div_rem(&BigInt::from(-56)).unwrap();
    assert_eq!(q, BigInt::from(-22));
    assert_eq!(r, BigInt::from(2));
    let (q, r) = BigInt::from(-1234).div_rem(&BigInt::from(56)).unwrap();
    assert_eq!(q, BigInt::from(-22));
    assert_eq!(r, BigInt::from(-2));
    let (q, r) = BigInt::from(-5).div_rem(&BigInt::from(9)).unwrap();
    assert_eq!(q, BigInt::zero());
    assert_eq!(r, BigInt::from(-5));
}

#[test]
fn test_mod() {
    let x = BigInt::from(8);
    assert!(x.mod_n(&BigInt::from(2)).unwrap().is_zero());
    assert_eq!(x.mod_n(&BigInt::from(3)).unwrap(), BigInt::from(2));
    assert_eq!(x.mod_n(&BigInt::one()).unwrap(), BigInt::zero());
    // truncating, not Euclidean
    assert_eq!(BigInt::from(-7).mod_n(&BigInt::from(3)).unwrap(), BigInt::from(-1));
    assert_eq!(BigInt::from(7).mod_n(&BigInt::from(-3)).unwrap(), BigInt::from(1));
    assert_eq!(BigInt::from(12) % BigInt::from(8), BigInt::from(4));

    let a: BigInt = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".parse().unwrap();
    let b: BigInt = "526738495607659438721653478560954837265378495607".parse().unwrap();
    let r: BigInt = "393707270751296419349581795408095683999332705291".parse().unwrap();
    assert_eq!(&a % &b, r);
    assert_eq!(a.div_rem(&b).unwrap().1, r);
    let mut a = a;
    a %= b;
    assert_eq!(a, r);
}
