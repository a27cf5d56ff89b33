//! # BigInt
//! Arbitrary-precision signed integers stored as little-endian base-10 digits plus a sign.
//! Every value is kept in canonical form: no superfluous high zero digits, and zero is
//! always the single digit `0` with a positive sign.
//! # Example
//! ```
//! use decimal_big_int::{BigInt, MulStrategy};
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-900000000000".parse().unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! assert_eq!(a.mul_with(&b, MulStrategy::Karatsuba), a.mul_with(&b, MulStrategy::Fft));
//! ```

use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Neg,
};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::big_num_constants::*;
use crate::big_num_cache::*;
use crate::big_num_error::{BigIntError, BigIntResult};
use crate::magnitude;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    signum: i8,
    digits: Vec<u8>,
}

// 实现构造
impl BigInt {
    /// Builds a value from raw parts and brings it into canonical form.
    pub(crate) fn new(mut digits: Vec<u8>, signum: i8) -> Self {
        debug_assert!(signum == 1 || signum == -1);
        debug_assert!(digits.iter().all(|&d| (d as u32) < RADIX));
        magnitude::trim(&mut digits);
        let signum = if magnitude::is_zero(&digits) { 1 } else { signum };
        BigInt { signum, digits }
    }
    /// Splits `val` into decimal digits, least significant first.
    pub(crate) fn decompose(mut val: u64, signum: i8) -> Self {
        let mut digits = Vec::with_capacity(20);
        loop {
            digits.push((val % RADIX as u64) as u8);
            val /= RADIX as u64;
            if val == 0 {
                break;
            }
        }
        BigInt::new(digits, signum)
    }
    fn value_of(val: u64, signum: i8) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            if signum == 1 {
                POS_CACHE[val as usize].clone()
            } else {
                NEG_CACHE[val as usize].clone()
            }
        } else {
            BigInt::decompose(val, signum)
        }
    }
    pub fn zero() -> BigInt {
        POS_CACHE[0].clone()
    }
    pub fn one() -> BigInt {
        POS_CACHE[1].clone()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, 1)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            // unsigned_abs keeps MIN exact
            let mag = (val as i64).unsigned_abs();
            if val < 0 {
                BigInt::value_of(mag, -1)
            } else {
                BigInt::value_of(mag, 1)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// 杂项访问
impl BigInt {
    /// Decimal digits, least significant first. Never empty.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
    /// `1` for zero and positive values, `-1` for negative ones.
    pub fn signum(&self) -> i8 {
        self.signum
    }
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
    pub fn is_negative(&self) -> bool {
        self.signum < 0
    }
    pub fn is_even(&self) -> bool {
        self.digits[0] % 2 == 0
    }
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }
    /// Multiplies by `10^n`.
    pub fn shl_digits(&self, n: usize) -> BigInt {
        BigInt::new(magnitude::shl_digits(&self.digits, n), self.signum)
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.digits.iter().rev().map(|&d| DIGITS[d as usize]).collect();
        f.pad_integral(self.signum > 0, "", &s)
    }
}

// 实现解析
impl BigInt {
    /// Parses `-?[0-9]+`. Leading zeros are accepted and dropped.
    pub fn parse(val: &str) -> BigIntResult<BigInt> {
        let invalid = || BigIntError::InvalidFormat { input: val.to_string() };

        let (signum, body) = match val.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, val),
        };
        if body.is_empty() {
            return Err(invalid());
        }

        let mut digits = Vec::with_capacity(body.len());
        for c in body.chars().rev() {
            match c.to_digit(RADIX) {
                Some(d) => digits.push(d as u8),
                None => return Err(invalid()),
            }
        }
        Ok(BigInt::new(digits, signum))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        BigInt::parse(val)
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        magnitude::cmp_abs(&self.digits, &other.digits)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum.cmp(&other.signum) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.signum > 0 {
            self.compare_mag(other)
        } else {
            self.compare_mag(other).reverse()
        }
    }
}

// 实现绝对值运算
impl BigInt {
    pub fn abs(&self) -> BigInt {
        BigInt { signum: 1, digits: self.digits.clone() }
    }
    /// |self| + |other|
    pub fn add_abs(&self, other: &BigInt) -> BigInt {
        BigInt::new(magnitude::add_abs(&self.digits, &other.digits), 1)
    }
    /// |self| - |other|
    ///
    /// # Panics
    /// If |self| < |other|; ordering the operands is the caller's job.
    pub fn sub_abs(&self, other: &BigInt) -> BigInt {
        assert!(!self.less_abs(other), "sub_abs: |{}| < |{}|", self, other);
        BigInt::new(magnitude::sub_abs(&self.digits, &other.digits), 1)
    }
    /// |self| < |other|
    pub fn less_abs(&self, other: &BigInt) -> bool {
        magnitude::less_abs(&self.digits, &other.digits)
    }
}

// 实现加法
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, val: &BigInt) -> Self::Output {
        if self.signum == val.signum {
            return BigInt::new(magnitude::add_abs(&self.digits, &val.digits), self.signum);
        }
        // different signs: the larger magnitude decides the sign
        if self.less_abs(val) {
            BigInt::new(magnitude::sub_abs(&val.digits, &self.digits), val.signum)
        } else {
            BigInt::new(magnitude::sub_abs(&self.digits, &val.digits), self.signum)
        }
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { signum, digits } = self;
        BigInt::new(digits, -signum)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现减法
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, val: &BigInt) -> Self::Output {
        if self.signum != val.signum {
            return BigInt::new(magnitude::add_abs(&self.digits, &val.digits), self.signum);
        }
        if self.less_abs(val) {
            BigInt::new(magnitude::sub_abs(&val.digits, &self.digits), -self.signum)
        } else {
            BigInt::new(magnitude::sub_abs(&self.digits, &val.digits), self.signum)
        }
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = &*self - &rhs;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

#[test]
fn test_from() {
    let big = BigInt::from(210);
    assert_eq!(big.digits(), &[0, 1, 2]);
    assert_eq!(big.signum(), 1);

    let big = BigInt::from(-7_i8);
    assert_eq!(big.digits(), &[7]);
    assert_eq!(big.signum(), -1);

    let big = BigInt::from(0_i64);
    assert_eq!(big.digits(), &[0]);
    assert_eq!(big.signum(), 1);

    let big = BigInt::from(u64::MAX);
    assert_eq!(big.to_string(), "18446744073709551615");

    let big = BigInt::from(i64::MIN);
    assert_eq!(big.to_string(), "-9223372036854775808");
    assert_eq!(big.digit_count(), 19);

    assert_eq!(BigInt::default(), BigInt::zero());
}

#[test]
fn test_parse() {
    let y: BigInt = "-000210".parse().unwrap();
    assert_eq!(y.digits(), &[0, 1, 2]);
    assert_eq!(y.signum(), -1);
    assert_eq!(y, BigInt::from(-210));

    let z: BigInt = "0000".parse().unwrap();
    assert_eq!(z, BigInt::zero());
    let z: BigInt = "-0".parse().unwrap();
    assert_eq!(z.signum(), 1);

    for bad in ["12a3", "awrf", "", "-", "+5", "1-2", "--1", " 1", "1.0", "١٢"] {
        assert_eq!(
            bad.parse::<BigInt>(),
            Err(BigIntError::InvalidFormat { input: bad.to_string() }),
            "input {:?}", bad
        );
    }
    assert!(BigInt::try_from("224").is_ok());
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::from(224).to_string(), "224");
    assert_eq!(BigInt::from(-224).to_string(), "-224");
    assert_eq!(BigInt::zero().to_string(), "0");
    let s = "12345678909876523784950683472613487560983287654321";
    assert_eq!(s.parse::<BigInt>().unwrap().to_string(), s);
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
}

#[test]
fn test_cmp() {
    let (a, b, c, d) = (BigInt::from(10), BigInt::from(10), BigInt::from(9), BigInt::from(-3));
    assert!(a == b);
    assert!(a != c);
    assert!(c < a);
    assert!(b <= a);
    assert!(a > c);
    assert!(a >= b);
    assert!(a > d);
    assert!(d < c);
    assert!(BigInt::from(-100) < BigInt::from(-99));
    assert!(BigInt::from(-1) < BigInt::zero());
    let big: BigInt = "100000000000000000000000".parse().unwrap();
    assert!(big > BigInt::from(i64::MAX));
    assert!(-&big < BigInt::from(i64::MIN));
}

#[test]
fn test_add() {
    let x = BigInt::from(9);
    let y = BigInt::from(1);
    assert_eq!(&x + &y, BigInt::from(10));
    assert_eq!(&x + &BigInt::zero(), BigInt::from(9));
    assert_eq!(&x + &BigInt::from(1234115), BigInt::from(1234124));
    let sum = &x + &BigInt::from(-9);
    assert_eq!(sum, BigInt::zero());
    assert_eq!(sum.signum(), 1);
    assert_eq!(BigInt::from(-5) + BigInt::from(3), BigInt::from(-2));
    assert_eq!(BigInt::from(5) + BigInt::from(-8), BigInt::from(-3));
    let mut x = x;
    x += y;
    assert_eq!(x, BigInt::from(10));
    x += &BigInt::from(-11);
    assert_eq!(x, BigInt::from(-1));
}

#[test]
fn test_sub() {
    let (x, y, z) = (BigInt::from(9), BigInt::from(1), BigInt::from(-9));
    assert_eq!(&x - &y, BigInt::from(8));
    assert_eq!(&x - &BigInt::zero(), BigInt::from(9));
    assert_eq!(BigInt::from(1234115) - x.clone(), BigInt::from(1234106));
    assert_eq!(&z + &BigInt::from(-9), BigInt::from(-18));
    assert_eq!(&z - &BigInt::from(-9), BigInt::zero());
    assert_eq!(&x - &z, BigInt::from(18));
    assert_eq!(&y - &x, BigInt::from(-8));
    assert_eq!(BigInt::from(-3) - BigInt::from(-10), BigInt::from(7));
    let mut x = x;
    x -= y;
    assert_eq!(x, BigInt::from(8));
    x -= &BigInt::from(8);
    assert_eq!(x, BigInt::zero());
}

#[test]
fn test_neg_and_abs() {
    assert_eq!(-BigInt::from(5), BigInt::from(-5));
    assert_eq!(-&BigInt::from(-5), BigInt::from(5));
    let zero = -BigInt::zero();
    assert_eq!(zero.signum(), 1);
    assert_eq!(BigInt::from(-17).abs(), BigInt::from(17));
}

#[test]
fn test_abs_helpers() {
    let a = BigInt::from(-120);
    let b = BigInt::from(35);
    assert_eq!(a.add_abs(&b), BigInt::from(155));
    assert_eq!(a.sub_abs(&b), BigInt::from(85));
    assert!(b.less_abs(&a));
    assert!(!a.less_abs(&b));
    assert!(!a.less_abs(&a));
}

#[test]
#[should_panic(expected = "sub_abs")]
fn test_sub_abs_requires_ordered_operands() {
    BigInt::from(3).sub_abs(&BigInt::from(-4));
}

#[test]
fn test_misc() {
    assert!(BigInt::from(-1234).is_even());
    assert!(!BigInt::from(7).is_even());
    assert!(BigInt::zero().is_zero());
    assert!(!BigInt::from(10).is_zero());
    assert!(BigInt::from(-1).is_negative());
    assert_eq!(BigInt::from(-12).shl_digits(3), BigInt::from(-12000));
    assert_eq!(BigInt::zero().shl_digits(3), BigInt::zero());
}
