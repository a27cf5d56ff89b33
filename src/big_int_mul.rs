use std::ops::{Mul, MulAssign};

use log::trace;

use crate::BigInt;
use crate::big_int_fft;
use crate::big_num_constants::*;
use crate::magnitude::{self, add_abs, sub_abs, shl_digits, significant_len};

/// Algorithm used to multiply two magnitudes.
///
/// All strategies produce the same digits; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MulStrategy {
    /// Picks by operand size using `KARATSUBA_THRESHOLD` and `FFT_THRESHOLD`.
    #[default]
    Auto,
    /// Grade-school `O(n*m)`.
    Schoolbook,
    /// Recursive three-product split, `O(n^1.585)`.
    Karatsuba,
    /// Complex-FFT convolution, `O(n log n)`.
    Fft,
}

impl MulStrategy {
    fn select(x_len: usize, y_len: usize) -> MulStrategy {
        let shorter = x_len.min(y_len);
        if shorter < KARATSUBA_THRESHOLD {
            MulStrategy::Schoolbook
        } else if shorter < FFT_THRESHOLD {
            MulStrategy::Karatsuba
        } else {
            MulStrategy::Fft
        }
    }
}

// 实现乘法
impl BigInt {
    pub fn mul_with(&self, val: &BigInt, strategy: MulStrategy) -> BigInt {
        if self.is_zero() || val.is_zero() {
            return BigInt::zero();
        }
        let x = self.digits();
        let y = val.digits();
        let strategy = match strategy {
            MulStrategy::Auto => MulStrategy::select(x.len(), y.len()),
            s => s,
        };
        trace!("multiplying {}x{} digits with {:?}", x.len(), y.len(), strategy);

        let mag = match strategy {
            MulStrategy::Schoolbook => mul_schoolbook(x, y),
            MulStrategy::Karatsuba => mul_karatsuba(x, y),
            MulStrategy::Fft => big_int_fft::mul_fft(x, y),
            MulStrategy::Auto => unreachable!("Auto is resolved above"),
        };
        BigInt::new(mag, self.signum() * val.signum())
    }
    pub fn schoolbook_multiply(&self, val: &BigInt) -> BigInt {
        self.mul_with(val, MulStrategy::Schoolbook)
    }
    /// Multiplies using the Karatsuba algorithm. Three half-size products replace the
    /// four of the grade-school method, giving `O(n^(log2 3))`.
    /// See: http://en.wikipedia.org/wiki/Karatsuba_algorithm
    pub fn karatsuba_multiply(&self, val: &BigInt) -> BigInt {
        self.mul_with(val, MulStrategy::Karatsuba)
    }
    pub fn fft_multiply(&self, val: &BigInt) -> BigInt {
        self.mul_with(val, MulStrategy::Fft)
    }
    pub fn square(&self) -> BigInt {
        self.mul_with(self, MulStrategy::Auto)
    }
}

pub(crate) fn mul_schoolbook(x: &[u8], y: &[u8]) -> Vec<u8> {
    if magnitude::is_zero(x) || magnitude::is_zero(y) {
        return vec![0];
    }
    let radix = RADIX as u16;
    let mut z = vec![0u8; x.len() + y.len()];
    for (x_index, &xd) in x.iter().enumerate() {
        let mut carry: u16 = 0;
        for (y_index, &yd) in y.iter().enumerate() {
            let product = (xd as u16) * (yd as u16) + z[x_index + y_index] as u16 + carry;
            z[x_index + y_index] = (product % radix) as u8;
            carry = product / radix;
        }
        // nothing has been written at x_index + y.len() yet
        z[x_index + y.len()] = carry as u8;
    }
    magnitude::trim(&mut z);
    z
}

/// Karatsuba on magnitudes. Both operands are zero-padded at the high end to a common
/// even length so they split into equal halves; padding changes only the representation.
pub(crate) fn mul_karatsuba(x: &[u8], y: &[u8]) -> Vec<u8> {
    let x = &x[..significant_len(x)];
    let y = &y[..significant_len(y)];
    if x.len() == 1 || y.len() == 1 {
        return mul_schoolbook(x, y);
    }

    let mut len = x.len().max(y.len());
    if len % 2 == 1 {
        len += 1;
    }
    let mut xp = x.to_vec();
    xp.resize(len, 0);
    let mut yp = y.to_vec();
    yp.resize(len, 0);

    let half = len / 2;
    let (xl, xh) = xp.split_at(half);
    let (yl, yh) = yp.split_at(half);

    let p_lo = mul_karatsuba(xl, yl);
    let p_hi = mul_karatsuba(xh, yh);
    let p_mid = mul_karatsuba(&add_abs(xl, xh), &add_abs(yl, yh));
    let p_mid = sub_abs(&sub_abs(&p_mid, &p_lo), &p_hi);

    // result = p_hi * 10^(2*half) + p_mid * 10^half + p_lo
    let result = add_abs(&shl_digits(&p_hi, 2 * half), &shl_digits(&p_mid, half));
    add_abs(&result, &p_lo)
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        self.mul_with(rhs, MulStrategy::Auto)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

#[cfg(test)]
const ALL_STRATEGIES: [MulStrategy; 4] = [
    MulStrategy::Auto,
    MulStrategy::Schoolbook,
    MulStrategy::Karatsuba,
    MulStrategy::Fft,
];

#[test]
fn test_mul_schoolbook() {
    assert_eq!(mul_schoolbook(&[9], &[9]), vec![1, 8]);
    assert_eq!(mul_schoolbook(&[9, 9, 9], &[9, 9]), vec![1, 0, 9, 8, 9]);
    assert_eq!(mul_schoolbook(&[0], &[4, 3, 2, 1]), vec![0]);
    assert_eq!(mul_schoolbook(&[5, 0, 0], &[2]), vec![0, 1]);
}

#[test]
fn test_mul_karatsuba_padding() {
    // odd, unequal lengths and padded zero halves
    assert_eq!(mul_karatsuba(&[3, 2, 1], &[2, 1]), vec![6, 7, 4, 1]);
    assert_eq!(mul_karatsuba(&[0, 1], &[1]), vec![0, 1]);
    assert_eq!(mul_karatsuba(&[1, 0, 0, 0, 0, 0, 0, 1], &[9, 9]), mul_schoolbook(&[1, 0, 0, 0, 0, 0, 0, 1], &[9, 9]));
    assert_eq!(mul_karatsuba(&[0, 0, 0, 0], &[7, 7, 7]), vec![0]);
}

#[test]
fn test_mul() {
    let (x, y, z, w) = (BigInt::from(9), BigInt::from(1), BigInt::from(-9), BigInt::from(6));
    for strategy in ALL_STRATEGIES {
        assert_eq!(x.mul_with(&y, strategy), BigInt::from(9));
        assert_eq!(x.mul_with(&z, strategy), BigInt::from(-81));
        assert_eq!(z.mul_with(&z, strategy), BigInt::from(81));
        let zero = z.mul_with(&BigInt::zero(), strategy);
        assert_eq!(zero, BigInt::zero());
        assert_eq!(zero.signum(), 1);
    }
    let mut x = x;
    x *= w;
    assert_eq!(x, BigInt::from(54));
    x *= &BigInt::from(-2);
    assert_eq!(x, BigInt::from(-108));
}

#[test]
fn test_mul_karatsuba() {
    let a: BigInt = "12345678987654321".parse().unwrap();
    let expected: BigInt = "152415789666209420210333789971041".parse().unwrap();
    assert_eq!(a.karatsuba_multiply(&a), expected);
    assert_eq!(a.schoolbook_multiply(&a), expected);
    assert_eq!(a.fft_multiply(&a), expected);
    assert_eq!((-&a).karatsuba_multiply(&a), -expected);

    let a = BigInt::from(-11234);
    let b = BigInt::from(-34567);
    assert_eq!(a.karatsuba_multiply(&b), BigInt::from(388325678));
    assert_eq!(BigInt::from(672134).karatsuba_multiply(&BigInt::from(4545)), BigInt::from(3054849030_i64));
}

#[test]
fn test_mul_fft() {
    assert_eq!(BigInt::from(8).fft_multiply(&BigInt::from(2)), BigInt::from(16));
    let x: BigInt = "00989912".parse().unwrap();
    assert_eq!(x.fft_multiply(&BigInt::zero()), BigInt::zero());
    assert_eq!(BigInt::from(11).fft_multiply(&BigInt::from(-11)), BigInt::from(-121));
    assert_eq!(BigInt::from(-11234).fft_multiply(&BigInt::from(-34567)), BigInt::from(388325678));
    assert_eq!(BigInt::from(123).fft_multiply(&BigInt::from(-45)), BigInt::from(-5535));
    assert_eq!(BigInt::from(672134).fft_multiply(&BigInt::from(4545)), BigInt::from(3054849030_i64));
}

#[test]
fn test_mul_strategies_agree_on_large_operands() {
    // 10^k - 1 squared has a long run of carries
    let nines: BigInt = "9".repeat(300).parse().unwrap();
    let expected: BigInt = format!("{}8{}1", "9".repeat(299), "0".repeat(299)).parse().unwrap();
    for strategy in ALL_STRATEGIES {
        assert_eq!(nines.mul_with(&nines, strategy), expected, "{:?}", strategy);
    }
    let a: BigInt = "3".repeat(211).parse().unwrap();
    let b: BigInt = format!("-{}", "71".repeat(64)).parse().unwrap();
    let expected = a.schoolbook_multiply(&b);
    for strategy in ALL_STRATEGIES {
        assert_eq!(a.mul_with(&b, strategy), expected, "{:?}", strategy);
    }
}

#[test]
fn test_select() {
    assert_eq!(MulStrategy::select(1, 10_000), MulStrategy::Schoolbook);
    assert_eq!(MulStrategy::select(KARATSUBA_THRESHOLD, KARATSUBA_THRESHOLD), MulStrategy::Karatsuba);
    assert_eq!(MulStrategy::select(FFT_THRESHOLD, FFT_THRESHOLD + 1), MulStrategy::Fft);
    assert_eq!(MulStrategy::default(), MulStrategy::Auto);
}

#[test]
fn test_square() {
    assert_eq!(BigInt::from(-12).square(), BigInt::from(144));
    assert_eq!(BigInt::zero().square(), BigInt::zero());
}
