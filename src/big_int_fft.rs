//! Multiplication by convolution through a complex, double-precision FFT.
//!
//! The digit sequences are treated as polynomial coefficients, transformed, multiplied
//! pointwise and transformed back. The real parts, rounded, are the raw (possibly
//! `>= 10`) column sums of the product; a final carry pass turns them into digits.
//!
//! Exactness rests on `FFT_MAX_DIGITS`: operands longer than that never reach the
//! transform and are multiplied with Karatsuba. Below it the double-precision error
//! stays far under one half, so rounding recovers every coefficient.
//!
//! The `FFT_ROUNDING_MARGIN` check is a drift detector on top of that, not a proof. A
//! coefficient off by more than one half rounds to the wrong integer and can then look
//! close to it. When the check does trip, the product is recomputed with Karatsuba.

use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

use log::{debug, warn};

use crate::big_int_mul::mul_karatsuba;
use crate::big_num_constants::*;
use crate::magnitude::{self, significant_len};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }
    fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Complex::new(cos, sin)
    }
    fn scale(self, k: f64) -> Self {
        Complex::new(self.re * k, self.im * k)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self::Output {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self::Output {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self::Output {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// Recursive radix-2 Cooley-Tukey transform, `a.len()` must be a power of two.
/// The inverse uses the conjugate angle; scaling by `1/n` is left to the caller.
pub(crate) fn fft(a: &mut [Complex], invert: bool) {
    let n = a.len();
    debug_assert!(n.is_power_of_two());
    if n == 1 {
        return;
    }

    let mut even: Vec<Complex> = a.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex> = a.iter().skip(1).step_by(2).copied().collect();
    fft(&mut even, invert);
    fft(&mut odd, invert);

    let sign = if invert { 1.0 } else { -1.0 };
    let step = sign * 2.0 * PI / n as f64;
    let half = n / 2;
    for i in 0..half {
        // computed per index instead of by repeated multiplication, which drifts
        let w = Complex::from_angle(step * i as f64);
        let t = w * odd[i];
        a[i] = even[i] + t;
        a[i + half] = even[i] - t;
    }
}

/// Column sums of the product of two magnitudes, or `None` when a coefficient lands
/// more than `margin` away from its nearest integer.
pub(crate) fn convolve(x: &[u8], y: &[u8], margin: f64) -> Option<Vec<u64>> {
    // at least twice the longer input so the cyclic convolution cannot wrap around
    let n = (x.len().max(y.len())).next_power_of_two() * 2;

    let mut fx = vec![Complex::default(); n];
    let mut fy = vec![Complex::default(); n];
    for (slot, &d) in fx.iter_mut().zip(x) {
        slot.re = d as f64;
    }
    for (slot, &d) in fy.iter_mut().zip(y) {
        slot.re = d as f64;
    }

    fft(&mut fx, false);
    fft(&mut fy, false);
    for (a, &b) in fx.iter_mut().zip(fy.iter()) {
        *a = *a * b;
    }
    fft(&mut fx, true);

    let inv_n = 1.0 / n as f64;
    let mut worst = 0.0_f64;
    let mut columns = Vec::with_capacity(n);
    for c in fx {
        let re = c.scale(inv_n).re;
        let rounded = re.round();
        worst = worst.max((re - rounded).abs());
        columns.push(rounded.max(0.0) as u64);
    }
    if worst > margin {
        warn!(
            "fft rounding error {} exceeds margin {} for {}x{} digits",
            worst, margin, x.len(), y.len()
        );
        return None;
    }
    Some(columns)
}

/// Turns raw column sums into base-10 digits.
pub(crate) fn normalize_carries(columns: Vec<u64>) -> Vec<u8> {
    let radix = RADIX as u64;
    let mut digits = Vec::with_capacity(columns.len() + 1);
    let mut carry = 0u64;
    for column in columns {
        let value = column + carry;
        digits.push((value % radix) as u8);
        carry = value / radix;
    }
    while carry > 0 {
        digits.push((carry % radix) as u8);
        carry /= radix;
    }
    magnitude::trim(&mut digits);
    digits
}

pub(crate) fn fits_fft_precision(x_len: usize, y_len: usize, max_digits: usize) -> bool {
    x_len.max(y_len) <= max_digits
}

pub(crate) fn mul_fft(x: &[u8], y: &[u8]) -> Vec<u8> {
    mul_fft_bounded(x, y, FFT_MAX_DIGITS, FFT_ROUNDING_MARGIN)
}

/// `mul_fft` with explicit guards: operands longer than `max_digits`, or a transform
/// deviating by more than `margin`, are multiplied with Karatsuba instead.
pub(crate) fn mul_fft_bounded(x: &[u8], y: &[u8], max_digits: usize, margin: f64) -> Vec<u8> {
    let x = &x[..significant_len(x)];
    let y = &y[..significant_len(y)];
    if magnitude::is_zero(x) || magnitude::is_zero(y) {
        return vec![0];
    }
    if !fits_fft_precision(x.len(), y.len(), max_digits) {
        debug!(
            "{}x{} digits exceed the fft precision bound of {}, using karatsuba",
            x.len(), y.len(), max_digits
        );
        return mul_karatsuba(x, y);
    }
    match convolve(x, y, margin) {
        Some(columns) => normalize_carries(columns),
        None => mul_karatsuba(x, y),
    }
}

#[test]
fn test_fft_round_trip() {
    let input: Vec<Complex> = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]
        .iter()
        .map(|&re| Complex::new(re, 0.0))
        .collect();
    let mut a = input.clone();
    fft(&mut a, false);
    fft(&mut a, true);
    let n = a.len() as f64;
    for (got, want) in a.iter().zip(input.iter()) {
        assert!((got.re / n - want.re).abs() < 1e-9);
        assert!((got.im / n).abs() < 1e-9);
    }
}

#[test]
fn test_fft_of_impulse_is_flat() {
    let mut a = vec![Complex::default(); 16];
    a[0] = Complex::new(1.0, 0.0);
    fft(&mut a, false);
    for c in a {
        assert!((c.re - 1.0).abs() < 1e-12 && c.im.abs() < 1e-12);
    }
}

#[test]
fn test_convolve() {
    // 12 * 34: columns (2*4, 2*3 + 1*4, 1*3) little-endian
    let columns = convolve(&[2, 1], &[4, 3], FFT_ROUNDING_MARGIN).unwrap();
    assert_eq!(&columns[..3], &[8, 10, 3]);
    assert!(columns[3..].iter().all(|&c| c == 0));
    assert_eq!(normalize_carries(columns), vec![8, 0, 4]);
}

#[test]
fn test_normalize_carries() {
    assert_eq!(normalize_carries(vec![81, 0, 0, 0]), vec![1, 8]);
    assert_eq!(normalize_carries(vec![0, 0]), vec![0]);
    // carry beyond the last column is kept
    assert_eq!(normalize_carries(vec![5, 123]), vec![5, 3, 2, 1]);
}

#[test]
fn test_mul_fft_matches_schoolbook_on_thousands_of_digits() {
    use crate::big_int_mul::mul_schoolbook;

    // deterministic pseudo-random digits, biased towards 9 to stress the coefficients
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next_digit = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let d = (state % 13) as u8;
        d.min(9)
    };
    for &(x_len, y_len) in &[(4000, 4000), (5000, 37), (3001, 2999)] {
        let mut x: Vec<u8> = (0..x_len).map(|_| next_digit()).collect();
        let mut y: Vec<u8> = (0..y_len).map(|_| next_digit()).collect();
        *x.last_mut().unwrap() = 9;
        *y.last_mut().unwrap() = 9;
        let columns = convolve(&x, &y, FFT_ROUNDING_MARGIN).expect("within rounding margin");
        assert_eq!(normalize_carries(columns), mul_schoolbook(&x, &y), "{}x{}", x_len, y_len);
    }
}

#[test]
fn test_precision_bound() {
    assert!(fits_fft_precision(FFT_MAX_DIGITS, 1, FFT_MAX_DIGITS));
    assert!(!fits_fft_precision(1, FFT_MAX_DIGITS + 1, FFT_MAX_DIGITS));
}

#[test]
fn test_mul_fft_falls_back_when_rounding_check_fails() {
    use crate::big_int_mul::mul_schoolbook;

    let x: Vec<u8> = (0..97).map(|i| (i * 7 % 10) as u8).chain(Some(9)).collect();
    let y: Vec<u8> = (0..61).map(|i| (i * 3 % 10) as u8).chain(Some(8)).collect();
    // a negative margin rejects every transform, even an exact one
    assert_eq!(convolve(&x, &y, -1.0), None);
    assert_eq!(mul_fft_bounded(&x, &y, FFT_MAX_DIGITS, -1.0), mul_schoolbook(&x, &y));
}

#[test]
fn test_mul_fft_falls_back_above_size_bound() {
    use crate::big_int_mul::mul_schoolbook;

    let x: Vec<u8> = "9".repeat(40).bytes().map(|b| b - b'0').collect();
    let y: Vec<u8> = (1..=33).map(|i| (i % 10) as u8).collect();
    assert!(!fits_fft_precision(x.len(), y.len(), 32));
    assert_eq!(mul_fft_bounded(&x, &y, 32, -1.0), mul_schoolbook(&x, &y));
    assert_eq!(mul_fft_bounded(&x, &y, 40, FFT_ROUNDING_MARGIN), mul_schoolbook(&x, &y));
}
