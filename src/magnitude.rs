//! Digit-level primitives over little-endian base-10 magnitudes.
//!
//! Every routine accepts slices that may carry superfluous high zero digits (the
//! Karatsuba split produces them) and returns a trimmed, never-empty digit vector.

use std::cmp::Ordering;

use crate::big_num_constants::RADIX;

/// Number of digits once high zeros are ignored, at least 1.
#[inline]
pub(crate) fn significant_len(mag: &[u8]) -> usize {
    mag.iter().rposition(|&d| d != 0).map_or(1, |pos| pos + 1)
}

/// Drops high zero digits, keeping a single `0` for the zero magnitude.
pub(crate) fn trim(mag: &mut Vec<u8>) {
    let len = significant_len(mag);
    mag.truncate(len);
    if mag.is_empty() {
        mag.push(0);
    }
}

#[inline]
pub(crate) fn is_zero(mag: &[u8]) -> bool {
    mag.iter().all(|&d| d == 0)
}

/// |a| + |b|
pub(crate) fn add_abs(a: &[u8], b: &[u8]) -> Vec<u8> {
    let max_len = a.len().max(b.len());
    let mut result = vec![0u8; max_len + 1];
    let mut carry = 0;
    for (i, slot) in result.iter_mut().take(max_len).enumerate() {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        let sum = x + y + carry;
        *slot = sum % RADIX as u8;
        carry = sum / RADIX as u8;
    }
    result[max_len] = carry;
    trim(&mut result);
    result
}

/// |a| - |b|, the caller guarantees |a| >= |b|.
pub(crate) fn sub_abs(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(!less_abs(a, b), "sub_abs: minuend smaller than subtrahend");
    let mut result = vec![0u8; a.len()];
    let mut borrow = 0i8;
    for (i, slot) in result.iter_mut().enumerate() {
        let x = a[i] as i8;
        let y = b.get(i).copied().unwrap_or(0) as i8;
        let mut diff = x - y - borrow;
        if diff < 0 {
            diff += RADIX as i8;
            borrow = 1;
        } else {
            borrow = 0;
        }
        *slot = diff as u8;
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut result);
    result
}

/// Compares magnitudes: length first, then from the most significant digit down.
pub(crate) fn cmp_abs(a: &[u8], b: &[u8]) -> Ordering {
    let a_len = significant_len(a);
    let b_len = significant_len(b);
    if a_len != b_len {
        return a_len.cmp(&b_len);
    }
    for i in (0..a_len).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

#[inline]
pub(crate) fn less_abs(a: &[u8], b: &[u8]) -> bool {
    cmp_abs(a, b) == Ordering::Less
}

/// Multiplies by `10^n` by inserting `n` zero digits at the least-significant end.
pub(crate) fn shl_digits(mag: &[u8], n: usize) -> Vec<u8> {
    if is_zero(mag) {
        return vec![0];
    }
    let len = significant_len(mag);
    let mut shifted = Vec::with_capacity(len + n);
    shifted.resize(n, 0);
    shifted.extend_from_slice(&mag[..len]);
    shifted
}

#[test]
fn test_add_abs() {
    assert_eq!(add_abs(&[9], &[1]), vec![0, 1]);
    assert_eq!(add_abs(&[9, 9, 9], &[1]), vec![0, 0, 0, 1]);
    assert_eq!(add_abs(&[0], &[0]), vec![0]);
    // padded operands still give a canonical result
    assert_eq!(add_abs(&[2, 0, 0], &[3, 0]), vec![5]);
}

#[test]
fn test_sub_abs() {
    assert_eq!(sub_abs(&[0, 1], &[1]), vec![9]);
    assert_eq!(sub_abs(&[0, 0, 0, 1], &[1]), vec![9, 9, 9]);
    assert_eq!(sub_abs(&[5, 1, 1, 4, 3, 2, 1], &[9]), vec![6, 0, 1, 4, 3, 2, 1]);
    assert_eq!(sub_abs(&[7, 7], &[7, 7, 0]), vec![0]);
}

#[test]
fn test_cmp_abs() {
    assert!(less_abs(&[9], &[0, 1]));
    assert!(!less_abs(&[0, 1], &[9]));
    assert!(less_abs(&[1, 2], &[2, 2]));
    assert!(!less_abs(&[2, 2], &[2, 2]));
    assert_eq!(cmp_abs(&[3, 0, 0], &[3]), Ordering::Equal);
    assert_eq!(cmp_abs(&[0, 0, 1], &[9, 9]), Ordering::Greater);
}

#[test]
fn test_shl_digits() {
    assert_eq!(shl_digits(&[3, 2, 1], 2), vec![0, 0, 3, 2, 1]);
    assert_eq!(shl_digits(&[0], 5), vec![0]);
    assert_eq!(shl_digits(&[4, 0], 1), vec![0, 4]);
}

#[test]
fn test_trim() {
    let mut v = vec![1, 2, 0, 0];
    trim(&mut v);
    assert_eq!(v, vec![1, 2]);
    let mut v = vec![0, 0, 0];
    trim(&mut v);
    assert_eq!(v, vec![0]);
    let mut v = vec![];
    trim(&mut v);
    assert_eq!(v, vec![0]);
}
