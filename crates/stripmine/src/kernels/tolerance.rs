//! Floating-point comparison for checking kernels against the reference.
//!
//! [`approx_equal`] is the hybrid relative/absolute test the checker uses:
//! relative for ordinary magnitudes, absolute once the expected value drops
//! below the tolerance itself, where relative error stops meaning anything.

use crate::error::Mismatch;

/// `|actual - expected| < rel_tol * max(|expected|, rel_tol)`.
///
/// NaN on either side never compares equal.
#[must_use]
pub fn approx_equal(expected: f32, actual: f32, rel_tol: f32) -> bool {
    let scale = rel_tol * expected.abs().max(rel_tol);
    (actual - expected).abs() < scale
}

/// Every index where `actual` is not [`approx_equal`] to `expected`.
///
/// # Panics
/// Panics if the slices differ in length.
#[must_use]
pub fn find_mismatches(expected: &[f32], actual: &[f32], rel_tol: f32) -> Vec<Mismatch> {
    assert_eq!(
        expected.len(),
        actual.len(),
        "slice length mismatch: {} vs {}",
        expected.len(),
        actual.len()
    );
    expected
        .iter()
        .zip(actual)
        .enumerate()
        .filter(|&(_, (&e, &a))| !approx_equal(e, a, rel_tol))
        .map(|(index, (&expected, &actual))| Mismatch {
            index,
            expected,
            actual,
        })
        .collect()
}

/// Representable `f32` values between `a` and `b`, counted across zero.
///
/// `+0.0` and `-0.0` are 0 apart; any NaN gives `u32::MAX`.
#[must_use]
pub fn ulp_distance(a: f32, b: f32) -> u32 {
    if a.is_nan() || b.is_nan() {
        return u32::MAX;
    }
    let (oa, ob) = (ordered_bits(a), ordered_bits(b));
    u32::try_from(oa.abs_diff(ob)).unwrap_or(u32::MAX)
}

/// Map an `f32` onto a line where integer order matches float order and both
/// zeros coincide.
fn ordered_bits(v: f32) -> i64 {
    let bits = i64::from(v.to_bits() & 0x7fff_ffff);
    if v.is_sign_negative() { -bits } else { bits }
}
