//! Shared helpers for the SAXPY falsification tests.

#![allow(dead_code)]

use stripmine::Strip;
use stripmine::kernels::tolerance::approx_equal;

/// Asserts every element in a slice is finite (not NaN or infinite).
pub fn assert_all_finite(slice: &[f32]) {
    for (i, &val) in slice.iter().enumerate() {
        assert!(val.is_finite(), "Element [{i}] is not finite: {val}");
    }
}

/// Asserts `actual` matches `expected` element-wise at relative tolerance `tol`.
pub fn assert_approx_slice(expected: &[f32], actual: &[f32], tol: f32) {
    assert_eq!(expected.len(), actual.len(), "length mismatch");
    for (i, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        assert!(
            approx_equal(e, a, tol),
            "Element [{i}]: expected {e}, got {a} (tol={tol})"
        );
    }
}

/// Asserts strips are non-empty, contiguous from 0, and end exactly at `n`.
pub fn assert_tiles(strips: &[Strip], n: usize) {
    let mut next = 0;
    for (k, s) in strips.iter().enumerate() {
        assert!(s.width >= 1, "strip {k} is empty");
        assert_eq!(s.offset, next, "strip {k} starts at {} not {next}", s.offset);
        next = s.end();
    }
    assert_eq!(next, n, "strips cover {next} of {n} elements");
}

/// Deterministic pseudo-random `f32` values in roughly `[-scale, scale)`.
pub fn pseudo_random(n: usize, seed: u32, scale: f32) -> Vec<f32> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state as f32 / u32::MAX as f32 * 2.0 - 1.0) * scale
        })
        .collect()
}
