//! SAXPY kernel: `y[i] = a * x[i] + y[i]` over `f32`.
//!
//! - `fn saxpy_scalar(...)` — element loop, the reference every other path matches
//! - `fn saxpy_stripmined(...)` — stripmined loop driven by a capability query
//! - `fn fma_strip_scalar(...)` / `unsafe fn fma_strip_avx2(...)` — strip bodies
//!
//! Every path rounds once per element (fused multiply-add), so for the same
//! inputs all of them produce bit-identical output whatever the strip widths.

use super::Backend;
use crate::capability::{CapabilityQuery, HostVector};
use crate::config::SAXPY_GROUP;
use crate::strip::{StripObserver, strips};

// ────────────────────────────────────────────────────────────────────────────
// Scalar reference
// ────────────────────────────────────────────────────────────────────────────

/// Scalar SAXPY over the first `n` elements (reference).
///
/// # Panics
/// Panics if `x` or `y` has fewer than `n` elements.
pub fn saxpy_scalar(n: usize, a: f32, x: &[f32], y: &mut [f32]) {
    for (xi, yi) in x[..n].iter().zip(y[..n].iter_mut()) {
        *yi = a.mul_add(*xi, *yi);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strip bodies
// ────────────────────────────────────────────────────────────────────────────

/// One strip, element by element.
///
/// # Panics
/// Panics if `x.len() != y.len()`.
#[inline]
pub fn fma_strip_scalar(a: f32, x: &[f32], y: &mut [f32]) {
    assert_eq!(x.len(), y.len(), "strip length mismatch");
    for (xi, yi) in x.iter().zip(y.iter_mut()) {
        *yi = a.mul_add(*xi, *yi);
    }
}

/// One strip with 256-bit fused multiply-add, scalar FMA for the tail.
///
/// # Safety
/// Requires AVX2 and FMA. Caller must verify with
/// `Backend::Avx2Fma.is_supported()`.
///
/// # Panics
/// Panics if `x.len() != y.len()`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
pub unsafe fn fma_strip_avx2(a: f32, x: &[f32], y: &mut [f32]) {
    use std::arch::x86_64::{_mm256_fmadd_ps, _mm256_loadu_ps, _mm256_set1_ps, _mm256_storeu_ps};

    assert_eq!(x.len(), y.len(), "strip length mismatch");
    let n = x.len();
    // SAFETY: caller guarantees AVX2+FMA; every access is below `n`.
    unsafe {
        let va = _mm256_set1_ps(a);
        let mut i = 0;
        while i + 8 <= n {
            let vx = _mm256_loadu_ps(x.as_ptr().add(i));
            let vy = _mm256_loadu_ps(y.as_ptr().add(i));
            _mm256_storeu_ps(y.as_mut_ptr().add(i), _mm256_fmadd_ps(va, vx, vy));
            i += 8;
        }
        for j in i..n {
            y[j] = a.mul_add(x[j], y[j]);
        }
    }
}

#[inline]
fn fma_strip(backend: Backend, a: f32, x: &[f32], y: &mut [f32]) {
    match backend {
        Backend::Scalar => fma_strip_scalar(a, x, y),
        #[cfg(target_arch = "x86_64")]
        // SAFETY: `saxpy_stripmined_observed` downgrades unsupported backends.
        Backend::Avx2Fma => unsafe { fma_strip_avx2(a, x, y) },
        #[cfg(not(target_arch = "x86_64"))]
        Backend::Avx2Fma => fma_strip_scalar(a, x, y),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Stripmined kernel
// ────────────────────────────────────────────────────────────────────────────

/// SAXPY on the host vector unit with the best strip body available.
///
/// # Panics
/// Panics if `x` or `y` has fewer than `n` elements.
pub fn saxpy(n: usize, a: f32, x: &[f32], y: &mut [f32]) {
    saxpy_stripmined(HostVector::detect(), n, a, x, y);
}

/// SAXPY with strip widths chosen by `query`.
///
/// # Panics
/// Panics if `x` or `y` has fewer than `n` elements, or if `query` breaks the
/// capability contract (grants 0 or more than requested).
pub fn saxpy_stripmined<Q: CapabilityQuery>(query: Q, n: usize, a: f32, x: &[f32], y: &mut [f32]) {
    saxpy_stripmined_observed(query, Backend::detect(), n, a, x, y, ());
}

/// The stripmined loop.
///
/// For each strip granted by `query` under [`SAXPY_GROUP`]: load the `x` and
/// `y` strips, fuse `a * vx + vy`, store into `y`, then report the strip to
/// `observer`. An unsupported `backend` falls back to [`Backend::Scalar`].
///
/// # Panics
/// Panics if `x` or `y` has fewer than `n` elements, or if `query` breaks the
/// capability contract.
pub fn saxpy_stripmined_observed<Q, O>(
    query: Q,
    backend: Backend,
    n: usize,
    a: f32,
    x: &[f32],
    y: &mut [f32],
    mut observer: O,
) where
    Q: CapabilityQuery,
    O: StripObserver,
{
    let backend = backend.or_scalar();
    let x = &x[..n];
    let y = &mut y[..n];
    for strip in strips(query, SAXPY_GROUP, n) {
        let vx = &x[strip.range()];
        let vy = &mut y[strip.range()];
        fma_strip(backend, a, vx, vy);
        observer.on_strip(strip, vx, vy);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
