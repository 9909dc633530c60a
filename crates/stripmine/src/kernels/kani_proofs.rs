//! Kani bounded proof harnesses for the stripmined kernel.
//!
//! Promote the coverage and zero-length properties from proptest sampling to
//! bounded proof over every width sequence a conforming query could produce.
//!
//! All code here is behind `#[cfg(kani)]` and invisible to normal builds.

use super::saxpy;
use crate::capability::CapabilityQuery;
use crate::config::{ElementGroup, SAXPY_GROUP};
use crate::strip::strips;

/// A query returning an arbitrary legal width on every call.
struct AnyWidth;

impl CapabilityQuery for AnyWidth {
    fn query(&self, requested: usize, _group: ElementGroup) -> usize {
        let vl: usize = kani::any();
        kani::assume(vl <= requested);
        kani::assume(requested == 0 || vl >= 1);
        vl
    }
}

/// KANI-SX-001: strips tile `[0, n)` contiguously, ascending, summing to `n`.
/// Bound: 8 elements
#[kani::proof]
#[kani::unwind(10)]
fn verify_strips_cover_exactly() {
    let n: usize = kani::any();
    kani::assume(n <= 8);

    let mut next = 0usize;
    for s in strips(AnyWidth, SAXPY_GROUP, n) {
        assert!(s.width >= 1, "KANI-SX-001: empty strip at {}", s.offset);
        assert_eq!(s.offset, next, "KANI-SX-001: gap or overlap at {}", s.offset);
        next = s.end();
    }
    assert_eq!(next, n, "KANI-SX-001: covered {next} of {n}");
}

/// KANI-SX-002: every width sequence yields the reference result.
/// Bound: 4 elements
#[kani::proof]
#[kani::unwind(6)]
fn verify_width_independence() {
    const N: usize = 4;
    let a: f32 = kani::any();
    let x: [f32; N] = kani::any();
    let y0: [f32; N] = kani::any();
    kani::assume(a.is_finite());
    kani::assume(x.iter().all(|v| v.is_finite()));
    kani::assume(y0.iter().all(|v| v.is_finite()));

    let mut expected = y0;
    let mut actual = y0;
    saxpy::saxpy_scalar(N, a, &x, &mut expected);
    saxpy::saxpy_stripmined_observed(AnyWidth, super::Backend::Scalar, N, a, &x, &mut actual, ());

    for i in 0..N {
        assert!(
            expected[i].to_bits() == actual[i].to_bits(),
            "KANI-SX-002: index {} differs",
            i
        );
    }
}

/// KANI-SX-003: `n = 0` never touches `y`.
#[kani::proof]
fn verify_zero_length_untouched() {
    let a: f32 = kani::any();
    let y0: [f32; 2] = kani::any();
    let mut y = y0;
    saxpy::saxpy_stripmined_observed(AnyWidth, super::Backend::Scalar, 0, a, &[0.0; 2], &mut y, ());
    assert!(y[0].to_bits() == y0[0].to_bits() && y[1].to_bits() == y0[1].to_bits());
}
