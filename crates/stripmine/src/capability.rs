//! Capability queries: how many elements the hardware will process next.
//!
//! Every implementation honours the same contract:
//! - `query(requested, group) <= requested`
//! - `query(0, group) == 0`
//! - `query(requested, group) >= 1` whenever `requested >= 1`
//! - the answer depends only on the hardware width and `group`, never on data
//!
//! The kernel relies on the third point for forward progress and panics when
//! an implementation breaks it.

use std::cell::Cell;

use crate::config::{ElementGroup, MIN_VLEN_BITS};

/// Source of per-strip widths.
pub trait CapabilityQuery {
    /// Number of elements granted for the next strip, out of `requested`.
    fn query(&self, requested: usize, group: ElementGroup) -> usize;
}

impl<Q: CapabilityQuery + ?Sized> CapabilityQuery for &Q {
    fn query(&self, requested: usize, group: ElementGroup) -> usize {
        (**self).query(requested, group)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Emulated vector unit
// ────────────────────────────────────────────────────────────────────────────

/// A vector unit with a fixed register width, answering like `vsetvli` with
/// the simplest conforming policy: `vl = min(AVL, VLMAX)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatedVector {
    vlen_bits: usize,
}

impl EmulatedVector {
    /// # Panics
    /// Panics if `vlen_bits` cannot hold a single 32-bit element.
    #[must_use]
    pub fn new(vlen_bits: usize) -> Self {
        assert!(
            vlen_bits >= 32,
            "vector register of {vlen_bits} bits cannot hold one element"
        );
        Self { vlen_bits }
    }

    #[must_use]
    pub fn vlen_bits(&self) -> usize {
        self.vlen_bits
    }
}

impl CapabilityQuery for EmulatedVector {
    fn query(&self, requested: usize, group: ElementGroup) -> usize {
        requested.min(group.vlmax(self.vlen_bits))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Host vector unit
// ────────────────────────────────────────────────────────────────────────────

/// The vector unit of the machine running the code.
///
/// On RISC-V with the `v` extension enabled at compile time, queries execute
/// a real `vsetvli`. Elsewhere the register width is detected once at
/// construction and queries are answered arithmetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostVector {
    vlen_bits: usize,
}

impl HostVector {
    #[must_use]
    pub fn detect() -> Self {
        Self {
            vlen_bits: detect_vlen_bits(),
        }
    }

    #[must_use]
    pub fn vlen_bits(&self) -> usize {
        self.vlen_bits
    }
}

impl Default for HostVector {
    fn default() -> Self {
        Self::detect()
    }
}

impl CapabilityQuery for HostVector {
    fn query(&self, requested: usize, group: ElementGroup) -> usize {
        #[cfg(all(target_arch = "riscv64", target_feature = "v"))]
        {
            rvv::vsetvl_e32(requested, group.grouping_factor)
        }
        #[cfg(not(all(target_arch = "riscv64", target_feature = "v")))]
        {
            requested.min(group.vlmax(self.vlen_bits))
        }
    }
}

#[cfg(all(target_arch = "riscv64", target_feature = "v"))]
fn detect_vlen_bits() -> usize {
    rvv::vlenb() * 8
}

#[cfg(target_arch = "x86_64")]
fn detect_vlen_bits() -> usize {
    if is_x86_feature_detected!("avx512f") {
        512
    } else if is_x86_feature_detected!("avx") {
        256
    } else {
        MIN_VLEN_BITS
    }
}

// NEON registers are 128 bits; other targets get the smallest legal RVV width.
#[cfg(not(any(
    target_arch = "x86_64",
    all(target_arch = "riscv64", target_feature = "v")
)))]
fn detect_vlen_bits() -> usize {
    MIN_VLEN_BITS
}

#[cfg(all(target_arch = "riscv64", target_feature = "v"))]
mod rvv {
    use core::arch::asm;

    use crate::config::GroupingFactor;

    /// Vector register length in bytes.
    pub(super) fn vlenb() -> usize {
        let vlenb: usize;
        // SAFETY: reading the read-only `vlenb` CSR has no side effects.
        unsafe {
            asm!("csrr {0}, vlenb", out(reg) vlenb, options(nomem, nostack));
        }
        vlenb
    }

    /// `vsetvli` with SEW=32 and the requested LMUL; returns the granted `vl`.
    pub(super) fn vsetvl_e32(avl: usize, lmul: GroupingFactor) -> usize {
        let vl: usize;
        // SAFETY: `vsetvli` only writes `vl`/`vtype`, which no Rust code reads.
        unsafe {
            match lmul {
                GroupingFactor::M1 => asm!(
                    "vsetvli {vl}, {avl}, e32, m1, ta, ma",
                    vl = out(reg) vl, avl = in(reg) avl, options(nomem, nostack)
                ),
                GroupingFactor::M2 => asm!(
                    "vsetvli {vl}, {avl}, e32, m2, ta, ma",
                    vl = out(reg) vl, avl = in(reg) avl, options(nomem, nostack)
                ),
                GroupingFactor::M4 => asm!(
                    "vsetvli {vl}, {avl}, e32, m4, ta, ma",
                    vl = out(reg) vl, avl = in(reg) avl, options(nomem, nostack)
                ),
                GroupingFactor::M8 => asm!(
                    "vsetvli {vl}, {avl}, e32, m8, ta, ma",
                    vl = out(reg) vl, avl = in(reg) avl, options(nomem, nostack)
                ),
            }
        }
        vl
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scripted widths
// ────────────────────────────────────────────────────────────────────────────

/// Replays a fixed sequence of widths, cycling when it runs out.
///
/// Each scripted width is clamped to `requested`, so a script of positive
/// widths always satisfies the capability contract. Used to show the kernel's
/// result does not depend on the hardware width.
#[derive(Debug, Clone)]
pub struct ScriptedQuery {
    widths: Vec<usize>,
    cursor: Cell<usize>,
    calls: Cell<usize>,
}

impl ScriptedQuery {
    /// # Panics
    /// Panics if `widths` is empty.
    #[must_use]
    pub fn new(widths: Vec<usize>) -> Self {
        assert!(!widths.is_empty(), "scripted query needs at least one width");
        Self {
            widths,
            cursor: Cell::new(0),
            calls: Cell::new(0),
        }
    }

    /// How many times `query` has been called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl CapabilityQuery for ScriptedQuery {
    fn query(&self, requested: usize, _group: ElementGroup) -> usize {
        self.calls.set(self.calls.get() + 1);
        if requested == 0 {
            return 0;
        }
        let i = self.cursor.get();
        self.cursor.set((i + 1) % self.widths.len());
        self.widths[i].min(requested)
    }
}
