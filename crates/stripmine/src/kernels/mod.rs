//! Kernel implementations: scalar reference, stripmined FMA kernel, comparison.
//!
//! - [`saxpy`] — `y = a*x + y`, both the scalar reference and the
//!   stripmined kernel with its scalar and AVX2+FMA strip bodies
//! - [`tolerance`] — hybrid relative/absolute comparison and ULP distance

// Kernel code naturally uses single-character math variable names (a, x, y, n)
// and unsafe intrinsics inside unsafe fns.
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::needless_range_loop,
    clippy::float_cmp,
    clippy::doc_markdown,
    unsafe_op_in_unsafe_fn
)]

pub mod saxpy;
pub mod tolerance;

#[cfg(kani)]
mod kani_proofs;

/// Strip-body implementation used inside the stripmined loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Element loop over `f32::mul_add`.
    Scalar,
    /// x86-64 AVX2 with FMA3, eight lanes per instruction plus a scalar tail.
    Avx2Fma,
}

impl Backend {
    /// Best backend the running CPU supports.
    #[must_use]
    pub fn detect() -> Self {
        if Self::Avx2Fma.is_supported() {
            Self::Avx2Fma
        } else {
            Self::Scalar
        }
    }

    /// Whether this backend can run on the current CPU.
    #[must_use]
    pub fn is_supported(self) -> bool {
        match self {
            Self::Scalar => true,
            #[cfg(target_arch = "x86_64")]
            Self::Avx2Fma => is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma"),
            #[cfg(not(target_arch = "x86_64"))]
            Self::Avx2Fma => false,
        }
    }

    /// `self` if supported, otherwise [`Backend::Scalar`].
    #[must_use]
    pub fn or_scalar(self) -> Self {
        if self.is_supported() {
            self
        } else {
            Self::Scalar
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Avx2Fma => "avx2+fma",
        }
    }
}
