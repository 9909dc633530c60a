//! # stripmine
//!
//! Length-agnostic stripmined SAXPY (`y = a*x + y`) for vector units whose
//! register width is only known at runtime.
//!
//! The kernel asks a [`CapabilityQuery`] how many elements it may process,
//! handles exactly that many with one fused multiply-add per element, advances,
//! and repeats until nothing remains. The same code is correct whether the
//! hardware grants 4 or 64 elements per strip.
//!
//! ```
//! use stripmine::capability::EmulatedVector;
//! use stripmine::kernels::saxpy::{saxpy_scalar, saxpy_stripmined};
//!
//! let x = [1.0_f32, 2.0, 3.0, 4.0, 5.0];
//! let mut y = [0.5_f32; 5];
//! let mut expected = y;
//!
//! saxpy_stripmined(EmulatedVector::new(128), x.len(), 2.0, &x, &mut y);
//! saxpy_scalar(x.len(), 2.0, &x, &mut expected);
//! assert_eq!(y, expected);
//! ```
//!
//! ## Modules
//!
//! - [`capability`] — Capability queries: emulated, host-detected, scripted
//! - [`config`] — Element-group configuration (`SEW` × `LMUL`)
//! - [`strip`] — Strip partitioning and per-strip observers
//! - [`kernels`] — Scalar reference, stripmined kernel, tolerance checks
//! - [`testdata`] — Built-in fixture and YAML test vectors
//! - [`error`] — Error and mismatch types

pub mod capability;
pub mod config;
pub mod error;
pub mod kernels;
pub mod strip;
pub mod testdata;

pub use capability::CapabilityQuery;
pub use config::{ElementGroup, SAXPY_GROUP};
pub use kernels::saxpy::{saxpy, saxpy_scalar, saxpy_stripmined};
pub use strip::{Strip, StripObserver};
