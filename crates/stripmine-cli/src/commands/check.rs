use std::path::PathBuf;

use stripmine::kernels::Backend;
use stripmine::kernels::saxpy::{saxpy_scalar, saxpy_stripmined_observed};
use stripmine::kernels::tolerance::find_mismatches;
use stripmine::strip::{Strip, StripObserver, TraceObserver};
use stripmine::testdata::TestVector;

pub struct CheckOptions {
    pub vector: Option<PathBuf>,
    pub vlen: Option<usize>,
    pub tolerance: f32,
    pub scalar: bool,
    pub verbose: bool,
}

/// Prints each strip's offset, width and loaded `x` values.
struct PrintObserver;

impl StripObserver for PrintObserver {
    fn on_strip(&mut self, strip: Strip, x: &[f32], _y: &[f32]) {
        let values: Vec<String> = x.iter().map(|v| format!("{v:.6}")).collect();
        println!(
            "strip @{:<4} vl={:<3} x: {}",
            strip.offset,
            strip.width,
            values.join(" ")
        );
    }
}

pub fn run(opts: &CheckOptions) -> Result<(), Box<dyn std::error::Error>> {
    let vector = match &opts.vector {
        Some(path) => TestVector::load(path)?,
        None => TestVector::fixture(),
    };
    let (unit, vlen_bits) = super::vector_unit(opts.vlen)?;
    let backend = if opts.scalar {
        Backend::Scalar
    } else {
        Backend::detect()
    };
    let n = vector.len();
    tracing::debug!(n, vlen_bits, backend = backend.name(), a = vector.a, "running check");

    let mut golden = vector.y.clone();
    let mut actual = vector.y.clone();
    saxpy_scalar(n, vector.a, &vector.x, &mut golden);

    let mut observer: Box<dyn StripObserver> = if opts.verbose {
        Box::new(PrintObserver)
    } else {
        Box::new(TraceObserver)
    };
    saxpy_stripmined_observed(
        &*unit,
        backend,
        n,
        vector.a,
        &vector.x,
        &mut actual,
        &mut *observer,
    );

    let mismatches = find_mismatches(&golden, &actual, opts.tolerance);
    for m in &mismatches {
        println!("{m}");
    }

    if mismatches.is_empty() {
        println!("pass ({n} element(s), VLEN={vlen_bits}, {})", backend.name());
        Ok(())
    } else {
        Err(format!(
            "{} of {n} element(s) outside tolerance {}",
            mismatches.len(),
            opts.tolerance
        )
        .into())
    }
}
