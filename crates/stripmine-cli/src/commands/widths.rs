use stripmine::config::{ElementGroup, GroupingFactor, SAXPY_GROUP};
use stripmine::strip::strips;

/// Largest element count the `widths` subcommand accepts.
pub const MAX_ELEMENTS: u64 = 1 << 24;

/// Collapse a width sequence into `(width, repeats)` runs.
///
/// A conforming query grants VLMAX until the tail, so the result stays a
/// handful of entries however long the input is.
pub fn width_runs(widths: impl IntoIterator<Item = usize>) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for width in widths {
        match runs.last_mut() {
            Some((last, repeats)) if *last == width => *repeats += 1,
            _ => runs.push((width, 1)),
        }
    }
    runs
}

/// Render runs as `4x7 3`: repeated widths get an `x<count>` suffix.
pub fn format_runs(runs: &[(usize, usize)]) -> String {
    runs.iter()
        .map(|&(width, repeats)| {
            if repeats == 1 {
                width.to_string()
            } else {
                format!("{width}x{repeats}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn run(n: u64, vlen: Option<usize>, lmul: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    if n > MAX_ELEMENTS {
        return Err(format!("element count {n} exceeds the limit of {MAX_ELEMENTS}").into());
    }
    let n = usize::try_from(n)?;
    let factors = match lmul {
        Some(s) => vec![s.parse::<GroupingFactor>()?],
        None => GroupingFactor::ALL.to_vec(),
    };
    let (unit, vlen_bits) = super::vector_unit(vlen)?;

    println!("Strip widths for n={n}, VLEN={vlen_bits}");
    println!("{}", "=".repeat(40));

    for lmul in factors {
        let group = ElementGroup::e32(lmul);
        let runs = width_runs(strips(&*unit, group, n).map(|s| s.width));
        let count: usize = runs.iter().map(|&(_, repeats)| repeats).sum();
        let marker = if group == SAXPY_GROUP { " (kernel)" } else { "" };
        println!(
            "  {group}{marker}: VLMAX={} strips={count} [{}]",
            group.vlmax(vlen_bits),
            format_runs(&runs)
        );
    }

    Ok(())
}
