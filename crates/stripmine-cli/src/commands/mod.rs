pub mod check;
pub mod info;
pub mod widths;

use stripmine::capability::{CapabilityQuery, EmulatedVector, HostVector};
use stripmine::config::validate_vlen;

/// The vector unit to run on: emulated at `vlen` bits, or the host.
pub fn vector_unit(vlen: Option<usize>) -> Result<(Box<dyn CapabilityQuery>, usize), Box<dyn std::error::Error>> {
    match vlen {
        Some(bits) => {
            let bits = validate_vlen(bits)?;
            Ok((Box::new(EmulatedVector::new(bits)), bits))
        }
        None => {
            let host = HostVector::detect();
            let bits = host.vlen_bits();
            Ok((Box::new(host), bits))
        }
    }
}
