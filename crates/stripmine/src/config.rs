//! Element-group configuration: element width times register grouping.
//!
//! The pair determines how many elements a single capability query can grant.
//! On RISC-V this is the `SEW`/`LMUL` pair encoded in a `vsetvli` instruction;
//! the kernel fixes it at compile time through [`SAXPY_GROUP`].

use std::fmt;
use std::str::FromStr;

use crate::error::SaxpyError;

/// Bits per vector element. The kernel only handles `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementWidth {
    E32,
}

impl ElementWidth {
    /// Width in bits.
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::E32 => 32,
        }
    }
}

/// Number of architectural vector registers logically concatenated into one
/// operand (RISC-V `LMUL`). Only the integral factors are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupingFactor {
    M1,
    M2,
    M4,
    M8,
}

impl GroupingFactor {
    pub const ALL: [Self; 4] = [Self::M1, Self::M2, Self::M4, Self::M8];

    #[must_use]
    pub const fn registers(self) -> usize {
        match self {
            Self::M1 => 1,
            Self::M2 => 2,
            Self::M4 => 4,
            Self::M8 => 8,
        }
    }
}

impl fmt::Display for GroupingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.registers())
    }
}

impl FromStr for GroupingFactor {
    type Err = SaxpyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches(['m', 'M']) {
            "1" => Ok(Self::M1),
            "2" => Ok(Self::M2),
            "4" => Ok(Self::M4),
            "8" => Ok(Self::M8),
            _ => Err(SaxpyError::InvalidGrouping(s.to_string())),
        }
    }
}

/// Element width plus grouping factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementGroup {
    pub element_width: ElementWidth,
    pub grouping_factor: GroupingFactor,
}

impl ElementGroup {
    pub const E32M1: Self = Self::e32(GroupingFactor::M1);
    pub const E32M2: Self = Self::e32(GroupingFactor::M2);
    pub const E32M4: Self = Self::e32(GroupingFactor::M4);
    pub const E32M8: Self = Self::e32(GroupingFactor::M8);

    /// 32-bit elements with the given grouping factor.
    #[must_use]
    pub const fn e32(grouping_factor: GroupingFactor) -> Self {
        Self {
            element_width: ElementWidth::E32,
            grouping_factor,
        }
    }

    /// Maximum elements per query for a register of `vlen_bits` bits.
    ///
    /// `VLMAX = VLEN / SEW * LMUL`.
    #[must_use]
    pub const fn vlmax(self, vlen_bits: usize) -> usize {
        vlen_bits / self.element_width.bits() * self.grouping_factor.registers()
    }
}

impl fmt::Display for ElementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "e{}{}",
            self.element_width.bits(),
            self.grouping_factor
        )
    }
}

/// Configuration the SAXPY kernel is built with: `f32` elements, eight
/// registers per operand.
pub const SAXPY_GROUP: ElementGroup = ElementGroup::E32M8;

/// Smallest vector register a conforming RISC-V V implementation may have.
pub const MIN_VLEN_BITS: usize = 128;

/// Largest vector register the RISC-V V extension permits.
pub const MAX_VLEN_BITS: usize = 65_536;

/// Validate an emulated register width: a power of two within the ISA's range.
///
/// # Errors
///
/// Returns [`SaxpyError::InvalidVlen`] when `vlen_bits` is not a power of two
/// or lies outside `MIN_VLEN_BITS..=MAX_VLEN_BITS`.
pub fn validate_vlen(vlen_bits: usize) -> Result<usize, SaxpyError> {
    if vlen_bits.is_power_of_two() && (MIN_VLEN_BITS..=MAX_VLEN_BITS).contains(&vlen_bits) {
        Ok(vlen_bits)
    } else {
        Err(SaxpyError::InvalidVlen(vlen_bits))
    }
}
