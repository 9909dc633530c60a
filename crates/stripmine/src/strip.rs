//! Strip partitioning and strip observers.
//!
//! [`Strips`] walks `[0, n)` left to right, asking the capability query for
//! each width. The kernel consumes it; tests and the `widths` command consume it
//! directly to check the partition without touching any data.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::capability::CapabilityQuery;
use crate::config::ElementGroup;

/// Active sub-range of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strip {
    pub offset: usize,
    pub width: usize,
}

impl Strip {
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.width
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// Iterator over the strips covering `[0, n)`.
///
/// Issues exactly one capability query per yielded strip and none once the
/// remaining count reaches zero.
///
/// # Panics
/// `next` panics if the query grants zero elements while elements remain, or
/// grants more than remain. Either would stall the loop or overrun the buffers.
#[derive(Debug, Clone)]
pub struct Strips<Q> {
    query: Q,
    group: ElementGroup,
    offset: usize,
    remaining: usize,
}

/// Partition `n` elements into hardware-sized strips.
pub fn strips<Q: CapabilityQuery>(query: Q, group: ElementGroup, n: usize) -> Strips<Q> {
    Strips {
        query,
        group,
        offset: 0,
        remaining: n,
    }
}

impl<Q> Strips<Q> {
    /// Elements not yet covered by a yielded strip.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<Q: CapabilityQuery> Iterator for Strips<Q> {
    type Item = Strip;

    fn next(&mut self) -> Option<Strip> {
        if self.remaining == 0 {
            return None;
        }
        let width = self.query.query(self.remaining, self.group);
        assert!(
            width != 0,
            "capability query granted 0 of {} remaining element(s) at offset {} ({}): no forward progress",
            self.remaining,
            self.offset,
            self.group
        );
        assert!(
            width <= self.remaining,
            "capability query granted {width} element(s) but only {} remain at offset {} ({})",
            self.remaining,
            self.offset,
            self.group
        );
        let strip = Strip {
            offset: self.offset,
            width,
        };
        self.offset += width;
        self.remaining -= width;
        Some(strip)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            (0, Some(0))
        } else {
            (1, Some(self.remaining))
        }
    }
}

impl<Q: CapabilityQuery> FusedIterator for Strips<Q> {}

// ────────────────────────────────────────────────────────────────────────────
// Observers
// ────────────────────────────────────────────────────────────────────────────

/// Side channel for diagnostics, called once per strip after the store.
///
/// `x` is the loaded input strip and `y` the freshly stored output strip.
/// The unit observer `()` does nothing and is what the plain kernel entry
/// points use.
pub trait StripObserver {
    fn on_strip(&mut self, strip: Strip, x: &[f32], y: &[f32]);
}

impl StripObserver for () {
    #[inline(always)]
    fn on_strip(&mut self, _strip: Strip, _x: &[f32], _y: &[f32]) {}
}

/// Records the partition.
impl StripObserver for Vec<Strip> {
    fn on_strip(&mut self, strip: Strip, _x: &[f32], _y: &[f32]) {
        self.push(strip);
    }
}

impl<O: StripObserver + ?Sized> StripObserver for &mut O {
    fn on_strip(&mut self, strip: Strip, x: &[f32], y: &[f32]) {
        (**self).on_strip(strip, x, y);
    }
}

/// Emits one `tracing` event per strip at TRACE level.
#[cfg(feature = "trace")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceObserver;

#[cfg(feature = "trace")]
impl StripObserver for TraceObserver {
    fn on_strip(&mut self, strip: Strip, x: &[f32], y: &[f32]) {
        tracing::trace!(
            offset = strip.offset,
            width = strip.width,
            x = ?x,
            y = ?y,
            "strip"
        );
    }
}
