//! Half-open offset intervals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open interval `[start, end)` of offsets in a coordinate space.
///
/// Note: This type does NOT enforce that `start <= end` in the constructor,
/// so that malformed windows can reach [`CoordinateSpace::query`] and be
/// rejected there with an [`InvalidRangeError`] instead of panicking here.
///
/// [`CoordinateSpace::query`]: crate::space::CoordinateSpace::query
/// [`InvalidRangeError`]: crate::error::InvalidRangeError
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Creates a new span from explicit offsets.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates the span `[start, start + len)`.
    ///
    /// # Panics
    ///
    /// Panics if `start + len` overflows `usize`.
    #[inline]
    pub fn at(start: usize, len: usize) -> Self {
        Self::new(start, start + len)
    }

    /// Returns the length of the span, or 0 if it is inverted.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no offsets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `start <= end`.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Returns true if `offset` lies inside the span.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Returns true if the two spans share at least one offset.
    ///
    /// `[0, 5)` and `[5, 10)` do not intersect, and a zero-length span
    /// intersects nothing.
    #[inline]
    pub fn intersects(&self, other: &Span) -> bool {
        self.intersection(other).is_some()
    }

    /// Returns the non-empty intersection of two spans, if any.
    pub fn intersection(&self, other: &Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Span::new(start, end))
    }

    /// Returns the span moved right by `delta`, or `None` if either bound
    /// would overflow.
    #[inline]
    pub fn shifted(&self, delta: usize) -> Option<Span> {
        Some(Span::new(
            self.start.checked_add(delta)?,
            self.end.checked_add(delta)?,
        ))
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}
