//! Range handles vended by the host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous span of document content.
///
/// Positions are host-defined ordinals; the span is half-open
/// (`start..end`). Handles are only meaningful to the host that produced
/// them and only for the document state they were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeHandle {
    /// First position in the range
    pub start: usize,

    /// One past the last position in the range
    pub end: usize,
}

impl RangeHandle {
    /// Create a range; `end` is clamped up to `start`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// A range covering a single position.
    pub fn single(position: usize) -> Self {
        Self::new(position, position + 1)
    }

    /// Smallest range covering both `self` and `other`.
    pub fn expand_to(&self, other: &RangeHandle) -> RangeHandle {
        RangeHandle::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Check if `other` lies entirely within this range.
    pub fn contains(&self, other: &RangeHandle) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check if the two ranges share at least one position.
    pub fn intersects(&self, other: &RangeHandle) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if the range holds no positions.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Number of positions covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }
}

impl fmt::Display for RangeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_to() {
        let a = RangeHandle::single(2);
        let b = RangeHandle::new(5, 7);
        assert_eq!(a.expand_to(&b), RangeHandle::new(2, 7));
        assert_eq!(b.expand_to(&a), RangeHandle::new(2, 7));
    }

    #[test]
    fn test_contains_and_intersects() {
        let outer = RangeHandle::new(0, 10);
        assert!(outer.contains(&RangeHandle::new(3, 4)));
        assert!(!outer.contains(&RangeHandle::new(9, 11)));
        assert!(outer.intersects(&RangeHandle::new(9, 11)));
        assert!(!outer.intersects(&RangeHandle::new(10, 12)));
    }

    #[test]
    fn test_new_clamps_inverted_end() {
        let r = RangeHandle::new(5, 2);
        assert!(r.is_collapsed());
        assert_eq!(r.len(), 0);
        assert_eq!(r.to_string(), "5..5");
    }
}
