//! Code point intervals and the run compactor.
//!
//! A category's code points arrive as an ascending sequence, one per data
//! line. [`RangeBuilder`] folds that sequence into maximal runs of
//! consecutive values, producing an [`IntervalList`] whose intervals are
//! disjoint, ascending and cannot be merged with their neighbours.

use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// A code point, parsed from the hex digits of a `U+XXXX` entry.
pub type CodePoint = u32;

/// The largest Unicode scalar value.
pub const MAX_UNICODE: CodePoint = 0x10FFFF;

/// Errors raised while folding code points into intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompactError {
    /// A code point was smaller than the one before it.
    #[error(
        "U+{current:04X} follows U+{previous:04X}; code points must be listed in ascending order"
    )]
    OutOfOrder {
        previous: CodePoint,
        current: CodePoint,
    },
}

/// An inclusive range of code points, `low..=high`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Interval {
    /// The first code point in the interval.
    pub low: CodePoint,
    /// The last code point in the interval (inclusive).
    pub high: CodePoint,
}

impl Interval {
    /// Create a new interval.
    #[inline]
    pub fn new(low: CodePoint, high: CodePoint) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }

    /// Create an interval holding a single code point.
    #[inline]
    pub fn single(cp: CodePoint) -> Self {
        Self { low: cp, high: cp }
    }

    /// Whether this interval contains the given code point.
    #[inline]
    pub fn contains(&self, cp: CodePoint) -> bool {
        cp >= self.low && cp <= self.high
    }

    /// Number of code points covered.
    #[inline]
    pub fn len(&self) -> u64 {
        u64::from(self.high - self.low) + 1
    }

    /// Intervals are never empty; provided for symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `other` starts immediately after this interval ends.
    #[inline]
    pub fn is_adjacent_to(&self, other: &Interval) -> bool {
        self.high.checked_add(1) == Some(other.low)
    }

    #[inline]
    pub fn to_range(&self) -> RangeInclusive<CodePoint> {
        self.low..=self.high
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}..={:#x}", self.low, self.high)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[U+{:04X}, U+{:04X}]", self.low, self.high)
    }
}

/// The ordered, maximal intervals of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalList {
    intervals: Vec<Interval>,
}

impl IntervalList {
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Compact an ascending sequence of code points.
    pub fn from_code_points<I>(points: I) -> Result<Self, CompactError>
    where
        I: IntoIterator<Item = CodePoint>,
    {
        let mut builder = RangeBuilder::new();
        for cp in points {
            builder.push(cp)?;
        }
        Ok(builder.finish())
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Lower bounds, in interval order.
    pub fn lows(&self) -> impl Iterator<Item = CodePoint> + '_ {
        self.intervals.iter().map(|iv| iv.low)
    }

    /// Upper bounds, in interval order.
    pub fn highs(&self) -> impl Iterator<Item = CodePoint> + '_ {
        self.intervals.iter().map(|iv| iv.high)
    }

    /// Every code point covered, ascending.
    pub fn code_points(&self) -> impl Iterator<Item = CodePoint> + '_ {
        self.intervals.iter().flat_map(|iv| iv.to_range())
    }

    /// Total number of code points covered by all intervals.
    pub fn code_point_count(&self) -> u64 {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// Membership test, equivalent to the generated C functions.
    pub fn contains(&self, cp: CodePoint) -> bool {
        let idx = self.intervals.partition_point(|iv| iv.high < cp);
        self.intervals
            .get(idx)
            .is_some_and(|iv| iv.contains(cp))
    }

    /// Whether the intervals are ascending, disjoint and maximal
    /// (`high[i] + 1 < low[i + 1]` for every pair).
    pub fn is_canonical(&self) -> bool {
        self.intervals.windows(2).all(|pair| {
            let (a, b) = (pair[0], pair[1]);
            a.high < b.low && !a.is_adjacent_to(&b)
        })
    }
}

impl<'a> IntoIterator for &'a IntervalList {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Folds an ascending code point sequence into maximal intervals.
///
/// Each pushed value is compared with the previous one: exactly one
/// greater extends the open interval, anything larger closes it and opens
/// a new one. A repeated value is absorbed; a smaller value is rejected
/// with [`CompactError::OutOfOrder`].
#[derive(Debug, Default)]
pub struct RangeBuilder {
    closed: Vec<Interval>,
    open: Option<Interval>,
}

impl RangeBuilder {
    pub fn new() -> Self {
        Self {
            closed: Vec::new(),
            open: None,
        }
    }

    /// Feed the next code point.
    pub fn push(&mut self, cp: CodePoint) -> Result<(), CompactError> {
        let Some(open) = self.open.as_mut() else {
            self.open = Some(Interval::single(cp));
            return Ok(());
        };

        if cp < open.high {
            return Err(CompactError::OutOfOrder {
                previous: open.high,
                current: cp,
            });
        }
        if cp == open.high {
            return Ok(());
        }
        // cp > open.high, so the increment cannot overflow
        if cp == open.high + 1 {
            open.high = cp;
        } else {
            self.closed.push(*open);
            *open = Interval::single(cp);
        }
        Ok(())
    }

    /// Close the open interval and return the finished list.
    pub fn finish(mut self) -> IntervalList {
        if let Some(open) = self.open.take() {
            self.closed.push(open);
        }
        IntervalList {
            intervals: self.closed,
        }
    }
}
