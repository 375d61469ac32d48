// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::num::value::RangeNum;
use num_traits::PrimInt;
use std::iter::FusedIterator;

/// A lazy `[start, stop)` sequence walked with an arbitrary signed step.
///
/// The range is an immutable description; it materializes nothing and may
/// be iterated any number of times, each iteration producing its own
/// independent cursor.
///
/// # Invariants
/// None enforced. A zero step describes an unbounded sequence when `start`
/// is before `stop`; a step whose sign disagrees with the start-to-stop
/// direction describes an empty sequence. Both are accepted as-is.
///
/// # Examples
///
/// ```rust
/// # use stride::math::range::SteppedRange;
///
/// let r = SteppedRange::with_step(10, 0, -2);
/// let values: Vec<_> = r.iter().collect();
/// assert_eq!(values, vec![10, 8, 6, 4, 2]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteppedRange<T>
where
    T: RangeNum,
{
    begin: T,
    end: T,
    step: T,
}

/// An iterator over the values of a [`SteppedRange`].
///
/// Holds the current position, the step, and the stop bound. The
/// continuation test is an ordered comparison against the bound in the
/// direction of travel, never an equality test, so a step that jumps past
/// the bound still terminates.
///
/// # Examples
///
/// ```rust
/// # use stride::math::range::SteppedRange;
///
/// let mut cursor = SteppedRange::with_step(0, 10, 4).iter();
/// assert_eq!(cursor.next(), Some(0));
/// assert_eq!(cursor.next(), Some(4));
/// assert_eq!(cursor.next(), Some(8));
/// assert_eq!(cursor.next(), None); // 12 overshoots, no equality needed
/// ```
#[derive(Clone, Debug)]
pub struct SteppedRangeIter<T>
where
    T: RangeNum,
{
    position: T,
    step: T,
    limit: T,
}

impl<T> SteppedRangeIter<T>
where
    T: RangeNum,
{
    /// Returns the current position without advancing.
    ///
    /// Idempotent: between two advances this reads the same value any
    /// number of times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride::math::range::SteppedRange;
    ///
    /// let mut cursor = SteppedRange::new(3, 6).iter();
    /// assert_eq!(cursor.position(), 3);
    /// assert_eq!(cursor.position(), 3);
    /// cursor.next();
    /// assert_eq!(cursor.position(), 4);
    /// ```
    #[inline]
    pub const fn position(&self) -> T {
        self.position
    }

    /// The continuation predicate: `true` while the current position is
    /// still before the stop bound in the direction of travel.
    ///
    /// For `step >= 0` this is `position < limit`, for `step < 0` it is
    /// `position > limit`. Ascending and descending ranges are symmetric
    /// without the caller negating anything, and a zero step routes into
    /// the ascending branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride::math::range::SteppedRange;
    ///
    /// let cursor = SteppedRange::with_step(0, 10, -1).iter();
    /// assert!(!cursor.in_bounds()); // 0 > 10 is false: empty sequence
    /// ```
    #[inline]
    pub fn in_bounds(&self) -> bool {
        if self.step >= T::zero() {
            self.position < self.limit
        } else {
            self.position > self.limit
        }
    }
}

impl<T> Iterator for SteppedRangeIter<T>
where
    T: RangeNum,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.in_bounds() {
            let value = self.position;
            self.position = self.position + self.step;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // A zero step makes the sequence unbounded, so no generic upper
        // bound exists while the predicate holds.
        if self.in_bounds() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

// The position stops moving once the predicate is false, so an exhausted
// cursor keeps returning None.
impl<T> FusedIterator for SteppedRangeIter<T> where T: RangeNum {}

impl<T> SteppedRange<T>
where
    T: RangeNum,
{
    /// Creates a range from `0` to `stop` (exclusive) with step `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride::math::range::SteppedRange;
    ///
    /// let values: Vec<_> = SteppedRange::to(5).iter().collect();
    /// assert_eq!(values, vec![0, 1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn to(stop: T) -> Self {
        Self {
            begin: T::zero(),
            end: stop,
            step: T::one(),
        }
    }

    /// Creates a range from `start` to `stop` (exclusive) with step `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride::math::range::SteppedRange;
    ///
    /// let values: Vec<_> = SteppedRange::new(2, 5).iter().collect();
    /// assert_eq!(values, vec![2, 3, 4]);
    /// ```
    #[inline]
    pub fn new(start: T, stop: T) -> Self {
        Self {
            begin: start,
            end: stop,
            step: T::one(),
        }
    }

    /// Creates a range with the given triple, stored verbatim.
    ///
    /// No validation is performed: the step may be zero (unbounded
    /// sequence) or point away from `stop` (empty sequence).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride::math::range::SteppedRange;
    ///
    /// let values: Vec<_> = SteppedRange::with_step(0, 10, 2).iter().collect();
    /// assert_eq!(values, vec![0, 2, 4, 6, 8]);
    /// ```
    #[inline]
    pub const fn with_step(start: T, stop: T, step: T) -> Self {
        Self {
            begin: start,
            end: stop,
            step,
        }
    }

    /// Returns the inclusive start value of the range.
    #[inline]
    pub const fn start(&self) -> T {
        self.begin
    }

    /// Returns the exclusive stop bound of the range.
    ///
    /// The bound is only ever compared against, never yielded.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the step added to the position on each advance.
    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Creates a fresh cursor positioned at `start`.
    ///
    /// Side-effect-free: the range is reusable and every call produces an
    /// independent iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride::math::range::SteppedRange;
    ///
    /// let r = SteppedRange::new(1, 4);
    /// let first: Vec<_> = r.iter().collect();
    /// let second: Vec<_> = r.iter().collect();
    /// assert_eq!(first, second);
    /// ```
    #[inline]
    pub fn iter(&self) -> SteppedRangeIter<T> {
        SteppedRangeIter {
            position: self.begin,
            step: self.step,
            limit: self.end,
        }
    }

    /// Returns `true` if the range yields no values.
    ///
    /// Direction-aware: `with_step(5, 2, 1)` is empty while
    /// `with_step(5, 2, -1)` is not. A zero-step range with `start` before
    /// `stop` is unbounded, not empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride::math::range::SteppedRange;
    ///
    /// assert!(SteppedRange::new(5, 2).is_empty());
    /// assert!(!SteppedRange::with_step(5, 2, -1).is_empty());
    /// assert!(!SteppedRange::with_step(0, 5, 0).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.iter().in_bounds()
    }
}

impl<T> SteppedRange<T>
where
    T: PrimInt,
{
    /// Returns the exact number of values the range yields, when finite
    /// and representable.
    ///
    /// For a non-zero step this is `ceil(span / |step|)` where `span` is
    /// the distance from `start` to `stop` in the step's direction, and
    /// `0` when the step points away from `stop`. Returns `None` when the
    /// sequence is unbounded (zero step with `start` before `stop`) or
    /// when the span or step magnitude does not fit the value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride::math::range::SteppedRange;
    ///
    /// assert_eq!(SteppedRange::with_step(0, 10, 3).point_count(), Some(4));
    /// assert_eq!(SteppedRange::with_step(10, 0, -2).point_count(), Some(5));
    /// assert_eq!(SteppedRange::new(5, 2).point_count(), Some(0));
    /// assert_eq!(SteppedRange::with_step(0, 5, 0).point_count(), None);
    /// ```
    pub fn point_count(&self) -> Option<usize> {
        let zero = T::zero();
        if self.step == zero {
            return if self.begin < self.end { None } else { Some(0) };
        }

        let (span, stride) = if self.step > zero {
            if self.begin >= self.end {
                return Some(0);
            }
            (self.end.checked_sub(&self.begin)?, self.step)
        } else {
            if self.begin <= self.end {
                return Some(0);
            }
            (self.begin.checked_sub(&self.end)?, zero.checked_sub(&self.step)?)
        };

        // ceil(span / stride) with span >= 1 and stride >= 1
        let count = (span - T::one()) / stride + T::one();
        count.to_usize()
    }
}

impl<T> Default for SteppedRange<T>
where
    T: RangeNum,
{
    #[inline]
    fn default() -> Self {
        Self {
            begin: T::zero(),
            end: T::zero(),
            step: T::one(),
        }
    }
}

impl<T> std::fmt::Debug for SteppedRange<T>
where
    T: RangeNum + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteppedRange")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .field("step", &self.step)
            .finish()
    }
}

impl<T> std::fmt::Display for SteppedRange<T>
where
    T: RangeNum + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) step {}", self.begin, self.end, self.step)
    }
}

impl<T> IntoIterator for SteppedRange<T>
where
    T: RangeNum,
{
    type Item = T;
    type IntoIter = SteppedRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &SteppedRange<T>
where
    T: RangeNum,
{
    type Item = T;
    type IntoIter = SteppedRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for SteppedRange<T>
where
    T: RangeNum,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Creates a range from `0` to `stop` (exclusive) with step `1`.
///
/// # Examples
///
/// ```rust
/// # use stride::range_to;
///
/// let values: Vec<_> = range_to(5).iter().collect();
/// assert_eq!(values, vec![0, 1, 2, 3, 4]);
/// ```
#[inline]
pub fn range_to<T>(stop: T) -> SteppedRange<T>
where
    T: RangeNum,
{
    SteppedRange::to(stop)
}

/// Creates a range from `start` to `stop` (exclusive) with step `1`.
///
/// # Examples
///
/// ```rust
/// # use stride::range;
///
/// let values: Vec<_> = range(2, 5).iter().collect();
/// assert_eq!(values, vec![2, 3, 4]);
/// ```
#[inline]
pub fn range<T>(start: T, stop: T) -> SteppedRange<T>
where
    T: RangeNum,
{
    SteppedRange::new(start, stop)
}

/// Creates a range from `start` to `stop` (exclusive) with the given step.
///
/// The step is taken verbatim: zero yields an unbounded sequence when
/// `start` is before `stop`, and a step pointing away from `stop` yields
/// an empty one.
///
/// # Examples
///
/// ```rust
/// # use stride::range_step;
///
/// let values: Vec<_> = range_step(10, 0, -2).iter().collect();
/// assert_eq!(values, vec![10, 8, 6, 4, 2]);
/// ```
#[inline]
pub fn range_step<T>(start: T, stop: T, step: T) -> SteppedRange<T>
where
    T: RangeNum,
{
    SteppedRange::with_step(start, stop, step)
}
