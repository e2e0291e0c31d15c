use std::mem;

use log::{debug, trace};
use rayon::prelude::*;

use crate::{Direction, Error, Result, Stride, floor_index};

/// Options for resolving an index range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolveOptions {
    /// Sort the returned pair so that `start <= end`, whatever the interval's orientation.
    pub force_ascending: bool,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force_ascending(mut self, force_ascending: bool) -> Self {
        self.force_ascending = force_ascending;
        self
    }
}

impl From<bool> for ResolveOptions {
    fn from(force_ascending: bool) -> Self {
        Self { force_ascending }
    }
}

/// Pair of indices into a monotonic sequence bounding a requested value
/// interval, plus the step sign that walks the pair in the interval's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct IndexRange {
    start: usize,
    end: usize,
    stride: Stride,
}

impl IndexRange {
    pub fn new(start: usize, end: usize, stride: Stride) -> Self {
        Self { start, end, stride }
    }

    /// Index resolved for the interval's first bound.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index resolved for the interval's second bound.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn stride(&self) -> Stride {
        self.stride
    }

    #[inline]
    pub fn as_array(&self) -> [usize; 2] {
        [self.start, self.end]
    }

    /// `(min, max)` of the two indices.
    #[inline]
    pub fn bounds(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    /// Number of indices between `start` and `end`, both included.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.start.abs_diff(self.end) + 1
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Walks from `start` to `end` inclusive, stepping towards `end`.
    pub fn indices(&self) -> impl Iterator<Item = usize> + use<> {
        let (lo, hi) = self.bounds();
        let reversed = self.start > self.end;
        (lo..=hi).map(move |i| if reversed { lo + hi - i } else { i })
    }

    /// Values of `sequence` visited by [`Self::indices`]. Indices past the end
    /// of `sequence` are skipped.
    pub fn select<T: Clone>(&self, sequence: &[T]) -> Vec<T> {
        self.indices()
            .filter_map(|i| sequence.get(i).cloned())
            .collect()
    }
}

impl From<IndexRange> for [usize; 2] {
    fn from(value: IndexRange) -> Self {
        value.as_array()
    }
}

/// When a located endpoint needs moving: its value is below or above the bound.
#[derive(Debug, Clone, Copy)]
enum Outside {
    Below,
    Above,
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy)]
struct EdgeRule {
    outside: Outside,
    step: Step,
}

impl EdgeRule {
    const fn new(outside: Outside, step: Step) -> Self {
        Self { outside, step }
    }

    fn apply<T: PartialOrd>(self, index: usize, value: &T, bound: &T) -> isize {
        let index = index as isize;
        let moves = match self.outside {
            Outside::Below => value < bound,
            Outside::Above => value > bound,
        };
        match (moves, self.step) {
            (false, _) => index,
            (true, Step::Increment) => index + 1,
            (true, Step::Decrement) => index - 1,
        }
    }
}

/// Adjustment for each endpoint, keyed by sequence and interval direction.
#[derive(Debug, Clone, Copy)]
struct EdgePolicy {
    start: EdgeRule,
    end: EdgeRule,
}

impl EdgePolicy {
    fn for_directions(sequence: Direction, interval: Direction) -> Self {
        use Direction::{Ascending, Descending};
        use Outside::{Above, Below};
        use Step::{Decrement, Increment};

        let rule = EdgeRule::new;
        let (start, end) = match (sequence, interval) {
            (Ascending, Ascending) => (rule(Below, Increment), rule(Above, Decrement)),
            (Ascending, Descending) => (rule(Above, Decrement), rule(Below, Increment)),
            (Descending, Ascending) => (rule(Below, Decrement), rule(Above, Increment)),
            (Descending, Descending) => (rule(Above, Increment), rule(Below, Decrement)),
        };
        Self { start, end }
    }
}

/// Resolves the indices of `sequence` bounding `interval`.
///
/// `sequence` must be monotonic (not checked). `interval` is `[bound_a, bound_b]`
/// in either order; the returned range keeps that order unless
/// `force_ascending` is set. Both indices are clamped into the sequence.
///
/// # Errors
///
/// [`Error::EmptySequence`] if `sequence` is empty,
/// [`Error::IntervalLength`] if `interval` does not hold exactly two values.
pub fn resolve<T: PartialOrd>(
    sequence: &[T],
    interval: &[T],
    force_ascending: bool,
) -> Result<IndexRange> {
    resolve_with(sequence, interval, ResolveOptions::from(force_ascending))
}

/// Same as [`resolve`], taking [`ResolveOptions`].
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_with<T: PartialOrd>(
    sequence: &[T],
    interval: &[T],
    options: ResolveOptions,
) -> Result<IndexRange> {
    if sequence.is_empty() {
        return Err(Error::EmptySequence);
    }
    let [bound_a, bound_b] = interval else {
        return Err(Error::IntervalLength {
            len: interval.len(),
        });
    };

    let sequence_direction = Direction::of_sequence(sequence);
    let interval_direction = Direction::of_interval(bound_a, bound_b);
    let stride = Stride::between(sequence_direction, interval_direction);

    if sequence.len() == 1 {
        return Ok(IndexRange::new(0, 0, stride));
    }

    let locate = |bound: &T| floor_index(sequence, sequence_direction, bound).unwrap_or(0);
    let first = locate(bound_a);
    let last = locate(bound_b);
    trace!("located {first} and {last} in {} values", sequence.len());

    if first == last {
        return Ok(IndexRange::new(first, first, stride));
    }

    let policy = EdgePolicy::for_directions(sequence_direction, interval_direction);
    let mut start = policy.start.apply(first, &sequence[first], bound_a);
    let mut end = policy.end.apply(last, &sequence[last], bound_b);

    if options.force_ascending && start > end {
        mem::swap(&mut start, &mut end);
    }

    let max = (sequence.len() - 1) as isize;
    let range = IndexRange::new(
        start.clamp(0, max) as usize,
        end.clamp(0, max) as usize,
        stride,
    );

    debug!(
        "resolved {sequence_direction:?} sequence of {} values against {interval_direction:?} interval: {:?}",
        sequence.len(),
        range
    );

    Ok(range)
}

/// Resolves many intervals against the same sequence in parallel.
///
/// Results are in the order of `intervals`.
///
/// # Errors
///
/// Fails with the error of an invalid interval, or [`Error::EmptySequence`].
pub fn resolve_many<T, I>(
    sequence: &[T],
    intervals: &[I],
    options: ResolveOptions,
) -> Result<Vec<IndexRange>>
where
    T: PartialOrd + Sync,
    I: AsRef<[T]> + Sync,
{
    if sequence.is_empty() {
        return Err(Error::EmptySequence);
    }

    debug!(
        "resolving {} intervals against {} values",
        intervals.len(),
        sequence.len()
    );

    intervals
        .par_iter()
        .map(|interval| resolve_with(sequence, interval.as_ref(), options))
        .collect()
}
