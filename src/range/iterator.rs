use std::{
    fmt::{Display, Error, Formatter},
    iter::FusedIterator,
};

use crate::{
    core::{log, LogLevel},
    domain::Direction,
    range::Produced,
};

pub(crate) const DEFAULT_STEP: i64 = 1;

/// A lazily produced interval of integers.
///
/// `last` is always inclusive. Only `current` and `produced` move while the range is consumed;
/// [`RangeIterator::rev`] and [`RangeIterator::step`] build new iterators instead of changing
/// this one.
#[derive(Debug)]
pub struct RangeIterator {
    current: i64,
    last: i64,
    direction: Direction,
    step: i64,
    produced: usize,
    // The cursor could not move another step without leaving `i64`.
    overflowed: bool,
}

/// Build an iterator positioned at `current`. A step below 1 is treated as 1.
pub(crate) fn create(current: i64, last: i64, direction: Direction, step: i64) -> RangeIterator {
    RangeIterator {
        current,
        last,
        direction,
        step: step.max(DEFAULT_STEP),
        produced: 0,
        overflowed: false,
    }
}

impl RangeIterator {
    /// Produce the next value, or report how many values were produced once nothing remains.
    ///
    /// Calling this again after exhaustion keeps returning the same [`Produced::Done`].
    pub fn produce(&mut self) -> Produced {
        if self.empty() {
            return Produced::Done(self.produced);
        }

        let value = self.current;
        match self.direction.advance(self.current, self.step) {
            Some(next) => self.current = next,
            None => self.overflowed = true,
        }
        self.produced += 1;

        Produced::Value(value)
    }

    /// The iterator is its own iterable, so this hands back the same handle. Useful for `for`
    /// loops that should not move the iterator.
    pub fn iter(&mut self) -> &mut Self {
        self
    }

    /// `last - current + 1`, counted from the live cursor.
    ///
    /// This does not account for the step size, so a stepped range reports more than it will
    /// produce, and a descending range reports zero or less. See `size_hint` for the exact count.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> i64 {
        if self.overflowed {
            return 0;
        }
        self.last.saturating_sub(self.current).saturating_add(1)
    }

    /// Walk from `last` back down to the current cursor with the same step.
    ///
    /// This builds the interval `[current, last]` anew rather than flipping the direction in
    /// place. It takes `self` by value so that it is picked over `Iterator::rev`; clone first to
    /// keep the original.
    pub fn rev(self) -> Self {
        let reversed = self.derive(self.last, self.current, Direction::Descending, self.step);
        log(LogLevel::Trace, || format!("{self} reversed into {reversed}"));
        reversed
    }

    /// Same cursor, bounds, and direction, with a step of `step`.
    pub fn step(&self, step: i64) -> Self {
        let stepped = self.derive(self.current, self.last, self.direction, step);
        log(LogLevel::Trace, || format!("{self} re-stepped into {stepped}"));
        stepped
    }

    pub fn empty(&self) -> bool {
        self.overflowed
            || match self.direction {
                Direction::Ascending => self.current > self.last,
                Direction::Descending => self.current < self.last,
            }
    }

    /// Whether `item` is still ahead of the cursor. Membership narrows as the range is consumed.
    pub fn contains(&self, item: i64) -> bool {
        if self.overflowed {
            return false;
        }
        match self.direction {
            Direction::Ascending => item >= self.current && item <= self.last,
            Direction::Descending => item <= self.current && item >= self.last,
        }
    }

    /// How many values this iterator has produced so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The exact number of values left, if it fits in a `usize`.
    fn remaining(&self) -> Option<usize> {
        if self.empty() {
            return Some(0);
        }
        let span = (i128::from(self.last) - i128::from(self.current)).unsigned_abs();
        let count = span / self.step.unsigned_abs() as u128 + 1;
        usize::try_from(count).ok()
    }

    fn derive(&self, current: i64, last: i64, direction: Direction, step: i64) -> Self {
        let mut derived = create(current, last, direction, step);
        derived.overflowed = self.overflowed;
        derived
    }
}

/// A clone starts from the current cursor with its own produced count.
impl Clone for RangeIterator {
    fn clone(&self) -> Self {
        self.derive(self.current, self.last, self.direction, self.step)
    }
}

impl Default for RangeIterator {
    fn default() -> Self {
        create(0, i64::MAX, Direction::Ascending, DEFAULT_STEP)
    }
}

impl Iterator for RangeIterator {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.produce().value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RangeIterator {}

impl Display for RangeIterator {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let (low, high) = match self.direction {
            Direction::Ascending => (self.current, self.last),
            Direction::Descending => (self.last, self.current),
        };
        if self.step == DEFAULT_STEP {
            write!(f, "range({low}, {high})")?;
        } else {
            write!(f, "range({low}, {high}, {})", self.step)?;
        }
        if self.direction == Direction::Descending {
            write!(f, ".rev()")?;
        }
        Ok(())
    }
}
