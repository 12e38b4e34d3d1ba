use std::fmt::{Display, Error, Formatter};

/// The far end of a range as supplied by the caller.
///
/// Integers have no infinity, so an open-ended range is spelled out explicitly. Once a range is
/// built, [`End::Unbounded`] is stored as `i64::MAX`, which is the largest value it can produce.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum End {
    At(i64),
    #[default]
    Unbounded,
}

impl End {
    /// Turn an exclusive end into the inclusive one used internally. Unbounded stays unbounded.
    pub fn to_inclusive(self, inclusive: bool) -> Self {
        match self {
            End::At(end) if !inclusive => End::At(end.saturating_sub(1)),
            other => other,
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, End::At(end) if *end < 0)
    }

    /// The inclusive last value a range ending here can produce.
    pub fn last(&self) -> i64 {
        match self {
            End::At(end) => *end,
            End::Unbounded => i64::MAX,
        }
    }
}

impl From<i64> for End {
    fn from(end: i64) -> Self {
        End::At(end)
    }
}

impl From<Option<i64>> for End {
    fn from(end: Option<i64>) -> Self {
        end.map_or(End::Unbounded, End::At)
    }
}

impl Display for End {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            End::At(end) => write!(f, "{end}"),
            End::Unbounded => write!(f, "Infinity"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Move `from` one step of size `step` in this direction, or `None` when that leaves `i64`.
    pub fn advance(self, from: i64, step: i64) -> Option<i64> {
        match self {
            Direction::Ascending => from.checked_add(step),
            Direction::Descending => from.checked_sub(step),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn exclusive_end_is_pulled_in_by_one() {
        assert_eq!(End::At(10).to_inclusive(false), End::At(9));
        assert_eq!(End::At(10).to_inclusive(true), End::At(10));
        assert_eq!(End::At(0).to_inclusive(false), End::At(-1));
        assert_eq!(End::Unbounded.to_inclusive(false), End::Unbounded);
    }

    #[test]
    fn unbounded_end_is_the_largest_integer() {
        assert_eq!(End::Unbounded.last(), i64::MAX);
        assert_eq!(End::from(None), End::Unbounded);
        assert_eq!(End::from(Some(3)).last(), 3);
        assert!(!End::Unbounded.is_negative());
        assert!(End::At(-1).is_negative());
    }

    #[test]
    fn display() {
        assert_eq!(End::At(-1).to_string(), "-1");
        assert_eq!(End::Unbounded.to_string(), "Infinity");
    }

    #[test]
    fn advance_reports_overflow() {
        assert_eq!(Direction::Ascending.advance(1, 2), Some(3));
        assert_eq!(Direction::Descending.advance(1, 2), Some(-1));
        assert_eq!(Direction::Ascending.advance(i64::MAX, 1), None);
        assert_eq!(Direction::Descending.advance(i64::MIN, 1), None);
    }
}
