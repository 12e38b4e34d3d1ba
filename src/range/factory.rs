use crate::{
    core::{log, LogLevel},
    domain::{Direction, End},
    errors::{RangeError, RangeResult},
    range::iterator::{create, RangeIterator, DEFAULT_STEP},
};

/// Build an ascending range from `start` towards `end`.
///
/// Unless `inclusive` is set, `end` itself is left out. Pass [`End::Unbounded`] (or `None::<i64>`)
/// for a range that runs up to `i64::MAX`.
///
/// # Errors
///
/// [`RangeError::InvalidArgument`] when `start` or the end, once made inclusive, is negative.
pub fn range(start: i64, end: impl Into<End>, inclusive: bool) -> RangeResult<RangeIterator> {
    let end = end.into().to_inclusive(inclusive);
    if start < 0 || end.is_negative() {
        log(LogLevel::Debug, || format!("rejected range({start}, {end})"));
        return Err(RangeError::InvalidArgument { start, end });
    }

    Ok(create(start, end.last(), Direction::Ascending, DEFAULT_STEP))
}

/// An open-ended range starting at `start`.
///
/// # Errors
///
/// [`RangeError::InvalidArgument`] when `start` is negative.
pub fn range_from(start: i64) -> RangeResult<RangeIterator> {
    range(start, End::Unbounded, false)
}

/// A range that includes `end`.
///
/// # Errors
///
/// [`RangeError::InvalidArgument`] when either bound is negative.
pub fn range_inclusive(start: i64, end: i64) -> RangeResult<RangeIterator> {
    range(start, end, true)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0, false, 0, -1; "empty exclusive")]
    #[test_case(-1, 10, false, -1, 9; "negative start")]
    #[test_case(-1, 0, false, -1, -1; "both negative")]
    #[test_case(0, -1, true, 0, -1; "negative inclusive end")]
    fn rejects_negative_bounds(start: i64, end: i64, inclusive: bool, bad_start: i64, bad_end: i64) {
        let err = range(start, end, inclusive).unwrap_err();
        assert_eq!(
            err,
            RangeError::InvalidArgument {
                start: bad_start,
                end: End::At(bad_end),
            }
        );
        assert!(err
            .to_string()
            .contains(&format!("range({bad_start}, {bad_end})")));
    }

    #[test]
    fn rejects_negative_open_start() {
        let err = range_from(-2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "range(-2, Infinity): invalid argument, must use finite positive numbers."
        );
    }

    #[test]
    fn defaults_to_an_unbounded_range_from_zero() {
        let iter = range(0, End::Unbounded, false).unwrap();
        assert_eq!(iter.len(), i64::MAX);
        assert_eq!(iter.to_string(), RangeIterator::default().to_string());
    }

    #[test_case(0, 5, false => vec![0, 1, 2, 3, 4]; "exclusive")]
    #[test_case(0, 5, true => vec![0, 1, 2, 3, 4, 5]; "inclusive")]
    #[test_case(0, 1, false => vec![0]; "single exclusive")]
    #[test_case(0, 1, true => vec![0, 1]; "pair inclusive")]
    #[test_case(0, 0, true => vec![0]; "single inclusive")]
    #[test_case(10, 5, false => Vec::<i64>::new(); "start past end")]
    fn produces(start: i64, end: i64, inclusive: bool) -> Vec<i64> {
        range(start, end, inclusive).unwrap().collect()
    }

    #[test]
    fn convenience_factories() {
        assert_eq!(
            range_inclusive(2, 4).unwrap().collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
        assert_eq!(
            range_from(7).unwrap().take(2).collect::<Vec<_>>(),
            vec![7, 8]
        );
    }
}
