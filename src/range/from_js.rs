use std::fmt::{Display, Error, Formatter};

use crate::{
    core::{log, LogLevel},
    domain::Direction,
    range::iterator::{create, RangeIterator, DEFAULT_STEP},
};

/// A JavaScript number, displayed the way JavaScript prints it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct JsNumber(pub f64);

impl Display for JsNumber {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self.0 {
            n if n.is_nan() => write!(f, "NaN"),
            n if n == f64::INFINITY => write!(f, "Infinity"),
            n if n == f64::NEG_INFINITY => write!(f, "-Infinity"),
            // Also covers -0, which JavaScript prints as 0.
            n if n == 0.0 => write!(f, "0"),
            n => write!(f, "{n}"),
        }
    }
}

/// Bounds coming from JavaScript are reported exactly as the caller passed them, after the
/// exclusive end has been pulled in by one.
#[derive(Debug, PartialEq, Clone, thiserror::Error)]
#[error("range({start}, {end}): invalid argument, must use finite positive numbers.")]
pub struct JsRangeError {
    pub start: JsNumber,
    pub end: JsNumber,
}

/// Build a range from JavaScript numbers.
///
/// A missing end or `Infinity` is unbounded. The end is accepted whenever it is above -1 once
/// made inclusive, and a fractional end is floored, so an end in `(-1, 0)` gives an empty range.
/// The start must be a non-negative integer.
pub(crate) fn range_from_js(
    start: Option<f64>,
    end: Option<f64>,
    inclusive: bool,
) -> Result<RangeIterator, JsRangeError> {
    let start = start.unwrap_or(0.0);
    let mut end = end.unwrap_or(f64::INFINITY);
    if !inclusive {
        end -= 1.0;
    }

    let start_ok = start >= 0.0 && start.is_finite() && start.fract() == 0.0;
    let end_ok = !end.is_nan() && end > -1.0;
    if !start_ok || !end_ok {
        let err = JsRangeError {
            start: JsNumber(start),
            end: JsNumber(end),
        };
        log(LogLevel::Debug, || format!("rejected {err}"));
        return Err(err);
    }

    let last = if end == f64::INFINITY {
        i64::MAX
    } else {
        end.floor() as i64
    };
    Ok(create(start as i64, last, Direction::Ascending, DEFAULT_STEP))
}
