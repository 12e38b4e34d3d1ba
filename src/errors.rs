use crate::domain::End;

pub type RangeResult<T> = Result<T, RangeError>;

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum RangeError {
    /// Both bounds are reported after the exclusive end has been normalized.
    #[error("range({start}, {end}): invalid argument, must use finite positive numbers.")]
    InvalidArgument { start: i64, end: End },
}
