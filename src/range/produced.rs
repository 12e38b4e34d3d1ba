/// The outcome of a single production call on a [`RangeIterator`].
///
/// [`RangeIterator`]: crate::RangeIterator
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Produced {
    /// The next value in the range; the cursor has already moved past it.
    Value(i64),
    /// The range is exhausted. Carries the total number of values produced.
    Done(usize),
}

impl Produced {
    pub fn is_done(&self) -> bool {
        matches!(self, Produced::Done(_))
    }

    pub fn value(self) -> Option<i64> {
        match self {
            Produced::Value(value) => Some(value),
            Produced::Done(_) => None,
        }
    }
}
