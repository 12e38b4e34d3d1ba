//! Lazy integer ranges.
//!
//! [`range()`] validates its bounds and hands back a [`RangeIterator`], which produces values on
//! demand and can be cloned, reversed, or re-stepped into fresh, independent iterators.

mod core;
mod domain;
mod errors;
mod range;
#[cfg(feature = "wasm")]
mod wasm;

pub use domain::{Direction, End};
pub use errors::{RangeError, RangeResult};
pub use range::{range, range_from, range_inclusive, Produced, RangeIterator};
