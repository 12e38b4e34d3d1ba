mod factory;
#[cfg(any(feature = "wasm", test))]
mod from_js;
mod iterator;
mod produced;

pub use factory::{range, range_from, range_inclusive};
#[cfg(any(feature = "wasm", test))]
#[allow(unused_imports)]
pub(crate) use from_js::{range_from_js, JsRangeError};
pub use iterator::RangeIterator;
pub use produced::Produced;
