mod bound;

pub use bound::{Direction, End};
