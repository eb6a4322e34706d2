//! Sort compilation
//!
//! This module turns order strings like `"Name, Age DESC"` into a
//! compiled [`Comparator`] producing a single stable multi-key ordering.

mod comparator;
pub mod parser;


pub use comparator::Comparator;
pub use parser::{Direction, SortKey};
