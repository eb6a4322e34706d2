//! sift-query - textual filter and sort query compiler
//!
//! This crate compiles human-written filter strings
//! (`"IsActive Equal true AND Price GreaterThan 20.5 OR Name Equal A"`)
//! and sort strings (`"Name, Age DESC"`) into composable predicates and
//! comparators over collections of arbitrary typed records, without
//! per-type generated code. Record shapes are described by hand-written
//! descriptor tables; nested, possibly-absent properties are navigated
//! null-safely.

pub mod error;
pub mod filter;
pub mod path;
pub mod query;
pub mod schema;
pub mod sort;
pub mod value;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{QueryError, Result};
pub use filter::{Condition, Operator, Predicate};
pub use path::AccessPlan;
pub use query::{filter_by, order_by, DataSource, MemoryQuery, QueryExt};
pub use schema::{Field, FieldKind, FieldRef, Record, ScalarKind, Schema, SchemaRef};
pub use sort::{Comparator, Direction, SortKey};
pub use value::{coerce, parse_literal, Value};
