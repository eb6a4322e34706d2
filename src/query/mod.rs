//! Query pipeline entry points
//!
//! The compiler's artifacts are applied to a data source through the
//! [`DataSource`] trait: applying a predicate or comparator yields a new
//! deferred handle, and nothing is evaluated until the caller consumes
//! the source. [`MemoryQuery`] is the in-memory reference source.

mod memory;

pub use memory::MemoryQuery;

use crate::error::Result;
use crate::filter::Predicate;
use crate::schema::Record;
use crate::sort::Comparator;

/// A deferred, composable query handle over records of type `R`
///
/// Applying a stage must not enumerate the source; both operations return
/// a new handle and leave evaluation to the eventual consumer.
pub trait DataSource<R: Record>: Sized {
    /// Layer a filtering stage onto the source
    fn apply_filter(self, predicate: Predicate<R>) -> Self;

    /// Layer an ordering stage onto the source
    fn apply_order(self, comparator: Comparator<R>) -> Self;
}

/// Apply one or more filter strings to a source
///
/// Each string compiles independently and the results combine
/// conjunctively: a record must satisfy every string. Empty strings are
/// identity transforms. Compilation failures surface before any stage is
/// applied to the returned source.
pub fn filter_by<R, S, I>(source: S, filters: I) -> Result<S>
where
    R: Record,
    S: DataSource<R>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut current = source;
    for filter in filters {
        let filter = filter.as_ref();
        if filter.trim().is_empty() {
            continue;
        }
        current = current.apply_filter(Predicate::compile(filter)?);
    }
    Ok(current)
}

/// Apply an order string to a source
///
/// An empty string is an identity transform.
pub fn order_by<R, S>(source: S, order: &str) -> Result<S>
where
    R: Record,
    S: DataSource<R>,
{
    let comparator = Comparator::compile(order)?;
    if comparator.is_empty() {
        return Ok(source);
    }
    Ok(source.apply_order(comparator))
}

/// Method-call sugar for the entry points
///
/// ```
/// use sift_query::{MemoryQuery, QueryExt, Record};
/// # use sift_query::{Field, FieldKind, FieldRef, ScalarKind, Schema, Value};
/// # struct Item { id: i64 }
/// # impl Record for Item {
/// #     fn schema() -> &'static Schema {
/// #         static SCHEMA: Schema = Schema {
/// #             name: "Item",
/// #             fields: &[Field { name: "Id", kind: FieldKind::Scalar(ScalarKind::Int) }],
/// #         };
/// #         &SCHEMA
/// #     }
/// #     fn field(&self, name: &str) -> FieldRef<'_> {
/// #         match name {
/// #             "Id" => FieldRef::Value(Value::Int(self.id)),
/// #             _ => FieldRef::Absent,
/// #         }
/// #     }
/// # }
/// let source = MemoryQuery::new(vec![Item { id: 1 }, Item { id: 2 }]);
/// let result = source
///     .filter_by(["Id GreaterThan 1"])?
///     .order_by("Id DESC")?
///     .collect();
/// assert_eq!(result.len(), 1);
/// # Ok::<(), sift_query::QueryError>(())
/// ```
pub trait QueryExt<R: Record>: DataSource<R> {
    fn filter_by<I>(self, filters: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        filter_by(self, filters)
    }

    fn order_by(self, order: &str) -> Result<Self> {
        order_by(self, order)
    }
}

impl<R: Record, S: DataSource<R>> QueryExt<R> for S {}
