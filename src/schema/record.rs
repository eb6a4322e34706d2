//! Runtime property access for records

use crate::schema::Schema;
use crate::value::Value;

/// A record type that queries can be compiled against
///
/// Implementations pair a static [`Schema`] (what properties exist and
/// their kinds) with a runtime read of a named property. The two must
/// agree: every field the schema declares must be readable under the same
/// name, scalars as [`FieldRef::Value`] and nested records as
/// [`FieldRef::Nested`]. Optional data reports [`FieldRef::Absent`].
pub trait Record {
    /// Descriptor table for this record type
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Read a property by exact name
    fn field(&self, name: &str) -> FieldRef<'_>;
}

/// Result of reading one named property
pub enum FieldRef<'a> {
    /// A scalar value snapshot
    Value(Value),
    /// A nested record to continue navigating into
    Nested(&'a dyn Record),
    /// Optional data that is not set (or an unknown name)
    Absent,
}
