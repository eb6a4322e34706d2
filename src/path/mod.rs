//! Property path resolution
//!
//! A dotted path like `SubEntity.Owner.Name` is resolved once, at compile
//! time, against a record type's schema. The resulting [`AccessPlan`] is
//! reused for every evaluation: as a predicate operand when filtering and
//! as a key selector when sorting.

mod resolver;

pub use resolver::AccessPlan;
