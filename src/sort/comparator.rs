//! Compiled multi-key comparators

use crate::error::Result;
use crate::path::AccessPlan;
use crate::schema::Record;
use crate::sort::parser::{self, Direction, SortKey};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Compiled comparator chain over a record type
///
/// Compares on the primary key first, then each tie-break key in listed
/// order, which is equivalent to comparing the key tuple
/// lexicographically. Absent values take the target kind's default, so
/// records with missing nested data sort at the default-value position
/// instead of faulting.
#[derive(Debug, Clone)]
pub struct Comparator<R: Record> {
    keys: SmallVec<[CompiledKey; 2]>,
    _record: PhantomData<fn(&R)>,
}

#[derive(Debug, Clone)]
struct CompiledKey {
    plan: AccessPlan,
    direction: Direction,
}

impl<R: Record> Comparator<R> {
    /// Compile a sort string against the record type
    pub fn compile(order: &str) -> Result<Self> {
        let keys = parser::parse(order)?;
        Self::from_keys(&keys)
    }

    /// Compile an already-parsed key list
    pub fn from_keys(keys: &[SortKey]) -> Result<Self> {
        let mut compiled = SmallVec::new();
        for key in keys {
            compiled.push(CompiledKey {
                plan: AccessPlan::resolve(R::schema(), &key.path)?,
                direction: key.direction,
            });
        }
        Ok(Self {
            keys: compiled,
            _record: PhantomData,
        })
    }

    /// True when there are no keys to compare on
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compare two records over the full key chain
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        for key in &self.keys {
            let va = key
                .plan
                .read(a as &dyn Record)
                .unwrap_or_else(|| key.plan.default_value());
            let vb = key
                .plan
                .read(b as &dyn Record)
                .unwrap_or_else(|| key.plan.default_value());

            let mut ordering = va.compare(&vb).unwrap_or(Ordering::Equal);
            if key.direction == Direction::Descending {
                ordering = ordering.reverse();
            }
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}
