//! Deferred in-memory data source

use crate::filter::Predicate;
use crate::query::DataSource;
use crate::schema::Record;
use crate::sort::Comparator;

/// A deferred query over an owned vector of records
///
/// Stages accumulate without touching the records; nothing is filtered or
/// sorted until [`collect`](MemoryQuery::collect) runs them in order.
/// Ordering stages use a stable sort, so records comparing equal on every
/// key keep their relative input order, and a later ordering stage
/// preserves an earlier one among its ties.
#[derive(Debug)]
pub struct MemoryQuery<R: Record> {
    records: Vec<R>,
    stages: Vec<Stage<R>>,
}

#[derive(Debug)]
enum Stage<R: Record> {
    Filter(Predicate<R>),
    Order(Comparator<R>),
}

impl<R: Record> MemoryQuery<R> {
    /// Wrap a vector of records in a deferred query
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            stages: Vec::new(),
        }
    }

    /// Run all accumulated stages and return the surviving records
    pub fn collect(self) -> Vec<R> {
        let mut records = self.records;
        for stage in self.stages {
            match stage {
                Stage::Filter(predicate) => records.retain(|r| predicate.matches(r)),
                Stage::Order(comparator) => records.sort_by(|a, b| comparator.compare(a, b)),
            }
        }
        records
    }
}

impl<R: Record> DataSource<R> for MemoryQuery<R> {
    fn apply_filter(mut self, predicate: Predicate<R>) -> Self {
        self.stages.push(Stage::Filter(predicate));
        self
    }

    fn apply_order(mut self, comparator: Comparator<R>) -> Self {
        self.stages.push(Stage::Order(comparator));
        self
    }
}

impl<R: Record> FromIterator<R> for MemoryQuery<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
