//! Filter parse cache
//!
//! Parsed condition lists are type-independent, so one process-wide cache
//! serves every record type. Populated idempotently: racing first parses
//! duplicate work, never corrupt, and entries live for the process
//! lifetime.

use crate::error::Result;
use crate::filter::ast::Condition;
use crate::filter::parser;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

static FILTER_CACHE: Lazy<RwLock<AHashMap<String, Vec<Condition>>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(256);
    RwLock::new(map)
});

/// Get or parse a filter string, using the cache for repeated filters
#[inline]
pub fn get_or_parse(filter: &str) -> Result<Vec<Condition>> {
    // Fast path: check read lock first
    {
        let cache = FILTER_CACHE.read();
        if let Some(conditions) = cache.get(filter) {
            return Ok(conditions.clone());
        }
    }

    // Slow path: parse and cache (only successful parses are kept)
    let conditions = parser::parse(filter)?;

    {
        let mut cache = FILTER_CACHE.write();
        cache.insert(filter.to_string(), conditions.clone());
    }

    Ok(conditions)
}

/// Clear the cache (useful for testing)
#[allow(dead_code)]
pub fn clear_cache() {
    let mut cache = FILTER_CACHE.write();
    cache.clear();
}

/// Number of cached filter strings
#[allow(dead_code)]
pub fn cache_size() -> usize {
    let cache = FILTER_CACHE.read();
    cache.len()
}
