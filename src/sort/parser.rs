//! Sort string parser
//!
//! Grammar: comma-separated `propertyPath [ASC|DESC]`. Direction is
//! case-insensitive and defaults to ascending; an unrecognized direction
//! word is treated as ascending rather than rejected.

use crate::error::{QueryError, Result};
use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One parsed sort key
///
/// `primary` marks the first key, which seeds a fresh ordering; later
/// keys refine it as tie-breaks in listed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub path: String,
    pub direction: Direction,
    pub primary: bool,
}

/// Parse a sort string into its ordered key list
///
/// An empty string yields no keys. An entry with more than one token
/// beyond the property, or an empty property name, fails with
/// `MalformedSortKey`.
pub fn parse(order: &str) -> Result<Vec<SortKey>> {
    if order.is_empty() {
        return Ok(Vec::new());
    }

    let mut keys = Vec::new();
    let mut primary = true;

    for item in order.split(',') {
        let item = item.trim();
        let pair: Vec<&str> = item.split(' ').collect();

        if pair.len() > 2 {
            return Err(QueryError::MalformedSortKey {
                raw: item.to_string(),
            });
        }

        let path = pair[0].trim();
        if path.is_empty() {
            return Err(QueryError::MalformedSortKey {
                raw: item.to_string(),
            });
        }

        let direction = if pair.len() == 2 && pair[1].trim().eq_ignore_ascii_case("desc") {
            Direction::Descending
        } else {
            Direction::Ascending
        };

        keys.push(SortKey {
            path: path.to_string(),
            direction,
            primary,
        });
        primary = false;
    }

    Ok(keys)
}
