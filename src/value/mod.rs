//! Literal values and coercion
//!
//! This module handles turning raw literal tokens like `20.5`, `true` or
//! `[2,3]` into typed values, and converting those values into the exact
//! representation of a resolved property.

mod coerce;
mod parse;


pub use coerce::coerce;
pub use parse::parse_literal;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use time::PrimitiveDateTime;

/// Typed value produced by literal parsing or a property read
///
/// Variant order matches the literal trial-parse order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Timestamp(PrimitiveDateTime),
    IntList(Vec<i64>),
    Str(String),
}

impl Value {
    /// Human-readable kind name, used in diagnostics
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::Timestamp(_) => "timestamp",
            Self::IntList(_) => "integer list",
            Self::Str(_) => "string",
        }
    }

    /// Compare two values of the same kind
    ///
    /// Returns `None` for mixed kinds; compilation guarantees both sides of
    /// a comparison share a kind, so callers treat `None` as "no ordering".
    /// Floats use total ordering so NaN cannot poison a sort.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => Some(a.total_cmp(b)),
            (Self::Decimal(a), Self::Decimal(b)) => Some(a.cmp(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            (Self::IntList(a), Self::IntList(b)) => Some(a.cmp(b)),
            (Self::Str(a), Self::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::Timestamp(t) => write!(f, "{}", t),
            Self::IntList(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_same_kind() {
        assert_eq!(
            Value::Int(1).compare(&Value::Int(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Str("b".into()).compare(&Value::Str("a".into())),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Float(1.5).compare(&Value::Float(1.5)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_compare_mixed_kinds() {
        assert_eq!(Value::Int(1).compare(&Value::Str("1".into())), None);
    }

    #[test]
    fn test_display_int_list() {
        assert_eq!(Value::IntList(vec![1, 2, 3]).to_string(), "[1,2,3]");
    }
}
