//! Parsed filter conditions

use crate::error::QueryError;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filter comparison operators
///
/// `Contains` carries two meanings: substring match on text properties and
/// set-membership when the literal is an integer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Contains,
    StartsWith,
    EndsWith,
}

impl Operator {
    /// Canonical keyword for this operator
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
            Self::Contains => "Contains",
            Self::StartsWith => "StartsWith",
            Self::EndsWith => "EndsWith",
        }
    }

    /// True for the four relational comparisons
    pub const fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::GreaterThanOrEqual | Self::LessThan | Self::LessThanOrEqual
        )
    }

    /// True for the string-only operators
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Contains | Self::StartsWith | Self::EndsWith)
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    /// Match an operator keyword case-insensitively
    fn from_str(word: &str) -> Result<Self, Self::Err> {
        const OPERATORS: [Operator; 9] = [
            Operator::Equal,
            Operator::NotEqual,
            Operator::GreaterThan,
            Operator::GreaterThanOrEqual,
            Operator::LessThan,
            Operator::LessThanOrEqual,
            Operator::Contains,
            Operator::StartsWith,
            Operator::EndsWith,
        ];

        OPERATORS
            .into_iter()
            .find(|op| word.eq_ignore_ascii_case(op.as_str()))
            .ok_or_else(|| QueryError::UnknownOperator {
                word: word.to_string(),
            })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed filter condition
///
/// `conjunctive = false` marks the start of a new OR-group; every
/// following condition up to the next such marker is AND-ed with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub path: String,
    pub operator: Operator,
    pub value: Value,
    pub conjunctive: bool,
}
