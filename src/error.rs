//! Error types for the query compiler

use thiserror::Error;

/// Main error type for the query compiler
///
/// Every variant is a caller-input error raised while compiling a filter or
/// sort string. Absent values encountered while *evaluating* a compiled
/// query degrade to defaults and never produce an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("property '{segment}' not found on type '{on_type}'")]
    UnknownProperty { segment: String, on_type: String },

    #[error("unknown filter operator '{word}'")]
    UnknownOperator { word: String },

    #[error("invalid filter condition '{raw}': expected 'Property Operator Value'")]
    MalformedCondition { raw: String },

    #[error("invalid sort key '{raw}': expected 'Property' or 'Property ASC|DESC'")]
    MalformedSortKey { raw: String },

    #[error("invalid literal '{raw}'")]
    MalformedLiteral { raw: String },

    #[error("value '{value}' cannot be represented as {target}")]
    TypeMismatch { value: String, target: String },
}

/// Result type alias for the query compiler
pub type Result<T> = std::result::Result<T, QueryError>;
