//! Static record-type descriptors

use crate::value::Value;
use time::PrimitiveDateTime;

/// Reference to another record type's schema
///
/// A function pointer rather than a direct reference so descriptor graphs
/// may be cyclic (a sub-record pointing back at its parent type).
pub type SchemaRef = fn() -> &'static Schema;

/// Descriptor table for one record type
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    /// Look up a property by exact name
    #[inline]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One named property of a record type
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Declared kind of a property: a scalar or a nested record
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Scalar(ScalarKind),
    Record(SchemaRef),
}

impl FieldKind {
    /// Name of the declared type, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(kind) => kind.name(),
            Self::Record(schema) => schema().name,
        }
    }
}

/// Closed set of scalar kinds a property (and a literal) can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    Int,
    Float,
    Decimal,
    Timestamp,
    Str,
    IntList,
}

impl ScalarKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Timestamp => "timestamp",
            Self::Str => "string",
            Self::IntList => "integer list",
        }
    }

    /// The kind's zero value, substituted when a null-safe read comes up
    /// absent during sorting
    pub fn default_value(self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::Int => Value::Int(0),
            Self::Float => Value::Float(0.0),
            Self::Decimal => Value::Decimal(rust_decimal::Decimal::ZERO),
            Self::Timestamp => Value::Timestamp(PrimitiveDateTime::MIN),
            Self::Str => Value::Str(String::new()),
            Self::IntList => Value::IntList(Vec::new()),
        }
    }
}
