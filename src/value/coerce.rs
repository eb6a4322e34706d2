//! Narrowing coercion from parsed literals to property kinds

use crate::error::{QueryError, Result};
use crate::schema::ScalarKind;
use crate::value::Value;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Convert a generically-parsed value into the exact representation of the
/// resolved property's kind
///
/// Only lossless conversions are allowed; anything else fails with
/// `TypeMismatch`. Integer-list literals are not coerced here: the filter
/// compiler routes them to set-membership before coercion applies.
pub fn coerce(value: Value, target: ScalarKind) -> Result<Value> {
    let coerced = match (&value, target) {
        (Value::Bool(_), ScalarKind::Bool) => Some(value.clone()),
        (Value::Int(0), ScalarKind::Bool) => Some(Value::Bool(false)),
        (Value::Int(1), ScalarKind::Bool) => Some(Value::Bool(true)),

        (Value::Int(_), ScalarKind::Int) => Some(value.clone()),
        (Value::Int(i), ScalarKind::Float) => Some(Value::Float(*i as f64)),
        (Value::Int(i), ScalarKind::Decimal) => Some(Value::Decimal(Decimal::from(*i))),

        (Value::Float(_), ScalarKind::Float) => Some(value.clone()),
        (Value::Float(x), ScalarKind::Decimal) => Decimal::from_f64(*x).map(Value::Decimal),
        (Value::Float(x), ScalarKind::Int) => float_to_int(*x).map(Value::Int),

        (Value::Decimal(_), ScalarKind::Decimal) => Some(value.clone()),
        (Value::Decimal(d), ScalarKind::Float) => d.to_f64().map(Value::Float),
        (Value::Decimal(d), ScalarKind::Int) if d.fract().is_zero() => {
            d.to_i64().map(Value::Int)
        }

        (Value::Timestamp(_), ScalarKind::Timestamp) => Some(value.clone()),
        (Value::Str(_), ScalarKind::Str) => Some(value.clone()),
        (Value::IntList(_), ScalarKind::IntList) => Some(value.clone()),

        _ => None,
    };

    coerced.ok_or_else(|| QueryError::TypeMismatch {
        value: value.to_string(),
        target: target.name().to_string(),
    })
}

/// Fraction-free floats convert to integers; everything else is lossy
fn float_to_int(x: f64) -> Option<i64> {
    if x.fract() == 0.0 && x >= i64::MIN as f64 && x <= i64::MAX as f64 {
        Some(x as i64)
    } else {
        None
    }
}
