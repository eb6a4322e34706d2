//! Literal token parser

use crate::error::{QueryError, Result};
use crate::value::Value;
use rust_decimal::Decimal;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Parse a raw literal token into a best-guess typed value
///
/// Trial order is fixed and significant: bool, integer, float, decimal,
/// timestamp, bracketed integer list, string fallback. `1` becomes an
/// integer and `1.5` a float; the coercion layer narrows them to the
/// resolved property's exact kind later.
pub fn parse_literal(token: &str) -> Result<Value> {
    if token.eq_ignore_ascii_case("true") {
        return Ok(Value::Bool(true));
    }
    if token.eq_ignore_ascii_case("false") {
        return Ok(Value::Bool(false));
    }

    if let Ok(i) = token.parse::<i64>() {
        return Ok(Value::Int(i));
    }

    if let Ok(x) = token.parse::<f64>() {
        return Ok(Value::Float(x));
    }

    if let Ok(d) = token.parse::<Decimal>() {
        return Ok(Value::Decimal(d));
    }

    if let Some(ts) = parse_timestamp(token) {
        return Ok(Value::Timestamp(ts));
    }

    if token.starts_with('[') && token.ends_with(']') {
        return parse_int_list(token);
    }

    Ok(Value::Str(token.to_string()))
}

/// Parse a timestamp token in one of the accepted locale-invariant shapes
///
/// Accepted: RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, and a
/// bare `YYYY-MM-DD` (midnight).
fn parse_timestamp(token: &str) -> Option<PrimitiveDateTime> {
    if let Ok(odt) = OffsetDateTime::parse(token, &time::format_description::well_known::Rfc3339) {
        return Some(PrimitiveDateTime::new(odt.date(), odt.time()));
    }

    let datetime_t = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(ts) = PrimitiveDateTime::parse(token, datetime_t) {
        return Some(ts);
    }

    let datetime_space = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    if let Ok(ts) = PrimitiveDateTime::parse(token, datetime_space) {
        return Some(ts);
    }

    let date_only = format_description!("[year]-[month]-[day]");
    if let Ok(d) = Date::parse(token, date_only) {
        return Some(d.midnight());
    }

    None
}

/// Parse a `[1,2,3]` token into an integer list
///
/// Any non-integer member fails the whole literal.
fn parse_int_list(token: &str) -> Result<Value> {
    let inner = &token[1..token.len() - 1];
    let mut items = Vec::new();

    for part in inner.split(',') {
        let n = part
            .trim()
            .parse::<i64>()
            .map_err(|_| QueryError::MalformedLiteral {
                raw: token.to_string(),
            })?;
        items.push(n);
    }

    Ok(Value::IntList(items))
}
