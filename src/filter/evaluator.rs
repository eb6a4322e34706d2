//! Compiled predicates and condition evaluation

use crate::error::{QueryError, Result};
use crate::filter::ast::{Condition, Operator};
use crate::filter::cache;
use crate::path::AccessPlan;
use crate::schema::{Record, ScalarKind};
use crate::value::{coerce, Value};
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Compiled boolean predicate over a record type
///
/// Holds the OR-groups of a filter string with every condition's path
/// resolved and literal coerced. Immutable plain data: safe to evaluate
/// concurrently once built.
#[derive(Debug, Clone)]
pub struct Predicate<R: Record> {
    groups: Vec<Vec<CompiledCondition>>,
    _record: PhantomData<fn(&R)>,
}

#[derive(Debug, Clone)]
struct CompiledCondition {
    plan: AccessPlan,
    operator: Operator,
    value: Value,
}

impl<R: Record> Predicate<R> {
    /// Compile a filter string against the record type
    ///
    /// Either the whole string compiles or nothing is applied; every
    /// failure surfaces here, before any record is examined.
    pub fn compile(filter: &str) -> Result<Self> {
        let conditions = cache::get_or_parse(filter)?;
        Self::from_conditions(&conditions)
    }

    /// Compile an already-parsed condition list
    pub fn from_conditions(conditions: &[Condition]) -> Result<Self> {
        let mut groups = Vec::new();
        let mut group: Vec<CompiledCondition> = Vec::new();

        for condition in conditions {
            if !condition.conjunctive && !group.is_empty() {
                groups.push(std::mem::take(&mut group));
            }
            group.push(compile_condition::<R>(condition)?);
        }
        if !group.is_empty() {
            groups.push(group);
        }

        Ok(Self {
            groups,
            _record: PhantomData,
        })
    }

    /// Evaluate the predicate against one record
    ///
    /// Conditions within a group AND together; groups OR together. An
    /// empty predicate matches everything.
    pub fn matches(&self, record: &R) -> bool {
        if self.groups.is_empty() {
            return true;
        }
        self.groups
            .iter()
            .any(|group| group.iter().all(|c| c.eval(record as &dyn Record)))
    }
}

fn compile_condition<R: Record>(condition: &Condition) -> Result<CompiledCondition> {
    let plan = AccessPlan::resolve(R::schema(), &condition.path)?;
    let kind = plan.kind();

    let value = match (&condition.value, kind) {
        // An integer-list literal always means set-membership, whatever the
        // operator word said. The target must be integer-typed.
        (Value::IntList(_), ScalarKind::Int) => condition.value.clone(),
        (Value::IntList(_), ScalarKind::IntList) => condition.value.clone(),
        (Value::IntList(_), _) => {
            return Err(QueryError::TypeMismatch {
                value: condition.value.to_string(),
                target: kind.name().to_string(),
            });
        }

        // An integer literal against a list property tests list membership.
        (Value::Int(_), ScalarKind::IntList) => {
            validate_operator(condition.operator, kind, &condition.value)?;
            condition.value.clone()
        }

        _ => {
            let coerced = coerce(condition.value.clone(), kind)?;
            validate_operator(condition.operator, kind, &coerced)?;
            coerced
        }
    };

    Ok(CompiledCondition {
        plan,
        operator: condition.operator,
        value,
    })
}

/// Reject operator/kind combinations that could never evaluate
///
/// Relational comparison needs an ordered kind, the text operators need
/// text (or a list property under `Contains`), and booleans only support
/// equality. Failing here gives the caller a compile-time diagnostic
/// instead of a predicate that silently matches nothing.
fn validate_operator(operator: Operator, kind: ScalarKind, literal: &Value) -> Result<()> {
    let supported = match kind {
        ScalarKind::Int | ScalarKind::Float | ScalarKind::Decimal | ScalarKind::Timestamp => {
            !operator.is_text()
        }
        ScalarKind::Str => !operator.is_ordering(),
        ScalarKind::Bool => matches!(operator, Operator::Equal | Operator::NotEqual),
        ScalarKind::IntList => matches!(
            operator,
            Operator::Equal | Operator::NotEqual | Operator::Contains
        ),
    };

    if supported {
        Ok(())
    } else {
        Err(QueryError::TypeMismatch {
            value: literal.to_string(),
            target: format!("{} under operator {}", kind.name(), operator),
        })
    }
}

impl CompiledCondition {
    fn eval(&self, record: &dyn Record) -> bool {
        let Some(actual) = self.plan.read(record) else {
            // Absent values compare unequal to every literal; membership
            // against an absent value is vacuously false.
            return self.operator == Operator::NotEqual
                && !matches!(self.value, Value::IntList(_));
        };
        compare(&actual, self.operator, &self.value)
    }
}

fn compare(actual: &Value, operator: Operator, literal: &Value) -> bool {
    use Operator::*;

    match (actual, literal) {
        // shape-driven set membership
        (Value::Int(v), Value::IntList(set)) => set.contains(v),
        (Value::IntList(list), Value::IntList(set)) => list.iter().any(|v| set.contains(v)),
        (Value::IntList(list), Value::Int(v)) => match operator {
            Equal | Contains => list.contains(v),
            NotEqual => !list.contains(v),
            _ => false,
        },

        (Value::Str(s), Value::Str(lit)) => match operator {
            Equal => s == lit,
            NotEqual => s != lit,
            Contains => s.contains(lit.as_str()),
            StartsWith => s.starts_with(lit.as_str()),
            EndsWith => s.ends_with(lit.as_str()),
            _ => false,
        },

        (Value::Bool(a), Value::Bool(b)) => match operator {
            Equal => a == b,
            NotEqual => a != b,
            _ => false,
        },

        // ordered kinds: int, float, decimal, timestamp
        _ => match actual.compare(literal) {
            Some(ordering) => ordering_matches(operator, ordering),
            None => false,
        },
    }
}

const fn ordering_matches(operator: Operator, ordering: Ordering) -> bool {
    match operator {
        Operator::Equal => matches!(ordering, Ordering::Equal),
        Operator::NotEqual => !matches!(ordering, Ordering::Equal),
        Operator::GreaterThan => matches!(ordering, Ordering::Greater),
        Operator::GreaterThanOrEqual => !matches!(ordering, Ordering::Less),
        Operator::LessThan => matches!(ordering, Ordering::Less),
        Operator::LessThanOrEqual => !matches!(ordering, Ordering::Greater),
        _ => false,
    }
}
