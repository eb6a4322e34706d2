//! Dotted-path resolution against a record schema

use crate::error::{QueryError, Result};
use crate::schema::{FieldKind, FieldRef, Record, ScalarKind, Schema};
use crate::value::Value;
use smallvec::SmallVec;

/// Resolved, type-checked representation of a property path
///
/// Carries the segment chain and the terminal scalar kind. Reads are
/// null-safe at every step: an absent intermediate or terminal value
/// short-circuits to "absent" instead of faulting, and the caller decides
/// whether absent means "excluded" (filtering) or "the kind's default
/// value" (sorting).
#[derive(Debug, Clone)]
pub struct AccessPlan {
    segments: SmallVec<[String; 3]>,
    kind: ScalarKind,
}

impl AccessPlan {
    /// Resolve a `.`-separated path against a schema
    ///
    /// Every segment is looked up by exact name; a missing property fails
    /// with `UnknownProperty`, and a path that terminates in a nested
    /// record rather than a scalar fails with `TypeMismatch`.
    pub fn resolve(root: &'static Schema, path: &str) -> Result<Self> {
        let mut schema = root;
        let mut segments: SmallVec<[String; 3]> = SmallVec::new();
        let mut iter = path.split('.').peekable();

        while let Some(segment) = iter.next() {
            let field = schema
                .field(segment)
                .ok_or_else(|| QueryError::UnknownProperty {
                    segment: segment.to_string(),
                    on_type: schema.name.to_string(),
                })?;
            segments.push(segment.to_string());

            match field.kind {
                FieldKind::Scalar(kind) => {
                    return if let Some(rest) = iter.next() {
                        // scalar mid-path: the next segment has nothing to
                        // resolve against
                        Err(QueryError::UnknownProperty {
                            segment: rest.to_string(),
                            on_type: kind.name().to_string(),
                        })
                    } else {
                        Ok(Self { segments, kind })
                    };
                }
                FieldKind::Record(next) => {
                    if iter.peek().is_none() {
                        return Err(QueryError::TypeMismatch {
                            value: path.to_string(),
                            target: "a scalar property".to_string(),
                        });
                    }
                    schema = next();
                }
            }
        }

        // split('.') yields at least one segment for any input
        unreachable!()
    }

    /// Terminal scalar kind of the path
    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// Default value of the terminal kind
    #[inline]
    pub fn default_value(&self) -> Value {
        self.kind.default_value()
    }

    /// Dotted form of the resolved path
    pub fn path(&self) -> String {
        self.segments.join(".")
    }

    /// Read the path's value from a record, null-safely
    ///
    /// Returns `None` when any step along the chain is absent.
    pub fn read(&self, record: &dyn Record) -> Option<Value> {
        let (last, intermediate) = self.segments.split_last()?;

        let mut current = record;
        for segment in intermediate {
            match current.field(segment) {
                FieldRef::Nested(next) => current = next,
                _ => return None,
            }
        }

        match current.field(last) {
            FieldRef::Value(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{entities, TestEntity};

    fn plan(path: &str) -> Result<AccessPlan> {
        AccessPlan::resolve(TestEntity::schema(), path)
    }

    #[test]
    fn test_resolve_shallow() {
        let plan = plan("Name").unwrap();
        assert_eq!(plan.kind(), ScalarKind::Str);
        assert_eq!(plan.path(), "Name");
    }

    #[test]
    fn test_resolve_nested() {
        let plan = plan("SubEntity.Age").unwrap();
        assert_eq!(plan.kind(), ScalarKind::Int);
    }

    #[test]
    fn test_resolve_deep() {
        let plan = plan("SubEntity.TestEntity2.Name").unwrap();
        assert_eq!(plan.kind(), ScalarKind::Str);
    }

    #[test]
    fn test_unknown_property() {
        let err = plan("Nope").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownProperty {
                segment: "Nope".to_string(),
                on_type: "TestEntity".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_nested_property() {
        let err = plan("SubEntity.Nope").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownProperty {
                segment: "Nope".to_string(),
                on_type: "TestSubEntity".to_string(),
            }
        );
    }

    #[test]
    fn test_segment_beyond_scalar() {
        let err = plan("Name.Length").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnknownProperty {
                segment: "Length".to_string(),
                on_type: "string".to_string(),
            }
        );
    }

    #[test]
    fn test_record_terminal_rejected() {
        let err = plan("SubEntity").unwrap_err();
        assert!(matches!(err, QueryError::TypeMismatch { .. }));
    }

    #[test]
    fn test_read_shallow_and_nested() {
        let records = entities();
        let name = plan("Name").unwrap().read(&records[0]).unwrap();
        assert_eq!(name, Value::Str("A".to_string()));

        let age = plan("SubEntity.Age").unwrap().read(&records[0]).unwrap();
        assert_eq!(age, Value::Int(30));
    }

    #[test]
    fn test_read_absent_intermediate() {
        let records = entities();
        // record 0 has no TestEntity2 under its sub-entity
        let plan = plan("SubEntity.TestEntity2.Name").unwrap();
        assert_eq!(plan.read(&records[0]), None);
        // record 2 does
        assert_eq!(
            plan.read(&records[2]),
            Some(Value::Str("Deep C".to_string()))
        );
    }
}
