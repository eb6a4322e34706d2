//! Shared record fixtures for tests
//!
//! Three entity shapes exercising every scalar kind, one level of nesting
//! that is always present, and a deeper optional chain
//! (`TestEntity.SubEntity.TestEntity2`, itself optionally looping back to
//! a sub-entity).

use crate::schema::{Field, FieldKind, FieldRef, Record, ScalarKind, Schema};
use crate::value::Value;
use rust_decimal::Decimal;
use time::macros::datetime;
use time::PrimitiveDateTime;

#[derive(Debug, Clone)]
pub struct TestEntity {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: PrimitiveDateTime,
    pub price: f64,
    pub amount: Decimal,
    pub sub: TestSubEntity,
}

#[derive(Debug, Clone)]
pub struct TestSubEntity {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub entity2: Option<Box<TestEntity2>>,
}

#[derive(Debug, Clone)]
pub struct TestEntity2 {
    pub id: i64,
    pub name: String,
    pub created_at: Option<PrimitiveDateTime>,
    pub password: String,
    pub sub: Option<Box<TestSubEntity>>,
}

impl Record for TestEntity {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "TestEntity",
            fields: &[
                Field {
                    name: "Id",
                    kind: FieldKind::Scalar(ScalarKind::Int),
                },
                Field {
                    name: "Name",
                    kind: FieldKind::Scalar(ScalarKind::Str),
                },
                Field {
                    name: "IsActive",
                    kind: FieldKind::Scalar(ScalarKind::Bool),
                },
                Field {
                    name: "CreatedAt",
                    kind: FieldKind::Scalar(ScalarKind::Timestamp),
                },
                Field {
                    name: "Price",
                    kind: FieldKind::Scalar(ScalarKind::Float),
                },
                Field {
                    name: "Amount",
                    kind: FieldKind::Scalar(ScalarKind::Decimal),
                },
                Field {
                    name: "SubEntity",
                    kind: FieldKind::Record(TestSubEntity::schema),
                },
            ],
        };
        &SCHEMA
    }

    fn field(&self, name: &str) -> FieldRef<'_> {
        match name {
            "Id" => FieldRef::Value(Value::Int(self.id)),
            "Name" => FieldRef::Value(Value::Str(self.name.clone())),
            "IsActive" => FieldRef::Value(Value::Bool(self.is_active)),
            "CreatedAt" => FieldRef::Value(Value::Timestamp(self.created_at)),
            "Price" => FieldRef::Value(Value::Float(self.price)),
            "Amount" => FieldRef::Value(Value::Decimal(self.amount)),
            "SubEntity" => FieldRef::Nested(&self.sub),
            _ => FieldRef::Absent,
        }
    }
}

impl Record for TestSubEntity {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "TestSubEntity",
            fields: &[
                Field {
                    name: "Id",
                    kind: FieldKind::Scalar(ScalarKind::Int),
                },
                Field {
                    name: "Name",
                    kind: FieldKind::Scalar(ScalarKind::Str),
                },
                Field {
                    name: "Age",
                    kind: FieldKind::Scalar(ScalarKind::Int),
                },
                Field {
                    name: "TestEntity2",
                    kind: FieldKind::Record(TestEntity2::schema),
                },
            ],
        };
        &SCHEMA
    }

    fn field(&self, name: &str) -> FieldRef<'_> {
        match name {
            "Id" => FieldRef::Value(Value::Int(self.id)),
            "Name" => FieldRef::Value(Value::Str(self.name.clone())),
            "Age" => FieldRef::Value(Value::Int(self.age)),
            "TestEntity2" => match &self.entity2 {
                Some(entity) => FieldRef::Nested(entity.as_ref()),
                None => FieldRef::Absent,
            },
            _ => FieldRef::Absent,
        }
    }
}

impl Record for TestEntity2 {
    fn schema() -> &'static Schema {
        static SCHEMA: Schema = Schema {
            name: "TestEntity2",
            fields: &[
                Field {
                    name: "Id",
                    kind: FieldKind::Scalar(ScalarKind::Int),
                },
                Field {
                    name: "Name",
                    kind: FieldKind::Scalar(ScalarKind::Str),
                },
                Field {
                    name: "CreatedAt",
                    kind: FieldKind::Scalar(ScalarKind::Timestamp),
                },
                Field {
                    name: "Password",
                    kind: FieldKind::Scalar(ScalarKind::Str),
                },
                Field {
                    name: "SubEntity",
                    kind: FieldKind::Record(TestSubEntity::schema),
                },
            ],
        };
        &SCHEMA
    }

    fn field(&self, name: &str) -> FieldRef<'_> {
        match name {
            "Id" => FieldRef::Value(Value::Int(self.id)),
            "Name" => FieldRef::Value(Value::Str(self.name.clone())),
            "CreatedAt" => match self.created_at {
                Some(ts) => FieldRef::Value(Value::Timestamp(ts)),
                None => FieldRef::Absent,
            },
            "Password" => FieldRef::Value(Value::Str(self.password.clone())),
            "SubEntity" => match &self.sub {
                Some(sub) => FieldRef::Nested(sub.as_ref()),
                None => FieldRef::Absent,
            },
            _ => FieldRef::Absent,
        }
    }
}

/// The canonical three-record collection most tests run against
pub fn entities() -> Vec<TestEntity> {
    vec![
        TestEntity {
            id: 1,
            name: "A".to_string(),
            is_active: true,
            created_at: datetime!(2024-05-10 12:00),
            price: 10.5,
            amount: Decimal::new(105, 1),
            sub: TestSubEntity {
                id: 11,
                name: "SubA".to_string(),
                age: 30,
                entity2: None,
            },
        },
        TestEntity {
            id: 2,
            name: "B".to_string(),
            is_active: true,
            created_at: datetime!(2024-05-11 12:00),
            price: 20.5,
            amount: Decimal::new(205, 1),
            sub: TestSubEntity {
                id: 12,
                name: "SubB".to_string(),
                age: 25,
                entity2: None,
            },
        },
        TestEntity {
            id: 3,
            name: "C".to_string(),
            is_active: false,
            created_at: datetime!(2022-01-01 0:00),
            price: 30.5,
            amount: Decimal::new(305, 1),
            sub: TestSubEntity {
                id: 13,
                name: "SubC".to_string(),
                age: 25,
                entity2: Some(Box::new(TestEntity2 {
                    id: 21,
                    name: "Deep C".to_string(),
                    created_at: None,
                    password: "hunter2".to_string(),
                    sub: None,
                })),
            },
        },
    ]
}
