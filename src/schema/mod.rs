//! Type-introspection boundary
//!
//! Query strings are compiled against record shapes the crate has never
//! seen. The only capability that requires is supplied here: a static
//! descriptor table per record type (property names and kinds) plus a
//! runtime read of a named property. Descriptors are hand-written by the
//! record's author; no runtime reflection or generated code is involved.

mod descriptor;
mod record;

pub use descriptor::{Field, FieldKind, ScalarKind, Schema, SchemaRef};
pub use record::{FieldRef, Record};
