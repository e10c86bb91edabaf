//! Types describing the schema metadata handed to templates.
//!
//! Engines normalize their catalog rows into these records; templates only
//! ever see this shape, never engine-specific rows.

mod schema;

pub use schema::{Column, SchemaModel, Table, TableSnapshot};
