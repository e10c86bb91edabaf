//! Schema-driven text generation.
//!
//! A generation run lists a database schema through a [`SchemaSource`],
//! collects it into a [`SchemaModel`], and renders a user template against
//! it (see [`templater`]). Engine drivers live outside this crate; anything
//! implementing [`SchemaSource`] can feed the pipeline.

pub mod error;
pub mod naming;
pub mod source;
#[cfg(feature = "templating")]
pub mod templater;
pub mod typemap;
pub mod types;

pub use error::{ConnectError, Error, QueryError};
pub use source::{collect_schema, has_marker, SchemaSource};
#[cfg(feature = "templating")]
pub use templater::{render_schema, Bindings, ParsedTemplate, TemplateError};
pub use typemap::TypeMapping;
pub use types::{Column, SchemaModel, Table, TableSnapshot};
