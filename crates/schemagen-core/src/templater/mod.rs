//! Template rendering over a collected schema.
//!
//! Templates use Jinja2 syntax (rendered by MiniJinja). A run goes through
//! these states, never skipping one:
//!
//! ```text
//! source text ──parse──▶ ParsedTemplate ──render──▶ done
//!      │                        │
//!      └─ TemplateError::Syntax └─ TemplateError::Execution / Write
//! ```
//!
//! A syntax error is raised by [`ParsedTemplate::parse`], before any output
//! exists. Execution errors leave already-streamed output in place; callers
//! that need all-or-nothing output render into a buffer first.
//!
//! # Context
//!
//! | name            | value                                              |
//! |-----------------|----------------------------------------------------|
//! | `tables`        | tables in engine order (`name`, `comment`)         |
//! | `getColumns`    | `getColumns(table)` → columns of that table        |
//! | `mapColumnType` | `mapColumnType(column)` → mapped type or `""`      |
//! | `toUpper`, `toLower`, `toSnake`, `toKebab`, `toCamel`, `toLowerCamel` | string helpers, also usable as filters |
//!
//! Columns expose `name`, `sql_type`, `comment` and `auto_increment`.
//!
//! # Example
//!
//! ```
//! use schemagen_core::templater::{Bindings, ParsedTemplate};
//! use schemagen_core::{Column, SchemaModel, Table, TypeMapping};
//! use std::collections::HashMap;
//!
//! let mut columns = HashMap::new();
//! columns.insert(
//!     "foo".to_string(),
//!     vec![Column::new("col_varchar", "varchar(20)", "column type: VARCHAR")],
//! );
//! let model = SchemaModel::new(vec![Table::new("foo", "this is the test table")], columns);
//! let mapping: TypeMapping = [("varchar(20)", "String")].into_iter().collect();
//!
//! let template = ParsedTemplate::parse(
//!     "struct.tmpl",
//!     "{% for t in tables %}struct {{ toCamel(t.name) }} { \
//!      {% for c in getColumns(t) %}{{ c.name }}: {{ mapColumnType(c) }}{% endfor %} }\
//!      {% endfor %}",
//! )
//! .unwrap();
//!
//! let rendered = template.render_to_string(&Bindings::new(model, mapping)).unwrap();
//! assert_eq!(rendered, "struct Foo { col_varchar: String }");
//! ```

mod error;
mod helpers;
mod jinja;

pub use error::{SourceLocation, TemplateError};
pub use helpers::STRING_HELPERS;
pub use jinja::ParsedTemplate;

use crate::typemap::TypeMapping;
use crate::types::SchemaModel;
use std::io::Write;
use std::sync::Arc;

/// Data a template is executed against: the run's schema and the type mapping.
///
/// The type mapping is behind an [`Arc`] so one loaded mapping can serve
/// several runs.
#[derive(Debug, Clone)]
pub struct Bindings {
    model: Arc<SchemaModel>,
    mapping: Arc<TypeMapping>,
}

impl Bindings {
    pub fn new(model: impl Into<Arc<SchemaModel>>, mapping: impl Into<Arc<TypeMapping>>) -> Self {
        Self {
            model: model.into(),
            mapping: mapping.into(),
        }
    }

    pub fn model(&self) -> &SchemaModel {
        &self.model
    }

    pub fn mapping(&self) -> &TypeMapping {
        &self.mapping
    }
}

/// Parses `source` and renders it once into `out`.
///
/// Convenience for callers that do not need to separate parsing from
/// execution.
pub fn render_schema<W: Write>(
    name: &str,
    source: &str,
    bindings: &Bindings,
    out: W,
) -> Result<u64, TemplateError> {
    ParsedTemplate::parse(name, source)?.render_to_write(bindings, out)
}
