//! Metadata sources and schema collection.

use crate::error::QueryError;
use crate::types::{Column, SchemaModel, Table};
use std::collections::HashMap;
#[cfg(feature = "tracing")]
use tracing::debug;

/// An opened connection that can list a schema's tables and columns.
///
/// Implementations normalize engine rows into [`Table`] and [`Column`]:
/// rows come back in engine order, null comments become empty strings, and
/// the auto-increment flag is derived with [`has_marker`].
pub trait SchemaSource {
    /// Lists the tables of the target schema in engine order.
    fn list_tables(&mut self) -> Result<Vec<Table>, QueryError>;

    /// Lists the columns of `table_name` in engine order.
    fn list_columns(&mut self, table_name: &str) -> Result<Vec<Column>, QueryError>;
}

impl<S: SchemaSource + ?Sized> SchemaSource for &mut S {
    fn list_tables(&mut self) -> Result<Vec<Table>, QueryError> {
        (**self).list_tables()
    }

    fn list_columns(&mut self, table_name: &str) -> Result<Vec<Column>, QueryError> {
        (**self).list_columns(table_name)
    }
}

/// Lists tables, then the columns of each table one at a time, and builds the
/// run's [`SchemaModel`].
///
/// Stops at the first failure. A column failure is always reported with the
/// name of the table being listed, and no partial model is returned.
pub fn collect_schema<S: SchemaSource>(mut source: S) -> Result<SchemaModel, QueryError> {
    let tables = source.list_tables()?;

    #[cfg(feature = "tracing")]
    debug!(tables = tables.len(), "listed tables");

    let mut columns = HashMap::with_capacity(tables.len());
    for table in &tables {
        let fetched = source
            .list_columns(&table.name)
            .map_err(|err| tag_with_table(err, &table.name))?;

        #[cfg(feature = "tracing")]
        debug!(table = %table.name, columns = fetched.len(), "listed columns");

        columns.insert(table.name.clone(), fetched);
    }

    Ok(SchemaModel::new(tables, columns))
}

fn tag_with_table(err: QueryError, table: &str) -> QueryError {
    match err {
        QueryError::Tables { message } => QueryError::columns(table, message),
        tagged @ QueryError::Columns { .. } => tagged,
    }
}

/// Reports whether an engine's free-text extras field carries any of the
/// engine's markers.
///
/// Matching is a plain substring test on the text the engine returned.
pub fn has_marker(extras: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| extras.contains(marker))
}
