//! Normalized schema records shared by every engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A table as reported by the engine's metadata catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    /// Free-text annotation. Empty when the engine has none.
    #[serde(default)]
    pub comment: String,
}

impl Table {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
        }
    }
}

/// A column of a [`Table`].
///
/// `sql_type` is kept exactly as the engine spells it (`varchar(20)`,
/// `bigint unsigned`); type mapping matches against that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub sql_type: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub auto_increment: bool,
}

impl Column {
    pub fn new(
        name: impl Into<String>,
        sql_type: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            comment: comment.into(),
            auto_increment: false,
        }
    }

    pub fn with_auto_increment(mut self, auto_increment: bool) -> Self {
        self.auto_increment = auto_increment;
        self
    }
}

/// Tables and their columns fetched during one generation run.
///
/// Columns are associated with tables by name rather than nested, so the
/// model is built once from the fetched rows and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModel {
    tables: Vec<Table>,
    columns: HashMap<String, Vec<Column>>,
}

impl SchemaModel {
    /// Builds a model from tables in engine order and a name-keyed column map.
    ///
    /// Column entries whose key is not one of `tables` are dropped: every
    /// column in the model belongs to a fetched table.
    pub fn new(tables: Vec<Table>, mut columns: HashMap<String, Vec<Column>>) -> Self {
        columns.retain(|name, _| tables.iter().any(|t| &t.name == name));
        Self { tables, columns }
    }

    /// Tables in the order the engine returned them.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Columns fetched for `table_name`, or an empty slice when none were.
    pub fn columns(&self, table_name: &str) -> &[Column] {
        self.columns
            .get(table_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Flattens the model into tables with nested columns, in engine order.
    pub fn to_snapshot(&self) -> Vec<TableSnapshot<'_>> {
        self.tables
            .iter()
            .map(|table| TableSnapshot {
                name: &table.name,
                comment: &table.comment,
                columns: self.columns(&table.name),
            })
            .collect()
    }
}

/// Serializable view of one table and its columns, used by schema dumps.
#[derive(Debug, Serialize)]
pub struct TableSnapshot<'a> {
    pub name: &'a str,
    pub comment: &'a str,
    pub columns: &'a [Column],
}
