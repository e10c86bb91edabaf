use schemagen_core::{Column, QueryError, SchemaSource, Table};
use std::collections::HashMap;

/// In-memory schema source that records the calls it receives.
#[derive(Default)]
pub struct FakeSource {
    pub tables: Vec<Table>,
    pub columns: HashMap<String, Vec<Column>>,
    /// Tables whose column listing fails.
    pub failing: Vec<String>,
    pub calls: Vec<String>,
}

impl FakeSource {
    pub fn with_table(mut self, table: Table, columns: Vec<Column>) -> Self {
        self.columns.insert(table.name.clone(), columns);
        self.tables.push(table);
        self
    }

    pub fn failing_on(mut self, table: &str) -> Self {
        self.failing.push(table.to_string());
        self
    }
}

impl SchemaSource for FakeSource {
    fn list_tables(&mut self) -> Result<Vec<Table>, QueryError> {
        self.calls.push("tables".to_string());
        Ok(self.tables.clone())
    }

    fn list_columns(&mut self, table_name: &str) -> Result<Vec<Column>, QueryError> {
        self.calls.push(format!("columns:{table_name}"));
        if self.failing.iter().any(|t| t == table_name) {
            return Err(QueryError::tables("Table doesn't exist"));
        }
        Ok(self.columns.get(table_name).cloned().unwrap_or_default())
    }
}

/// The single-table schema used across the end-to-end tests.
pub fn foo_source() -> FakeSource {
    FakeSource::default().with_table(
        Table::new("foo", "this is the test table"),
        vec![Column::new("col_varchar", "varchar(20)", "column type: VARCHAR")],
    )
}
