//! SQLite metadata through `sqlite_master` and `pragma_table_info`.
//!
//! SQLite keeps no comments, so every comment is empty. A column is
//! auto-increment when it is the `INTEGER PRIMARY KEY` of a table whose DDL
//! uses the `AUTOINCREMENT` keyword. Names, string literals and comments in
//! the DDL never count.
//!
//! Queries are scoped to the target schema: `main` by default, or any
//! attached database name (`temp` included).

use schemagen_core::{Column, ConnectError, QueryError, Table};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;

use super::descriptor::{ConnectionDescriptor, Engine};
use super::driver::{column_from_catalog, connection_error, liveness_error, EngineDriver};

const AUTOINCREMENT: &str = "AUTOINCREMENT";

const AUTO_INCREMENT_MARKERS: &[&str] = &[AUTOINCREMENT];

const COLUMNS_QUERY: &str = r#"
    SELECT name, type, pk FROM pragma_table_info(?1, ?2)
"#;

pub struct SqliteDriver {
    pool: SqlitePool,
    schema: String,
}

impl SqliteDriver {
    fn tables_query(&self) -> String {
        format!(
            "SELECT name FROM {}.sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
            quote_ident(&self.schema)
        )
    }

    fn table_ddl_query(&self) -> String {
        format!(
            "SELECT sql FROM {}.sqlite_master WHERE type = 'table' AND name = ?1",
            quote_ident(&self.schema)
        )
    }
}

impl EngineDriver for SqliteDriver {
    const ENGINE: Engine = Engine::Sqlite;

    async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self, ConnectError> {
        let options = SqliteConnectOptions::from_str(descriptor.url())
            .map_err(|e| ConnectError::InvalidDescriptor(e.to_string()))?
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| connection_error(Self::ENGINE, e))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|e| liveness_error(Self::ENGINE, e))?;

        Ok(Self {
            pool,
            schema: descriptor.schema().to_string(),
        })
    }

    async fn list_tables(&self) -> Result<Vec<Table>, QueryError> {
        let query = self.tables_query();
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(QueryError::tables)?;

        rows.iter()
            .map(|row| {
                let name: String = row.try_get("name").map_err(QueryError::tables)?;
                Ok(Table::new(name, ""))
            })
            .collect()
    }

    async fn list_columns(&self, table_name: &str) -> Result<Vec<Column>, QueryError> {
        let query = self.table_ddl_query();
        let ddl = sqlx::query_scalar::<_, Option<String>>(&query)
            .bind(table_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| QueryError::columns(table_name, e))?
            .ok_or_else(|| QueryError::columns(table_name, "no such table"))?;
        let autoincrement = ddl.as_deref().is_some_and(declares_autoincrement);

        let rows = sqlx::query(COLUMNS_QUERY)
            .bind(table_name)
            .bind(&self.schema)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| QueryError::columns(table_name, e))?;

        rows.iter()
            .map(|row| {
                column_from_row(row, autoincrement).map_err(|e| QueryError::columns(table_name, e))
            })
            .collect()
    }
}

fn column_from_row(row: &SqliteRow, autoincrement: bool) -> Result<Column, sqlx::Error> {
    let sql_type: String = row.try_get("type")?;
    let pk: i64 = row.try_get("pk")?;
    let extras =
        (autoincrement && pk > 0 && sql_type.eq_ignore_ascii_case("INTEGER")).then_some(AUTOINCREMENT);

    Ok(column_from_catalog(
        row.try_get("name")?,
        sql_type,
        None,
        extras,
        AUTO_INCREMENT_MARKERS,
    ))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Reports whether `ddl` uses the `AUTOINCREMENT` keyword.
///
/// String literals, quoted identifiers and comments are skipped, and a bare
/// word only matches as a whole (`autoincrement_note` is a column name).
fn declares_autoincrement(ddl: &str) -> bool {
    let mut chars = ddl.chars().peekable();
    let mut word = String::new();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || c == '_' || c == '$' {
            word.push(c);
            continue;
        }
        if word.eq_ignore_ascii_case(AUTOINCREMENT) {
            return true;
        }
        word.clear();

        match c {
            '\'' | '"' | '`' | '[' => {
                let close = if c == '[' { ']' } else { c };
                chars.by_ref().find(|&n| n == close);
            }
            '-' if chars.peek() == Some(&'-') => {
                chars.by_ref().find(|&n| n == '\n');
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = ' ';
                chars.by_ref().find(|&n| {
                    let end = prev == '*' && n == '/';
                    prev = n;
                    end
                });
            }
            _ => {}
        }
    }

    word.eq_ignore_ascii_case(AUTOINCREMENT)
}
