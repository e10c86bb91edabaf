//! MySQL / MariaDB metadata through `INFORMATION_SCHEMA`.

use schemagen_core::{Column, ConnectError, QueryError, Table};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;
use std::time::Duration;

use super::descriptor::{ConnectionDescriptor, Engine};
use super::driver::{column_from_catalog, connection_error, liveness_error, EngineDriver};

/// `EXTRA` values that mark a generated key.
const AUTO_INCREMENT_MARKERS: &[&str] = &["auto_increment"];

// Catalog columns are cast to CHAR: MySQL 8 reports some of them as binary
// strings, which do not decode as `String`.
const TABLES_QUERY: &str = r#"
    SELECT
        CAST(TABLE_NAME AS CHAR) AS table_name,
        CAST(TABLE_COMMENT AS CHAR) AS table_comment
    FROM INFORMATION_SCHEMA.TABLES
    WHERE TABLE_SCHEMA = ?
"#;

const COLUMNS_QUERY: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR) AS column_name,
        CAST(COLUMN_TYPE AS CHAR) AS column_type,
        CAST(COLUMN_COMMENT AS CHAR) AS column_comment,
        CAST(EXTRA AS CHAR) AS extra
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION
"#;

pub struct MysqlDriver {
    pool: MySqlPool,
    database: String,
}

impl EngineDriver for MysqlDriver {
    const ENGINE: Engine = Engine::Mysql;

    async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self, ConnectError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(30))
            .connect(descriptor.url())
            .await
            .map_err(|e| connection_error(Self::ENGINE, e))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|e| liveness_error(Self::ENGINE, e))?;

        Ok(Self {
            pool,
            database: descriptor.schema().to_string(),
        })
    }

    async fn list_tables(&self) -> Result<Vec<Table>, QueryError> {
        let rows = sqlx::query(TABLES_QUERY)
            .bind(&self.database)
            .fetch_all(&self.pool)
            .await
            .map_err(QueryError::tables)?;

        rows.iter()
            .map(|row| table_from_row(row).map_err(QueryError::tables))
            .collect()
    }

    async fn list_columns(&self, table_name: &str) -> Result<Vec<Column>, QueryError> {
        let rows = sqlx::query(COLUMNS_QUERY)
            .bind(&self.database)
            .bind(table_name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| QueryError::columns(table_name, e))?;

        rows.iter()
            .map(|row| column_from_row(row).map_err(|e| QueryError::columns(table_name, e)))
            .collect()
    }
}

fn table_from_row(row: &MySqlRow) -> Result<Table, sqlx::Error> {
    let name: String = row.try_get("table_name")?;
    let comment: Option<String> = row.try_get("table_comment")?;
    Ok(Table::new(name, comment.unwrap_or_default()))
}

fn column_from_row(row: &MySqlRow) -> Result<Column, sqlx::Error> {
    let extra: Option<String> = row.try_get("extra")?;
    Ok(column_from_catalog(
        row.try_get("column_name")?,
        row.try_get("column_type")?,
        row.try_get("column_comment")?,
        extra.as_deref(),
        AUTO_INCREMENT_MARKERS,
    ))
}
