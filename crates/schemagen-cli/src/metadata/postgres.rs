//! PostgreSQL metadata through `pg_catalog`.

use schemagen_core::{Column, ConnectError, QueryError, Table};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use std::time::Duration;

use super::descriptor::{ConnectionDescriptor, Engine};
use super::driver::{column_from_catalog, connection_error, liveness_error, EngineDriver};

/// Extras carry the column default and an `identity` tag, so both serial and
/// identity columns count as generated keys.
const AUTO_INCREMENT_MARKERS: &[&str] = &["nextval(", "identity"];

// Ordinary, partitioned and foreign tables plus views, in catalog order.
const TABLES_QUERY: &str = r#"
    SELECT
        c.relname::text AS table_name,
        obj_description(c.oid, 'pg_class') AS table_comment
    FROM pg_catalog.pg_class c
    JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
    WHERE n.nspname = $1
      AND c.relkind IN ('r', 'p', 'f', 'v', 'm')
"#;

const COLUMNS_QUERY: &str = r#"
    SELECT
        a.attname::text AS column_name,
        format_type(a.atttypid, a.atttypmod) AS column_type,
        col_description(a.attrelid, a.attnum) AS column_comment,
        concat_ws(
            ' ',
            pg_get_expr(d.adbin, d.adrelid),
            CASE WHEN a.attidentity IN ('a', 'd') THEN 'identity' END
        ) AS extra
    FROM pg_catalog.pg_attribute a
    JOIN pg_catalog.pg_class c ON c.oid = a.attrelid
    JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
    LEFT JOIN pg_catalog.pg_attrdef d ON d.adrelid = a.attrelid AND d.adnum = a.attnum
    WHERE n.nspname = $1
      AND c.relname = $2
      AND a.attnum > 0
      AND NOT a.attisdropped
    ORDER BY a.attnum
"#;

pub struct PostgresDriver {
    pool: PgPool,
    schema: String,
}

impl EngineDriver for PostgresDriver {
    const ENGINE: Engine = Engine::Postgres;

    async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self, ConnectError> {
        let pool = PgPoolOptions::new()
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
            schema: descriptor.schema().to_string(),
        })
    }

    async fn list_tables(&self) -> Result<Vec<Table>, QueryError> {
        let rows = sqlx::query(TABLES_QUERY)
            .bind(&self.schema)
            .fetch_all(&self.pool)
            .await
            .map_err(QueryError::tables)?;

        rows.iter()
            .map(|row| table_from_row(row).map_err(QueryError::tables))
            .collect()
    }

    async fn list_columns(&self, table_name: &str) -> Result<Vec<Column>, QueryError> {
        let rows = sqlx::query(COLUMNS_QUERY)
            .bind(&self.schema)
            .bind(table_name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| QueryError::columns(table_name, e))?;

        rows.iter()
            .map(|row| column_from_row(row).map_err(|e| QueryError::columns(table_name, e)))
            .collect()
    }
}

fn table_from_row(row: &PgRow) -> Result<Table, sqlx::Error> {
    let name: String = row.try_get("table_name")?;
    let comment: Option<String> = row.try_get("table_comment")?;
    Ok(Table::new(name, comment.unwrap_or_default()))
}

fn column_from_row(row: &PgRow) -> Result<Column, sqlx::Error> {
    let extra: Option<String> = row.try_get("extra")?;
    Ok(column_from_catalog(
        row.try_get("column_name")?,
        row.try_get("column_type")?,
        row.try_get("column_comment")?,
        extra.as_deref(),
        AUTO_INCREMENT_MARKERS,
    ))
}
