//! Engine registry and the blocking facade over the async drivers.

use schemagen_core::{
    collect_schema, has_marker, Column, ConnectError, QueryError, SchemaModel, SchemaSource, Table,
};
use tokio::runtime::Runtime;
use tracing::{debug, info};

use super::descriptor::{redact, ConnectionDescriptor, Engine};
use super::mysql::MysqlDriver;
use super::postgres::PostgresDriver;
use super::sqlite::SqliteDriver;

/// The three metadata operations every engine driver answers.
///
/// Connecting includes a liveness round-trip, so a returned driver is known
/// to be usable.
pub(crate) trait EngineDriver: Sized {
    const ENGINE: Engine;

    async fn connect(descriptor: &ConnectionDescriptor) -> Result<Self, ConnectError>;

    async fn list_tables(&self) -> Result<Vec<Table>, QueryError>;

    async fn list_columns(&self, table_name: &str) -> Result<Vec<Column>, QueryError>;
}

/// A connected driver for one of the registered engines.
pub enum Driver {
    Mysql(MysqlDriver),
    Postgres(PostgresDriver),
    Sqlite(SqliteDriver),
}

impl Driver {
    pub fn engine(&self) -> Engine {
        match self {
            Self::Mysql(_) => MysqlDriver::ENGINE,
            Self::Postgres(_) => PostgresDriver::ENGINE,
            Self::Sqlite(_) => SqliteDriver::ENGINE,
        }
    }
}

/// A live database connection usable as a [`SchemaSource`].
///
/// Owns the runtime the driver's pool was created on; each metadata call
/// blocks on it until the query completes.
pub struct LiveSource {
    runtime: Runtime,
    driver: Driver,
}

impl LiveSource {
    /// Resolves the descriptor's engine to its driver and opens a connection.
    pub fn connect(descriptor: &ConnectionDescriptor) -> Result<Self, ConnectError> {
        let engine = descriptor.engine();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| connection_error(engine, e))?;

        debug!(url = %redact(descriptor.url()), schema = descriptor.schema(), "connecting");

        let driver = match engine {
            Engine::Mysql => Driver::Mysql(runtime.block_on(MysqlDriver::connect(descriptor))?),
            Engine::Postgres => {
                Driver::Postgres(runtime.block_on(PostgresDriver::connect(descriptor))?)
            }
            Engine::Sqlite => Driver::Sqlite(runtime.block_on(SqliteDriver::connect(descriptor))?),
        };

        info!(engine = %engine, schema = descriptor.schema(), "connected");
        Ok(Self { runtime, driver })
    }

    pub fn engine(&self) -> Engine {
        self.driver.engine()
    }
}

impl SchemaSource for LiveSource {
    fn list_tables(&mut self) -> Result<Vec<Table>, QueryError> {
        match &self.driver {
            Driver::Mysql(d) => self.runtime.block_on(d.list_tables()),
            Driver::Postgres(d) => self.runtime.block_on(d.list_tables()),
            Driver::Sqlite(d) => self.runtime.block_on(d.list_tables()),
        }
    }

    fn list_columns(&mut self, table_name: &str) -> Result<Vec<Column>, QueryError> {
        match &self.driver {
            Driver::Mysql(d) => self.runtime.block_on(d.list_columns(table_name)),
            Driver::Postgres(d) => self.runtime.block_on(d.list_columns(table_name)),
            Driver::Sqlite(d) => self.runtime.block_on(d.list_columns(table_name)),
        }
    }
}

/// Connects to the database and collects its schema.
///
/// This is the main entry point for CLI usage.
pub fn fetch_schema(descriptor: &ConnectionDescriptor) -> Result<SchemaModel, schemagen_core::Error> {
    let mut source = LiveSource::connect(descriptor)?;
    let model = collect_schema(&mut source)?;
    info!(
        engine = %source.engine(),
        schema = descriptor.schema(),
        tables = model.table_count(),
        columns = model.column_count(),
        "collected schema"
    );
    Ok(model)
}

/// Builds a [`Column`] from raw catalog values.
///
/// A missing comment becomes an empty string; the auto-increment flag is set
/// when `extras` contains any of the engine's markers.
pub(crate) fn column_from_catalog(
    name: String,
    sql_type: String,
    comment: Option<String>,
    extras: Option<&str>,
    markers: &[&str],
) -> Column {
    let auto_increment = extras.is_some_and(|extras| has_marker(extras, markers));
    Column::new(name, sql_type, comment.unwrap_or_default()).with_auto_increment(auto_increment)
}

pub(crate) fn connection_error(engine: Engine, err: impl ToString) -> ConnectError {
    ConnectError::Connection {
        engine: engine.to_string(),
        message: err.to_string(),
    }
}

pub(crate) fn liveness_error(engine: Engine, err: impl ToString) -> ConnectError {
    ConnectError::Liveness {
        engine: engine.to_string(),
        message: err.to_string(),
    }
}
