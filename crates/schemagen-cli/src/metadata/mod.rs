//! Live database metadata for schema introspection.
//!
//! A connection URL is parsed into a [`ConnectionDescriptor`], its scheme
//! picks one of the registered engine drivers, and the connected
//! [`LiveSource`] answers the metadata queries for the target schema.
//!
//! Registered engines: MySQL (and MariaDB), PostgreSQL, SQLite.

mod descriptor;
mod driver;
mod mysql;
mod postgres;
mod sqlite;

pub use descriptor::{redact, ConnectionDescriptor, Engine};
pub use driver::{fetch_schema, Driver, LiveSource};
pub use mysql::MysqlDriver;
pub use postgres::PostgresDriver;
pub use sqlite::SqliteDriver;
