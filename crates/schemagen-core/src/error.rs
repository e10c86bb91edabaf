//! Error types for a generation run.
//!
//! Each stage of the pipeline has its own error type so callers can tell
//! where a run stopped:
//!
//! - [`ConnectError`]: the descriptor could not be resolved to a driver, or
//!   the engine could not be reached. Nothing has been queried yet.
//! - [`QueryError`]: a metadata query failed. Column failures carry the table
//!   name.
//! - [`crate::templater::TemplateError`]: the template did not parse or failed
//!   while executing.
//!
//! [`Error`] wraps all three for callers that only need to report and exit.
//! Unmapped column types and tables without columns are not errors.

use thiserror::Error;

/// Failure to resolve or open a database connection.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The connection string could not be parsed.
    #[error("invalid connection descriptor: {0}")]
    InvalidDescriptor(String),

    /// No driver is registered for the engine identifier.
    #[error("unsupported database engine: {0}")]
    UnsupportedEngine(String),

    /// The engine refused or dropped the connection attempt.
    #[error("failed to connect to {engine}: {message}")]
    Connection { engine: String, message: String },

    /// The connection opened but did not answer a liveness query.
    #[error("{engine} did not answer liveness check: {message}")]
    Liveness { engine: String, message: String },
}

/// Failure of a metadata query.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to list tables: {message}")]
    Tables { message: String },

    #[error("failed to list columns for table `{table}`: {message}")]
    Columns { table: String, message: String },
}

impl QueryError {
    pub fn tables(message: impl ToString) -> Self {
        Self::Tables {
            message: message.to_string(),
        }
    }

    pub fn columns(table: impl Into<String>, message: impl ToString) -> Self {
        Self::Columns {
            table: table.into(),
            message: message.to_string(),
        }
    }

    /// Table whose column listing failed, if any.
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::Tables { .. } => None,
            Self::Columns { table, .. } => Some(table),
        }
    }
}

/// Any error that ends a generation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[cfg(feature = "templating")]
    #[error(transparent)]
    Template(#[from] crate::templater::TemplateError),
}
