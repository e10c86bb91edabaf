//! schemagen CLI library.
//!
//! This module exposes internal types for testing purposes.
//! The main entry point is the `schemagen` binary.

pub mod cli;
pub mod input;
pub mod logging;
pub mod mapping;
pub mod metadata;
pub mod output;

// Re-export commonly used types
pub use cli::Args;
