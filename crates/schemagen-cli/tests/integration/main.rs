//! Integration tests for the schemagen CLI with real databases.
//!
//! These tests are behind the `integration-tests` feature flag and won't run
//! with regular `cargo test`. Each module creates its own fixture tables in
//! the database named by `TEST_MYSQL_URL` / `TEST_POSTGRES_URL`.

#![cfg(feature = "integration-tests")]

#[path = "../common/mod.rs"]
mod common;
mod mysql;
mod postgres;

use std::future::Future;

/// Block on fixture setup from a synchronous test.
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("create runtime")
        .block_on(future)
}
