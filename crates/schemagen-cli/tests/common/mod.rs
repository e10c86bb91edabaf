//! Shared helpers for CLI tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Run the schemagen CLI with the given arguments and return the output.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_schemagen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute schemagen CLI")
}

/// Run the schemagen CLI and assert it succeeds.
pub fn run_cli_success(args: &[&str]) -> Output {
    let output = run_cli(args);
    if !output.status.success() {
        panic!(
            "CLI failed with status {:?}\nstderr: {}\nstdout: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    output
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture file");
    path
}

/// Create an SQLite database at `dir/name` from DDL statements and return
/// its connection URL.
pub fn sqlite_fixture(dir: &Path, name: &str, ddl: &[&str]) -> String {
    let path = dir.join(name);
    let conn = rusqlite::Connection::open(&path).expect("open sqlite fixture");
    for statement in ddl {
        conn.execute(statement, []).expect("apply fixture DDL");
    }
    format!("sqlite://{}", path.display())
}
