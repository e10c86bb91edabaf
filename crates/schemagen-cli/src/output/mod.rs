//! Output destinations and formatting.

pub mod json;

pub use json::format_schema_json;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Run `produce` against the selected destination.
///
/// With a file path, output is buffered and the file is written only when
/// `produce` succeeds, so a failed run never leaves a truncated file behind.
/// Without one, output streams to stdout.
pub fn emit<F>(output: Option<&Path>, produce: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    match output {
        Some(path) => {
            let mut buf = Vec::new();
            produce(&mut buf)?;
            fs::write(path, &buf)
                .with_context(|| format!("Failed to write output file: {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            produce(&mut writer)?;
            writer.flush().context("Failed to write to stdout")
        }
    }
}
