//! Template input from a file or stdin.

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;

/// Template text and the name used in error locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub name: String,
    pub content: String,
}

/// Read a template from `path`, or from stdin when `path` is `-`.
pub fn read_template(path: &Path) -> Result<TemplateSource> {
    if path == Path::new("-") {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_stdin() -> Result<TemplateSource> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read template from stdin")?;

    Ok(TemplateSource {
        name: "<stdin>".to_string(),
        content,
    })
}

fn read_from_file(path: &Path) -> Result<TemplateSource> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template: {}", path.display()))?;

    Ok(TemplateSource {
        name: path.display().to_string(),
        content,
    })
}
