//! Type mapping configuration file.
//!
//! ```yaml
//! column_types:
//!   varchar(20): String
//!   bigint unsigned: u64
//! ```
//!
//! Only `column_types` is read; other keys are ignored so the file can be
//! shared with other tools.

use anyhow::{Context, Result};
use schemagen_core::TypeMapping;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct MappingFile {
    #[serde(default)]
    column_types: Option<TypeMapping>,
}

/// Load the type mapping from `path`, or an empty mapping when no file is given.
pub fn load_type_mapping(path: Option<&Path>) -> Result<TypeMapping> {
    let Some(path) = path else {
        return Ok(TypeMapping::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read mapping file: {}", path.display()))?;

    parse_type_mapping(&content)
        .with_context(|| format!("Invalid mapping file: {}", path.display()))
}

/// Parse a YAML mapping document.
pub fn parse_type_mapping(content: &str) -> Result<TypeMapping> {
    if content.trim().is_empty() {
        return Ok(TypeMapping::default());
    }

    let file: MappingFile = serde_yaml::from_str(content)?;
    Ok(file.column_types.unwrap_or_default())
}
