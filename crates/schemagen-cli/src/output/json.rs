//! JSON output formatting.

use schemagen_core::SchemaModel;

/// Format the collected schema as JSON: tables in engine order, each with
/// its columns.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_schema_json(model: &SchemaModel, compact: bool) -> serde_json::Result<String> {
    let snapshot = model.to_snapshot();
    if compact {
        serde_json::to_string(&snapshot)
    } else {
        serde_json::to_string_pretty(&snapshot)
    }
}
