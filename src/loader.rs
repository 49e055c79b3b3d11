//! Loading remediation documents from disk.
//!
//! Documents arrive as JSON (the wire format) or TOML (hand-written plans);
//! both land in a `serde_json::Value` so the model layer sees one input shape.

use serde_json::Value;
use std::path::Path;

use crate::error::RemedianError;

/// Read a remediation document into an untyped value, dispatching on the
/// file extension.
pub fn load_document(path: &Path) -> Result<Value, RemedianError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let contents = std::fs::read_to_string(path)?;
    match extension.as_str() {
        "json" => Ok(serde_json::from_str(&contents)?),
        "toml" => {
            let table: toml::Table = toml::from_str(&contents)?;
            Ok(serde_json::to_value(table)?)
        }
        other => Err(RemedianError::UnsupportedFormat(other.to_string())),
    }
}
