// ABOUTME: Data payload loading for template rendering
// ABOUTME: Reads and decodes the JSON context file supplied by the caller

use serde_json::Value as JsonValue;
use std::path::Path;

use super::error::{Result, TemplateError};

/// Read and decode the JSON data payload for a render invocation.
///
/// The payload is read once, synchronously, and passed opaquely to the
/// engine as the template's variable context. A payload that fails to
/// decode fails the whole invocation; no partial output is ever produced.
pub fn load_payload(path: &Path) -> Result<JsonValue> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        TemplateError::PayloadError(format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        TemplateError::PayloadError(format!("invalid JSON in {}: {}", path.display(), e))
    })
}
