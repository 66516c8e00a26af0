//! Shared rendering helpers for commands that print structured data.

use serde::Serialize;

use crate::error::{DevpackError, Result};

/// Render a value as pretty JSON or as YAML.
pub fn render<T: Serialize>(value: &T, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(value).map_err(|e| DevpackError::Other(e.into()))
    } else {
        serde_yaml::to_string(value).map_err(|e| DevpackError::Other(e.into()))
    }
}

/// Render an optional value for key-value summaries.
pub fn or_none(value: Option<String>) -> String {
    value.unwrap_or_else(|| "(none)".to_string())
}
