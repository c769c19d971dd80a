//! JSON formatting, minification, and validation.

use crate::error::ToolError;
use serde_json::Value;

fn parse(input: &str) -> Result<Value, ToolError> {
    serde_json::from_str(input).map_err(|e| ToolError::InvalidFormat(format!("invalid JSON: {e}")))
}

/// Pretty-print with two-space indentation.
pub fn format(input: &str) -> Result<String, ToolError> {
    let value = parse(input)?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| ToolError::InvalidFormat(format!("could not serialize JSON: {e}")))
}

/// Re-emit with all insignificant whitespace removed.
pub fn minify(input: &str) -> Result<String, ToolError> {
    let value = parse(input)?;
    serde_json::to_string(&value)
        .map_err(|e| ToolError::InvalidFormat(format!("could not serialize JSON: {e}")))
}

/// Check well-formedness without producing output.
pub fn validate(input: &str) -> Result<(), ToolError> {
    parse(input).map(|_| ())
}
