use crate::units::Category;
use std::fmt;

/// Validation failure raised by any of the tool kernels.
///
/// Every variant is a synchronous, local input problem; there is nothing
/// transient to retry. The UI layer owns user-facing wording.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolError {
    /// A numeric or structural parameter is out of range or missing.
    InvalidInput {
        field: &'static str,
        reason: String,
    },
    /// An audio buffer violates its shape invariants.
    InvalidBuffer(String),
    /// A string input (hex colour, Base64, JSON, date) failed to parse.
    InvalidFormat(String),
    /// A unit name is not in the selected category's table.
    UnknownUnit { category: Category, unit: String },
    /// A category name is not one of length/weight/temperature/volume.
    UnknownCategory(String),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::InvalidInput { field, reason } => {
                write!(f, "Invalid {field}: {reason}")
            }
            ToolError::InvalidBuffer(reason) => write!(f, "Invalid audio buffer: {reason}"),
            ToolError::InvalidFormat(reason) => write!(f, "Invalid format: {reason}"),
            ToolError::UnknownUnit { category, unit } => {
                write!(f, "Unknown {category} unit '{unit}'")
            }
            ToolError::UnknownCategory(name) => write!(f, "Unknown unit category '{name}'"),
        }
    }
}

impl std::error::Error for ToolError {}

impl ToolError {
    /// Shorthand for [`ToolError::InvalidInput`] with an owned reason.
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        ToolError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
