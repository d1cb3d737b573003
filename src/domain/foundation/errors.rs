//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_formats_message() {
        let err = ValidationError::empty_field("title");
        assert_eq!(err.to_string(), "Field 'title' cannot be empty");
    }

    #[test]
    fn out_of_range_formats_message() {
        let err = ValidationError::out_of_range("confidence_score", 0, 100, 120);
        assert_eq!(
            err.to_string(),
            "Field 'confidence_score' must be between 0 and 100, got 120"
        );
    }

    #[test]
    fn invalid_format_formats_message() {
        let err = ValidationError::invalid_format("id", "contains whitespace");
        assert_eq!(
            err.to_string(),
            "Field 'id' has invalid format: contains whitespace"
        );
    }
}
