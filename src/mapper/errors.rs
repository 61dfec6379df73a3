//! # Mapping Errors

use thiserror::Error;

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

/// Inbound representation failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Required text field missing or blank
    #[error("{0} is required")]
    Required(&'static str),

    /// Text field longer than allowed
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric field outside its range
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}
