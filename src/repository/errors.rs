//! # Repository Errors
//!
//! Error types for the course/student store.

use thiserror::Error;

/// Result type for repository operations
pub type CmsResult<T> = Result<T, CmsError>;

/// Repository errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CmsError {
    /// Referenced course does not exist
    #[error("Course {0} not found")]
    CourseNotFound(i32),

    /// Course still has students attached and cannot be removed
    #[error("Course {course_id} has {student_count} enrolled student(s)")]
    CourseHasStudents { course_id: i32, student_count: usize },

    /// Identifier space exhausted
    #[error("No identifiers left in {0} collection")]
    IdExhausted(&'static str),

    /// Storage failure (lock poisoning and the like)
    #[error("Storage error: {0}")]
    Storage(String),
}
