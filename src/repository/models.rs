//! # Entity Models
//!
//! Internal storage shapes for courses and students.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of educational program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    Engineering,
    Medical,
    Management,
    Science,
}

impl CourseType {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Engineering => "ENGINEERING",
            CourseType::Medical => "MEDICAL",
            CourseType::Management => "MANAGEMENT",
            CourseType::Science => "SCIENCE",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Course record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_id: i32,
    pub course_name: String,
    /// Duration in years
    pub course_duration: i32,
    pub course_type: CourseType,
}

impl Course {
    /// Build an unsaved course (id is assigned on insert)
    pub fn new(name: impl Into<String>, duration: i32, course_type: CourseType) -> Self {
        Self {
            course_id: 0,
            course_name: name.into(),
            course_duration: duration,
            course_type,
        }
    }

    /// Overwrite every mutable field from `other`, keeping the id
    pub fn apply(&mut self, other: &Course) {
        self.course_name = other.course_name.clone();
        self.course_duration = other.course_duration;
        self.course_type = other.course_type;
    }
}

/// Student record
///
/// The course is referenced by id only; the store owns both collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub course_id: i32,
}
