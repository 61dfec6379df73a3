//! # Wire Representations
//!
//! JSON shapes exchanged with API clients. Field names are camelCase.

use serde::{Deserialize, Serialize};

use crate::repository::CourseType;

/// Course representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    /// Ignored on input; the server assigns ids
    #[serde(default)]
    pub course_id: i32,
    pub course_name: String,
    pub course_duration: i32,
    pub course_type: CourseType,
}

/// Course as embedded in a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummaryDto {
    pub course_id: i32,
    pub course_name: String,
}

/// Student representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    /// Ignored on input; the server assigns ids
    #[serde(default)]
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    /// Output only; the course comes from the route on input
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseSummaryDto>,
}
