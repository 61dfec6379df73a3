//! # Representation Mapper
//!
//! Field-by-field translation between stored entities and their wire
//! representations. Inbound conversions validate before producing an
//! entity; outbound conversions are infallible.

pub mod dto;
pub mod errors;

pub use dto::{CourseDto, CourseSummaryDto, StudentDto};
pub use errors::{MappingError, MappingResult};

use crate::repository::{Course, Student};

const MAX_COURSE_NAME_LEN: usize = 100;
const MAX_PERSON_NAME_LEN: usize = 50;
const MIN_COURSE_DURATION: i32 = 1;
const MAX_COURSE_DURATION: i32 = 5;

fn require_text(
    value: &str,
    field: &'static str,
    max: Option<usize>,
) -> MappingResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MappingError::Required(field));
    }
    if let Some(max) = max {
        if trimmed.chars().count() > max {
            return Err(MappingError::TooLong { field, max });
        }
    }
    Ok(trimmed.to_string())
}

// ==================
// Course
// ==================

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.course_id,
            course_name: course.course_name.clone(),
            course_duration: course.course_duration,
            course_type: course.course_type,
        }
    }
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self::from(&course)
    }
}

impl From<&Course> for CourseSummaryDto {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.course_id,
            course_name: course.course_name.clone(),
        }
    }
}

impl TryFrom<CourseDto> for Course {
    type Error = MappingError;

    fn try_from(dto: CourseDto) -> MappingResult<Self> {
        let name = require_text(&dto.course_name, "courseName", Some(MAX_COURSE_NAME_LEN))?;

        if !(MIN_COURSE_DURATION..=MAX_COURSE_DURATION).contains(&dto.course_duration) {
            return Err(MappingError::OutOfRange {
                field: "courseDuration",
                min: MIN_COURSE_DURATION,
                max: MAX_COURSE_DURATION,
            });
        }

        Ok(Course::new(name, dto.course_duration, dto.course_type))
    }
}

/// Map a list of courses
pub fn course_dtos(courses: &[Course]) -> Vec<CourseDto> {
    courses.iter().map(CourseDto::from).collect()
}

// ==================
// Student
// ==================

impl StudentDto {
    /// Outbound mapping; `course` fills the embedded summary when known
    pub fn from_student(student: &Student, course: Option<&Course>) -> Self {
        Self {
            student_id: student.student_id,
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            phone_number: student.phone_number.clone(),
            address: student.address.clone(),
            course: course.map(CourseSummaryDto::from),
        }
    }

    /// Inbound mapping, attaching the student to `course_id`
    pub fn into_student(self, course_id: i32) -> MappingResult<Student> {
        Ok(Student {
            student_id: 0,
            first_name: require_text(&self.first_name, "firstName", Some(MAX_PERSON_NAME_LEN))?,
            last_name: require_text(&self.last_name, "lastName", Some(MAX_PERSON_NAME_LEN))?,
            phone_number: require_text(&self.phone_number, "phoneNumber", None)?,
            address: self.address.trim().to_string(),
            course_id,
        })
    }
}
