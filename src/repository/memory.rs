//! # In-Memory Repository
//!
//! Vec-backed store seeded with sample rows.

use std::sync::RwLock;

use tracing::debug;

use super::errors::{CmsError, CmsResult};
use super::models::{Course, CourseType, Student};
use super::CmsRepository;

/// In-memory course/student store
#[derive(Debug)]
pub struct InMemoryCmsRepository {
    courses: RwLock<Vec<Course>>,
    students: RwLock<Vec<Student>>,
}

impl InMemoryCmsRepository {
    /// Create a store holding the sample courses and students
    pub fn new() -> Self {
        let courses = vec![
            Course {
                course_id: 1,
                course_name: "Computer Science".to_string(),
                course_duration: 4,
                course_type: CourseType::Engineering,
            },
            Course {
                course_id: 2,
                course_name: "Information Technology".to_string(),
                course_duration: 4,
                course_type: CourseType::Engineering,
            },
        ];

        let students = vec![
            Student {
                student_id: 101,
                first_name: "James".to_string(),
                last_name: "Smith".to_string(),
                phone_number: "555-555-1234".to_string(),
                address: "US".to_string(),
                course_id: 1,
            },
            Student {
                student_id: 102,
                first_name: "Robert".to_string(),
                last_name: "Smith".to_string(),
                phone_number: "555-555-5678".to_string(),
                address: "Canada".to_string(),
                course_id: 1,
            },
        ];

        Self::with_data(courses, students)
    }

    /// Create a store with no rows
    pub fn empty() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    /// Create a store with the given rows
    pub fn with_data(courses: Vec<Course>, students: Vec<Student>) -> Self {
        Self {
            courses: RwLock::new(courses),
            students: RwLock::new(students),
        }
    }
}

impl Default for InMemoryCmsRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned<T>(_: T) -> CmsError {
    CmsError::Storage("Lock poisoned".to_string())
}

/// Next id after the current maximum; 1 for an empty collection
fn next_id(ids: impl Iterator<Item = i32>, collection: &'static str) -> CmsResult<i32> {
    match ids.max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(CmsError::IdExhausted(collection)),
    }
}

impl CmsRepository for InMemoryCmsRepository {
    fn get_all_courses(&self) -> CmsResult<Vec<Course>> {
        let courses = self.courses.read().map_err(lock_poisoned)?;
        Ok(courses.clone())
    }

    fn is_course_exists(&self, course_id: i32) -> CmsResult<bool> {
        let courses = self.courses.read().map_err(lock_poisoned)?;
        Ok(courses.iter().any(|c| c.course_id == course_id))
    }

    fn get_course(&self, course_id: i32) -> CmsResult<Option<Course>> {
        let courses = self.courses.read().map_err(lock_poisoned)?;
        Ok(courses.iter().find(|c| c.course_id == course_id).cloned())
    }

    fn add_course(&self, mut course: Course) -> CmsResult<Course> {
        let mut courses = self.courses.write().map_err(lock_poisoned)?;

        course.course_id = next_id(courses.iter().map(|c| c.course_id), "course")?;
        courses.push(course.clone());

        debug!(course_id = course.course_id, "course added");
        Ok(course)
    }

    fn update_course(&self, course_id: i32, course: Course) -> CmsResult<Option<Course>> {
        let mut courses = self.courses.write().map_err(lock_poisoned)?;

        Ok(courses
            .iter_mut()
            .find(|c| c.course_id == course_id)
            .map(|existing| {
                existing.apply(&course);
                existing.clone()
            }))
    }

    fn delete_course(&self, course_id: i32) -> CmsResult<Option<Course>> {
        let mut courses = self.courses.write().map_err(lock_poisoned)?;

        let Some(idx) = courses.iter().position(|c| c.course_id == course_id) else {
            return Ok(None);
        };

        let student_count = {
            let students = self.students.read().map_err(lock_poisoned)?;
            students.iter().filter(|s| s.course_id == course_id).count()
        };
        if student_count > 0 {
            return Err(CmsError::CourseHasStudents {
                course_id,
                student_count,
            });
        }

        debug!(course_id, "course deleted");
        Ok(Some(courses.remove(idx)))
    }

    fn get_students(&self, course_id: i32) -> CmsResult<Vec<Student>> {
        let students = self.students.read().map_err(lock_poisoned)?;
        Ok(students
            .iter()
            .filter(|s| s.course_id == course_id)
            .cloned()
            .collect())
    }

    fn add_student(&self, mut student: Student) -> CmsResult<Student> {
        // Same lock order as delete_course: courses, then students
        let courses = self.courses.read().map_err(lock_poisoned)?;
        if !courses.iter().any(|c| c.course_id == student.course_id) {
            return Err(CmsError::CourseNotFound(student.course_id));
        }

        let mut students = self.students.write().map_err(lock_poisoned)?;

        student.student_id = next_id(students.iter().map(|s| s.student_id), "student")?;
        students.push(student.clone());

        debug!(
            student_id = student.student_id,
            course_id = student.course_id,
            "student added"
        );
        Ok(student)
    }
}
