//! # Course Repository
//!
//! Storage abstraction for courses and the students enrolled in them.
//! Handlers only see `dyn CmsRepository`, so the in-memory store can be
//! swapped for a locked map or a database without touching routing code.

pub mod errors;
pub mod memory;
pub mod models;

use async_trait::async_trait;

pub use errors::{CmsError, CmsResult};
pub use memory::InMemoryCmsRepository;
pub use models::{Course, CourseType, Student};

/// Course and student storage
#[async_trait]
pub trait CmsRepository: Send + Sync {
    // ==================
    // Collection
    // ==================

    /// All courses in insertion order
    fn get_all_courses(&self) -> CmsResult<Vec<Course>>;

    /// Async flavor of [`CmsRepository::get_all_courses`].
    ///
    /// Returns the same snapshot; implementations backed by real I/O
    /// should override it.
    async fn get_all_courses_async(&self) -> CmsResult<Vec<Course>> {
        self.get_all_courses()
    }

    // ==================
    // Individual item
    // ==================

    /// Check if a course exists
    fn is_course_exists(&self, course_id: i32) -> CmsResult<bool>;

    /// Find a course by id
    fn get_course(&self, course_id: i32) -> CmsResult<Option<Course>>;

    /// Store a new course; the id on the input is ignored and reassigned
    fn add_course(&self, course: Course) -> CmsResult<Course>;

    /// Overwrite the mutable fields of an existing course.
    ///
    /// Returns `None` when no course has that id.
    fn update_course(&self, course_id: i32, course: Course) -> CmsResult<Option<Course>>;

    /// Remove a course, returning it. `None` when no course has that id.
    fn delete_course(&self, course_id: i32) -> CmsResult<Option<Course>>;

    // ==================
    // Association
    // ==================

    /// Students enrolled in a course, in insertion order
    fn get_students(&self, course_id: i32) -> CmsResult<Vec<Student>>;

    /// Store a new student; the id on the input is ignored and reassigned
    fn add_student(&self, student: Student) -> CmsResult<Student>;
}
