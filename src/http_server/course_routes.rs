//! Course HTTP Routes
//!
//! One handler set serves every API version. Version-specific shaping is
//! applied by [`ApiVersion`] after mapping.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::info;

use super::errors::{ApiError, ApiResult};
use super::extract::{ApiJson, CourseIdPath};
use super::version::ApiVersion;
use crate::mapper::{course_dtos, CourseDto, StudentDto};
use crate::repository::{CmsRepository, Course, InMemoryCmsRepository};

// ==================
// Shared State
// ==================

/// Course state shared across handlers
pub struct CourseState {
    pub repository: Arc<dyn CmsRepository>,
}

impl CourseState {
    pub fn new(repository: Arc<dyn CmsRepository>) -> Self {
        Self { repository }
    }
}

impl Default for CourseState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryCmsRepository::new()))
    }
}

// ==================
// Course Routes
// ==================

/// Create course routes
pub fn course_routes(state: Arc<CourseState>) -> Router {
    Router::new()
        .route("/courses", get(list_courses_handler).post(add_course_handler))
        .route(
            "/courses/:course_id",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
        .route(
            "/courses/:course_id/students",
            get(list_students_handler).post(add_student_handler),
        )
        .with_state(state)
}

fn ensure_course_exists(state: &CourseState, course_id: i32) -> ApiResult<()> {
    if state.repository.is_course_exists(course_id)? {
        Ok(())
    } else {
        Err(ApiError::CourseNotFound(course_id))
    }
}

// ==================
// Course Handlers
// ==================

async fn list_courses_handler(
    State(state): State<Arc<CourseState>>,
    version: ApiVersion,
) -> ApiResult<Json<Vec<CourseDto>>> {
    let courses = state.repository.get_all_courses_async().await?;
    let result = version.decorate_course_list(course_dtos(&courses));
    Ok(Json(result))
}

async fn add_course_handler(
    State(state): State<Arc<CourseState>>,
    version: ApiVersion,
    ApiJson(dto): ApiJson<CourseDto>,
) -> ApiResult<Json<CourseDto>> {
    let course = Course::try_from(dto)?;
    let created = state.repository.add_course(course)?;

    info!(course_id = created.course_id, api_version = %version, "course created");
    Ok(Json(CourseDto::from(created)))
}

async fn get_course_handler(
    State(state): State<Arc<CourseState>>,
    _version: ApiVersion,
    CourseIdPath(course_id): CourseIdPath,
) -> ApiResult<Json<CourseDto>> {
    ensure_course_exists(&state, course_id)?;

    let course = state
        .repository
        .get_course(course_id)?
        .ok_or(ApiError::CourseNotFound(course_id))?;
    Ok(Json(CourseDto::from(course)))
}

async fn update_course_handler(
    State(state): State<Arc<CourseState>>,
    version: ApiVersion,
    CourseIdPath(course_id): CourseIdPath,
    ApiJson(dto): ApiJson<CourseDto>,
) -> ApiResult<Json<CourseDto>> {
    ensure_course_exists(&state, course_id)?;

    let course = Course::try_from(dto)?;
    let updated = state
        .repository
        .update_course(course_id, course)?
        .ok_or(ApiError::CourseNotFound(course_id))?;

    info!(course_id, api_version = %version, "course updated");
    Ok(Json(CourseDto::from(updated)))
}

async fn delete_course_handler(
    State(state): State<Arc<CourseState>>,
    version: ApiVersion,
    CourseIdPath(course_id): CourseIdPath,
) -> ApiResult<Json<CourseDto>> {
    ensure_course_exists(&state, course_id)?;

    let deleted = state
        .repository
        .delete_course(course_id)?
        .ok_or_else(|| ApiError::BadRequest(format!("Course {} could not be deleted", course_id)))?;

    info!(course_id, api_version = %version, "course deleted");
    Ok(Json(CourseDto::from(deleted)))
}

// ==================
// Student Handlers
// ==================

async fn list_students_handler(
    State(state): State<Arc<CourseState>>,
    _version: ApiVersion,
    CourseIdPath(course_id): CourseIdPath,
) -> ApiResult<Json<Vec<StudentDto>>> {
    ensure_course_exists(&state, course_id)?;

    let course = state.repository.get_course(course_id)?;
    let students = state.repository.get_students(course_id)?;
    let result = students
        .iter()
        .map(|s| StudentDto::from_student(s, course.as_ref()))
        .collect();
    Ok(Json(result))
}

async fn add_student_handler(
    State(state): State<Arc<CourseState>>,
    version: ApiVersion,
    CourseIdPath(course_id): CourseIdPath,
    ApiJson(dto): ApiJson<StudentDto>,
) -> ApiResult<(StatusCode, Json<StudentDto>)> {
    ensure_course_exists(&state, course_id)?;

    let student = dto.into_student(course_id)?;
    let course = state.repository.get_course(course_id)?;
    let created = state.repository.add_student(student)?;

    info!(
        student_id = created.student_id,
        course_id,
        api_version = %version,
        "student added"
    );
    Ok((
        StatusCode::CREATED,
        Json(StudentDto::from_student(&created, course.as_ref())),
    ))
}
