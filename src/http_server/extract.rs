//! Extractors whose rejections render as [`ApiError`] bodies.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use super::errors::ApiError;

/// JSON body; malformed input becomes a 400
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `:course_id` route segment
#[derive(Debug, Clone, Copy)]
pub struct CourseIdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for CourseIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(course_id) = Path::<i32>::from_request_parts(parts, state).await?;
        Ok(Self(course_id))
    }
}
