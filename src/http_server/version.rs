//! # API Versioning
//!
//! A request selects its API version with the `api-version` query
//! parameter or the `x-api-version` header (query wins). Requests that
//! name no version get 1.0.

use std::fmt;

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use super::errors::ApiError;
use crate::mapper::CourseDto;

/// Query parameter carrying the version
pub const VERSION_QUERY_PARAM: &str = "api-version";

/// Header carrying the version
pub const VERSION_HEADER: &str = "x-api-version";

/// Header advertising the versions this server speaks
pub const SUPPORTED_VERSIONS_HEADER: &str = "api-supported-versions";

/// Value of [`SUPPORTED_VERSIONS_HEADER`]
pub const SUPPORTED_VERSIONS: &str = "1.0, 2.0";

/// Suffix v2 appends to course names in listings
pub const V2_COURSE_NAME_SUFFIX: &str = " (v2.0)";

/// Negotiated API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
}

impl ApiVersion {
    /// Parse a version indicator (`1`, `1.0`, `2`, `2.0`)
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        match raw.trim() {
            "1" | "1.0" => Ok(ApiVersion::V1),
            "2" | "2.0" => Ok(ApiVersion::V2),
            other => Err(ApiError::UnsupportedVersion(other.to_string())),
        }
    }

    /// Returns the canonical version string
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "1.0",
            ApiVersion::V2 => "2.0",
        }
    }

    /// Version-specific shaping of the course listing.
    ///
    /// Only the representation changes; stored names are untouched.
    pub fn decorate_course_list(&self, mut courses: Vec<CourseDto>) -> Vec<CourseDto> {
        if *self == ApiVersion::V2 {
            for course in &mut courses {
                course.course_name.push_str(V2_COURSE_NAME_SUFFIX);
            }
        }
        courses
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct VersionQuery {
    #[serde(rename = "api-version")]
    api_version: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiVersion
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let from_query = Query::<VersionQuery>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::BadRequest(e.body_text()))?
            .0
            .api_version;

        let from_header = match parts.headers.get(VERSION_HEADER) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| ApiError::BadRequest(format!("Invalid {} header", VERSION_HEADER)))?
                    .to_string(),
            ),
            None => None,
        };

        match from_query.or(from_header) {
            Some(raw) => ApiVersion::parse(&raw),
            None => Ok(ApiVersion::default()),
        }
    }
}
