//! # Course Management HTTP Server
//!
//! Axum server exposing the course API in versions 1.0 and 2.0.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/courses` - List / create courses
//! - `/courses/:course_id` - Read / update / delete a course
//! - `/courses/:course_id/students` - List / enroll students
//!
//! The version comes from the `api-version` query parameter or the
//! `x-api-version` header and defaults to 1.0.

pub mod config;
pub mod course_routes;
pub mod errors;
pub mod extract;
pub mod observability_routes;
pub mod server;
pub mod version;

pub use config::{ConfigError, HttpServerConfig};
pub use course_routes::CourseState;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use version::ApiVersion;
