//! cms - Course management web API
//!
//! CRUD over courses and their students, served over HTTP in two API
//! versions that share one handler set.

pub mod cli;
pub mod http_server;
pub mod mapper;
pub mod observability;
pub mod repository;
