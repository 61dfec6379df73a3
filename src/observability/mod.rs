//! Observability for the course service
//!
//! Structured logging through `tracing`. Request-level spans come from
//! `tower-http`'s `TraceLayer`, installed by the HTTP server.

mod logger;

pub use logger::{init_logger, LogFormat, LoggerError};
