//! Observability module providing log output.
//!
//! Initializes structured logging with configurable formats (pretty, compact,
//! JSON). Logs are written to stderr so that stdout carries only the
//! progress lines the housekeeping jobs print.

mod tracing_init;

pub use tracing_init::*;
