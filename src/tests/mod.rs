//! Consolidated test modules.
//!
//! End-to-end tests that drive the jobs from a parsed configuration through
//! the client against a mock Clubhouse API.
