//! HTTP middleware for request processing.
//!
//! Provides request/response observability.

pub mod tracing;
