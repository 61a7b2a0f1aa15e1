//! Utility functions used across the application:
//!
//! - [`url_validator`] - URL syntax predicate
//! - [`platform`] - Visitor platform detection from HTTP headers

pub mod platform;
pub mod url_validator;
