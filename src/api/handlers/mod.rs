//! HTTP request handlers for API endpoints.

pub mod health;
pub mod redirect;
pub mod register;

pub use health::health_handler;
pub use redirect::{missing_slug_redirect_handler, redirect_handler};
pub use register::{missing_slug_register_handler, register_handler};
