//! Core domain entities representing the registry data model.
//!
//! # Entity Types
//!
//! - [`LinkEntry`] - A registered slug with its resolved targets
//! - [`LinkTargets`] - The iOS / Android / default target triple
//! - [`LinkInput`] - A partial triple submitted for registration
//! - [`LinkSnapshot`] - The whole registry, as persisted to disk
//! - [`Platform`] - Visitor platform class used to pick a target

pub mod link;
pub mod platform;
pub mod snapshot;

pub use link::{LinkEntry, LinkInput, LinkTargets};
pub use platform::Platform;
pub use snapshot::LinkSnapshot;
