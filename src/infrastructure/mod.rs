//! Infrastructure layer implementing the domain's storage interfaces.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory registry and JSON snapshot file

pub mod persistence;
