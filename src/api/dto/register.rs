//! DTOs for the link registration endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{LinkEntry, LinkInput};

/// Request to register a slug.
///
/// Every field is optional; at least one must be a non-empty URL.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub ios: Option<String>,
    pub android: Option<String>,
    pub default: Option<String>,
}

impl From<RegisterRequest> for LinkInput {
    fn from(request: RegisterRequest) -> Self {
        LinkInput::new(request.ios, request.android, request.default)
    }
}

/// The stored link, with all three targets filled.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub slug: String,
    pub ios: String,
    pub android: String,
    pub default: String,
}

impl From<LinkEntry> for LinkResponse {
    fn from(entry: LinkEntry) -> Self {
        Self {
            slug: entry.slug,
            ios: entry.targets.ios,
            android: entry.targets.android,
            default: entry.targets.default,
        }
    }
}
