//! Platform detection from HTTP request headers.

use axum::http::{HeaderMap, header};
use woothee::parser::Parser;

use crate::domain::entities::Platform;

/// Classifies the visitor behind a request from its `User-Agent` header.
///
/// A missing or non-UTF-8 header classifies as [`Platform::Other`].
pub fn detect_platform(headers: &HeaderMap) -> Platform {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(classify_user_agent)
        .unwrap_or(Platform::Other)
}

/// Classifies a raw `User-Agent` string.
///
/// - Android → [`Platform::Android`]
/// - iPhone, iPad, iPod, macOS → [`Platform::IosFamily`]
/// - anything else, including unparsable strings → [`Platform::Other`]
pub fn classify_user_agent(user_agent: &str) -> Platform {
    let Some(result) = Parser::new().parse(user_agent) else {
        return Platform::Other;
    };

    match result.os {
        "Android" => Platform::Android,
        "iPhone" | "iPad" | "iPod" | "Mac OSX" => Platform::IosFamily,
        _ => Platform::Other,
    }
}
