//! URL syntax validation.

use url::Url;

/// Returns true if `input` parses as an absolute URL.
///
/// Any scheme is accepted, so app deep links such as `myapp://open/item`
/// pass alongside `http(s)` URLs. Relative references, bare hostnames and
/// empty strings do not.
///
/// The parser silently strips surrounding whitespace and embedded tabs or
/// newlines. Inputs it would have to clean are rejected, because the raw
/// string is what gets stored and sent back as `Location`.
pub fn is_valid_url(input: &str) -> bool {
    !input.is_empty() && !needs_cleanup(input) && Url::parse(input).is_ok()
}

fn needs_cleanup(input: &str) -> bool {
    input.trim() != input || input.chars().any(|c| c.is_ascii_control())
}
