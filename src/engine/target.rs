//! Redirect target construction and its inverse.
//!
//! # Responsibilities
//! - Percent-encode the original URL as a single opaque query value
//! - Append it to the local service base as the `url` parameter
//! - Recover the original URL from a target the engine produced
//!
//! # Design Decisions
//! - URL-component encoding: only ASCII alphanumerics and `-_.!~*'()` pass through
//! - The base is concatenated verbatim; no path is inserted before `?`
//! - Decoding is plain percent-decoding, `+` is never treated as a space

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::engine::error::DecisionError;

/// Name of the query parameter carrying the original URL.
pub const URL_PARAM: &str = "url";

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `raw` so it can travel as one query parameter value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Build `<base>?url=<encoded original>`.
pub fn build_target(base: &str, original: &str) -> String {
    format!("{}?{}={}", base, URL_PARAM, encode_component(original))
}

/// Recover the original URL carried by a redirect target.
pub fn extract_original(target: &str) -> Result<String, DecisionError> {
    let parsed = Url::parse(target)
        .map_err(|e| DecisionError::invalid_input(target, format!("not a valid URL: {}", e)))?;

    let query = parsed
        .query()
        .ok_or_else(|| DecisionError::invalid_input(target, "missing query string"))?;

    let encoded = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("url="))
        .ok_or_else(|| DecisionError::invalid_input(target, "missing `url` parameter"))?;

    percent_decode_str(encoded)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecisionError::invalid_input(target, "`url` parameter is not valid UTF-8"))
}
