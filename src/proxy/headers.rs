//! Forwarded-header allow-list

use axum::http::HeaderMap;

/// Headers carried over to the upstream API. Everything else the browser
/// sends (Host, Cookie, User-Agent, ...) is dropped.
pub const FORWARDED_HEADERS: &[&str] = &["content-type", "clientdeviceid", "authorization"];

/// Select the allow-listed headers from an incoming request. Header names
/// in a `HeaderMap` are already normalized to lowercase, so matching is
/// case-insensitive with respect to what the client sent.
pub fn forwarded_headers(headers: &HeaderMap) -> Vec<(&'static str, String)> {
    FORWARDED_HEADERS
        .iter()
        .filter_map(|&name| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(|value| (name, value.to_string()))
        })
        .collect()
}
