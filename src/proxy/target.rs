//! Target URL computation for proxied requests

use axum::http::Uri;

/// Path prefix that selects the API proxy
pub const API_PREFIX: &str = "/api";

/// Whether a request path should be forwarded to the upstream API
pub fn is_api_path(path: &str) -> bool {
    path.starts_with("/api/")
}

/// Build the upstream URL by stripping the `/api` prefix and joining the
/// remaining path (query string included) onto the upstream base
pub fn target_url(upstream_base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let rest = path_and_query
        .strip_prefix(API_PREFIX)
        .unwrap_or(path_and_query);

    format!("{}{}", upstream_base, rest)
}
