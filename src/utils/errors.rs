//! Error types for proxied requests

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::handlers::cors::cors_headers;

/// Failures while forwarding a request upstream. Upstream HTTP error
/// statuses are not errors here; the proxy relays them verbatim.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("failed to read request body: {0}")]
    BodyRead(#[from] axum::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ProxyError::BodyRead(_) => StatusCode::BAD_REQUEST,
        };

        (status, cors_headers(), self.to_string()).into_response()
    }
}
