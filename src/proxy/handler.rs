//! Request/response proxy handler

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use lazy_static::lazy_static;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::config::{Config, PROXY_TIMEOUT_SECS};
use crate::handlers::cors::cors_headers;
use crate::proxy::headers::forwarded_headers;
use crate::proxy::target::target_url;
use crate::utils::errors::ProxyError;

lazy_static! {
    // Development-only client: certificate and hostname verification are
    // disabled, the upstream is a fixed known host
    static ref HTTP_CLIENT: Client = Client::builder()
        .timeout(Duration::from_secs(PROXY_TIMEOUT_SECS))
        .danger_accept_invalid_certs(true)
        .build()
        .expect("Failed to create HTTP client");
}

/// Proxy handler - forwards `/api/*` requests to the production API
///
/// Upstream HTTP error statuses are relayed verbatim; only transport-level
/// failures (timeout, refused connection, DNS, TLS) become a local 502.
pub async fn proxy_handler(config: Arc<Config>, request: Request) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let headers = request.headers().clone();

    // Read the full request body before forwarding
    let body_bytes = match axum::body::to_bytes(request.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read request body: {}", e);
            return ProxyError::BodyRead(e).into_response();
        }
    };

    let target = target_url(&config.upstream_base, &uri);
    info!("Proxying {} {} -> {}", method, uri.path(), target);
    if !body_bytes.is_empty() {
        info!("Request body: {} bytes", body_bytes.len());
    }

    // Convert axum Method to reqwest Method
    let reqwest_method = match reqwest::Method::from_bytes(method.as_str().as_bytes()) {
        Ok(m) => m,
        Err(e) => {
            error!("Invalid HTTP method: {}", e);
            return (StatusCode::BAD_REQUEST, cors_headers(), "Invalid HTTP method")
                .into_response();
        }
    };

    let mut upstream_request = HTTP_CLIENT.request(reqwest_method, &target);
    if !body_bytes.is_empty() {
        upstream_request = upstream_request.body(body_bytes);
    }

    // Copy only the allow-listed headers; everything else is dropped
    for (name, value) in forwarded_headers(&headers) {
        info!("Forwarding header {}: {}", name, value);
        upstream_request = upstream_request.header(name, value);
    }

    let upstream_response = match upstream_request.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Error proxying to {}: {}", target, e);
            return ProxyError::Upstream(e).into_response();
        }
    };

    let status = StatusCode::from_u16(upstream_response.status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let content_type = upstream_response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let response_body = match upstream_response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read response body from {}: {}", target, e);
            return ProxyError::Upstream(e).into_response();
        }
    };

    info!(
        "Proxied {} {} -> {} ({}, {} bytes)",
        method,
        uri.path(),
        target,
        status,
        response_body.len()
    );

    let mut response_headers = cors_headers();
    if let Ok(value) = HeaderValue::from_str(&content_type) {
        response_headers.insert(header::CONTENT_TYPE, value);
    }

    (status, response_headers, Body::from(response_body.to_vec())).into_response()
}
